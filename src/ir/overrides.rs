//! Override maps: translations re-keyed by the English source text.

use std::collections::BTreeMap;

use super::flat_map::FlatMap;
use crate::locale::Locale;

/// English literal -> localized literal.
///
/// Presentation code looks strings up by the English text it is about to
/// render, not by a structural key.
pub type OverrideMap = FlatMap;

/// Override maps for each merged overlay locale, ordered like
/// [`SUPPORTED_LANGUAGES`](crate::locale::SUPPORTED_LANGUAGES).
pub type OverridesByLocale = BTreeMap<Locale, OverrideMap>;

/// Re-keys `other` through the key space of `english`.
///
/// For every `(key, english_value)` in `english` (in its iteration order), if
/// `other` has a value at the same `key`, records `english_value -> other_value`.
/// When several English keys share the same text, the first one wins.
///
/// # Examples
/// ```
/// use locale_overrides::ir::flat_map::FlatMap;
/// use locale_overrides::ir::overrides::build_overrides;
///
/// let english: FlatMap = [("a.b", "Hello"), ("a.c", "World")].into_iter().collect();
/// let chinese: FlatMap = [("a.b", "你好"), ("a.c", "世界")].into_iter().collect();
///
/// let overrides = build_overrides(&english, &chinese);
/// assert_eq!(overrides.get("Hello"), Some("你好"));
/// assert_eq!(overrides.get("World"), Some("世界"));
/// ```
#[must_use]
pub fn build_overrides(english: &FlatMap, other: &FlatMap) -> OverrideMap {
    let mut overrides = OverrideMap::new();
    for (key, english_value) in english.iter() {
        if let Some(other_value) = other.get(key) {
            overrides.insert_first(english_value, other_value);
        }
    }
    overrides
}

/// Builds one override map per overlay locale against the same English map.
#[must_use]
pub fn build_overrides_by_locale<'a>(
    english: &FlatMap,
    overlays: impl IntoIterator<Item = (Locale, &'a FlatMap)>,
) -> OverridesByLocale {
    overlays
        .into_iter()
        .map(|(locale, flat_map)| {
            let overrides = build_overrides(english, flat_map);
            tracing::debug!(%locale, entries = overrides.len(), "Built translation overrides");
            (locale, overrides)
        })
        .collect()
}
