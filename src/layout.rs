//! Per-render data for the root page layout.
//!
//! Everything the page shell needs from the i18n layer is computed here once per
//! render and handed to consumers as a value. Nothing is written to global state.

use std::path::Path;

use serde::Serialize;

use crate::config::{
    ConfigManager,
    MergeStrategy,
    OverrideSettings,
};
use crate::input::base_keys::BaseKeySet;
use crate::input::error::LoadError;
use crate::input::resolver::LocaleFileResolver;
use crate::input::translation::{
    KeyMode,
    load_flat_map_or_empty,
};
use crate::ir::overrides::{
    OverridesByLocale,
    build_overrides_by_locale,
};
use crate::locale::{
    DEFAULT_LANGUAGE,
    Locale,
};

/// Inputs of the root layout: initial language and override maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutContext {
    pub initial_language: Locale,
    pub i18n_overrides: OverridesByLocale,
}

impl LayoutContext {
    /// Builds the layout context for one render.
    ///
    /// Locale files that are missing or broken contribute no overrides. The base
    /// dictionary used by the keyed strategy is not optional: failing to load it
    /// is an error.
    ///
    /// # Arguments
    /// * `settings` - validated settings
    /// * `workspace_root` - base for relative paths in `settings`
    /// * `cookie_header` - raw `Cookie` request header, if any
    pub fn prepare(
        settings: &OverrideSettings,
        workspace_root: &Path,
        cookie_header: Option<&str>,
    ) -> Result<Self, LoadError> {
        let resolver = LocaleFileResolver::with_base(workspace_root, &settings.locale_roots);
        let i18n_overrides = collect_overrides(settings, workspace_root, &resolver)?;
        let initial_language = initial_language(cookie_header, &settings.language_cookie);

        Ok(Self { initial_language, i18n_overrides })
    }

    /// Builds the layout context from loaded settings.
    ///
    /// Relative paths resolve against the manager's workspace root, or the
    /// current directory when settings were loaded without one.
    pub fn from_config(
        config_manager: &ConfigManager,
        cookie_header: Option<&str>,
    ) -> Result<Self, LoadError> {
        let workspace_root = config_manager.workspace_root().unwrap_or_else(|| Path::new("."));
        Self::prepare(config_manager.get_settings(), workspace_root, cookie_header)
    }

    /// Value for the `lang` / `data-lang` attributes of the root element.
    #[must_use]
    pub const fn html_lang(&self) -> &'static str {
        self.initial_language.code()
    }
}

/// Flattens English and every overlay locale, then re-keys the overlays by
/// English text.
///
/// # Errors
/// Base dictionary load failure (keyed strategy only).
pub fn collect_overrides(
    settings: &OverrideSettings,
    workspace_root: &Path,
    resolver: &LocaleFileResolver,
) -> Result<OverridesByLocale, LoadError> {
    let base_keys = match (settings.merge_strategy, &settings.base_keys_file) {
        (MergeStrategy::Keyed, Some(file)) => {
            tracing::warn!("The keyed merge strategy is deprecated; prefer mergeStrategy \"path\"");
            BaseKeySet::load(&workspace_root.join(file))?
        }
        _ => BaseKeySet::default(),
    };

    let mode = match settings.merge_strategy {
        MergeStrategy::Path => KeyMode::Path { separator: &settings.key_separator },
        MergeStrategy::Keyed => KeyMode::Keyed { base_keys: &base_keys },
    };

    let english = load_flat_map_or_empty(resolver, &DEFAULT_LANGUAGE.file_name(), mode);
    let overlays: Vec<(Locale, _)> = settings
        .overlays()
        .into_iter()
        .map(|locale| (locale, load_flat_map_or_empty(resolver, &locale.file_name(), mode)))
        .collect();

    Ok(build_overrides_by_locale(
        &english,
        overlays.iter().map(|(locale, flat_map)| (*locale, flat_map)),
    ))
}

/// Picks the initial display language from the language cookie.
///
/// Falls back to the default language when the cookie is absent or invalid.
#[must_use]
pub fn initial_language(cookie_header: Option<&str>, cookie_name: &str) -> Locale {
    let value = cookie_header.and_then(|header| cookie_value(header, cookie_name));
    Locale::from_cookie_value(value)
}

/// Extracts the value of cookie `name` from a `Cookie` header (`a=1; b=2`).
fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"'))
}
