//! YAML translation file flattening.

use std::path::Path;

use serde_yaml::Value;

use super::base_keys::BaseKeySet;
use super::error::LoadError;
use super::resolver::LocaleFileResolver;
use crate::ir::flat_map::FlatMap;

/// How a string leaf's key is derived from its path.
#[derive(Debug, Clone, Copy)]
pub enum KeyMode<'a> {
    /// All path segments joined by `separator` (e.g. `sidebar.home`).
    Path { separator: &'a str },

    /// The leaf segment alone, validated against the base dictionary.
    ///
    /// Top-level leaves and segments that already are base keys are kept
    /// verbatim. Other segments go through [`normalize_key_segment`] and are
    /// kept only if the result is a base key.
    Keyed { base_keys: &'a BaseKeySet },
}

impl KeyMode<'_> {
    fn key_for(self, path: &[String]) -> Option<String> {
        match self {
            Self::Path { separator } => Some(path.join(separator)),
            Self::Keyed { base_keys } => {
                let leaf = path.last()?;
                if path.len() == 1 || base_keys.contains(leaf) {
                    return Some(leaf.clone());
                }
                let normalized = normalize_key_segment(leaf);
                base_keys.contains(&normalized).then_some(normalized)
            }
        }
    }
}

/// Whole-segment spellings that title-casing would get wrong.
const SPECIAL_SEGMENTS: &[(&str, &str)] =
    &[("co_writer", "Co-Writer"), ("co-writer", "Co-Writer"), ("ideagen", "IdeaGen")];

/// Parts written in upper case after splitting.
const ACRONYMS: &[&str] = &["ai", "api", "id", "llm", "pdf", "rag", "ui", "url"];

/// Turns a YAML key segment into the display form used by the base dictionary.
///
/// # Examples
/// ```
/// use locale_overrides::input::translation::normalize_key_segment;
///
/// assert_eq!(normalize_key_segment("some_feature"), "Some Feature");
/// assert_eq!(normalize_key_segment("co_writer"), "Co-Writer");
/// assert_eq!(normalize_key_segment("llm-settings"), "LLM Settings");
/// ```
#[must_use]
pub fn normalize_key_segment(segment: &str) -> String {
    let lowered = segment.to_lowercase();
    if let Some((_, special)) = SPECIAL_SEGMENTS.iter().find(|(raw, _)| *raw == lowered) {
        return (*special).to_string();
    }

    segment
        .split(['_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            if ACRONYMS.contains(&part.to_lowercase().as_str()) {
                part.to_uppercase()
            } else {
                capitalize(part)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-cases the first character and keeps the rest.
fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

/// Flatten a parsed YAML document into a flat key map.
///
/// Only string leaves contribute entries; numbers, booleans, null, sequences
/// and tagged values are skipped. A root that is not a mapping yields an empty
/// map. When two leaves resolve to the same key, the one visited first in
/// document order wins.
///
/// # Examples
/// ```
/// use locale_overrides::input::translation::{KeyMode, flatten_yaml};
///
/// let yaml: serde_yaml::Value = serde_yaml::from_str(
///     "common:\n  hello: Hello\n  goodbye: Goodbye\n",
/// ).unwrap();
///
/// let flattened = flatten_yaml(&yaml, KeyMode::Path { separator: "." });
/// assert_eq!(flattened.get("common.hello"), Some("Hello"));
/// assert_eq!(flattened.get("common.goodbye"), Some("Goodbye"));
/// ```
#[must_use]
pub fn flatten_yaml(yaml: &Value, mode: KeyMode<'_>) -> FlatMap {
    let mut result = FlatMap::new();
    if yaml.is_mapping() {
        flatten_yaml_value(yaml, mode, &mut Vec::new(), &mut result);
    }
    result
}

fn flatten_yaml_value(
    yaml: &Value,
    mode: KeyMode<'_>,
    path: &mut Vec<String>,
    result: &mut FlatMap,
) {
    match yaml {
        Value::Mapping(map) => {
            for (key, value) in map {
                let Some(segment) = key_segment(key) else {
                    tracing::trace!(?key, "Skipping non-scalar mapping key");
                    continue;
                };
                path.push(segment);
                flatten_yaml_value(value, mode, path, result);
                path.pop();
            }
        }
        Value::String(s) => {
            if let Some(key) = mode.key_for(path) {
                result.insert_first(key, s.as_str());
            }
        }
        _ => {}
    }
}

/// Textual form of a mapping key. Strings, numbers and booleans only.
fn key_segment(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_key(n)),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Writes a number the way an object-key lookup in the web client sees it:
/// `1.0` -> `1`, `-0.0` -> `0`, `.inf` -> `Infinity`, `.nan` -> `NaN`.
fn number_key(n: &serde_yaml::Number) -> String {
    let Some(f) = n.as_f64().filter(|_| n.is_f64()) else {
        return n.to_string();
    };

    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if f == 0.0 {
        "0".to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{f:.0}")
    } else {
        n.to_string()
    }
}

/// Resolve, read and flatten one locale file.
///
/// # Errors
/// - File not found at the resolved path
/// - File read error
/// - YAML parse error
pub fn load_flat_map(
    resolver: &LocaleFileResolver,
    filename: &str,
    mode: KeyMode<'_>,
) -> Result<FlatMap, LoadError> {
    let path = resolver.resolve(filename);
    flatten_file(&path, mode)
}

/// Fail-soft variant of [`load_flat_map`]: any failure yields an empty map.
///
/// A missing or broken locale file only means "no overrides for this locale".
#[must_use]
pub fn load_flat_map_or_empty(
    resolver: &LocaleFileResolver,
    filename: &str,
    mode: KeyMode<'_>,
) -> FlatMap {
    load_flat_map(resolver, filename, mode).unwrap_or_else(|e| {
        tracing::debug!("Using empty translations for {filename}: {e}");
        FlatMap::new()
    })
}

/// Read and flatten the YAML file at `path`.
///
/// # Errors
/// Returns error if file read or YAML parse fails.
pub fn flatten_file(path: &Path, mode: KeyMode<'_>) -> Result<FlatMap, LoadError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| LoadError::from_io(path.to_path_buf(), e))?;

    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })?;

    let flat_map = flatten_yaml(&yaml, mode);
    tracing::debug!(?path, entries = flat_map.len(), "Flattened translation file");
    Ok(flat_map)
}
