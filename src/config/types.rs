use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::locale::Locale;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "localeRoots[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// How flat-map keys are derived before English and overlay maps are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MergeStrategy {
    /// Dot-joined path of every segment.
    #[default]
    Path,
    /// Normalized leaf name matched against the base dictionary.
    ///
    /// Deprecated in favour of `Path`.
    Keyed,
}

impl MergeStrategy {
    /// Overlay locales merged when `overlayLocales` is not set.
    #[must_use]
    pub fn default_overlays(self) -> Vec<Locale> {
        match self {
            Self::Path => Locale::overlays().collect(),
            Self::Keyed => vec![Locale::ZhCn, Locale::ZhTw],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverrideSettings {
    /// Candidate directories holding `<locale>.yaml`, relative to the workspace root.
    /// Checked in order.
    pub locale_roots: Vec<String>,

    pub merge_strategy: MergeStrategy,

    pub key_separator: String,

    /// Locales merged against English.
    ///
    /// - `None`: depends on `merge_strategy` (see [`MergeStrategy::default_overlays`])
    /// - `Some([...])`: only these. Listing order does not matter; output is
    ///   always ordered like [`SUPPORTED_LANGUAGES`](crate::locale::SUPPORTED_LANGUAGES)
    pub overlay_locales: Option<Vec<Locale>>,

    /// JSON export of the base English dictionary. Required by the keyed strategy.
    pub base_keys_file: Option<String>,

    /// Cookie carrying the user's language choice.
    pub language_cookie: String,
}

impl OverrideSettings {
    /// Overlay locales to merge, after applying the strategy default.
    #[must_use]
    pub fn overlays(&self) -> Vec<Locale> {
        self.overlay_locales.clone().unwrap_or_else(|| self.merge_strategy.default_overlays())
    }

    /// # Errors
    /// - Required field is empty
    /// - Default language listed as an overlay
    /// - Keyed strategy without a base dictionary
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.locale_roots.is_empty() {
            errors.push(ValidationError::new(
                "localeRoots",
                "At least one directory is required. Example: [\"lib/i18n/locales\"]",
            ));
        }

        for (index, root) in self.locale_roots.iter().enumerate() {
            if root.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("localeRoots[{index}]"),
                    "The directory cannot be empty",
                ));
            }
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if let Some(overlays) = &self.overlay_locales {
            for (index, locale) in overlays.iter().enumerate() {
                if locale.is_default() {
                    errors.push(ValidationError::new(
                        format!("overlayLocales[{index}]"),
                        format!("'{locale}' is the base language and cannot be an overlay"),
                    ));
                }
            }
        }

        if self.merge_strategy == MergeStrategy::Keyed && self.base_keys_file.is_none() {
            errors.push(ValidationError::new(
                "baseKeysFile",
                "The keyed merge strategy requires a base dictionary. Example: \"web/lib/i18n/en.json\"",
            ));
        }

        if self.language_cookie.is_empty() {
            errors.push(ValidationError::new("languageCookie", "The cookie name cannot be empty"));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for OverrideSettings {
    fn default() -> Self {
        Self {
            locale_roots: vec!["lib/i18n/locales".to_string(), "web/lib/i18n/locales".to_string()],
            merge_strategy: MergeStrategy::default(),
            key_separator: ".".to_string(),
            overlay_locales: None,
            base_keys_file: None,
            language_cookie: "deeptutor-language".to_string(),
        }
    }
}
