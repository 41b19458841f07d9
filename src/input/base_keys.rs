//! Key set of the base English dictionary.

use std::collections::HashSet;
use std::path::Path;

use serde_json::{
    Map,
    Value,
};

use super::error::LoadError;

/// Keys known to the base English dictionary.
///
/// Keyed-mode flattening only keeps leaves whose (possibly normalized) name is
/// one of these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseKeySet {
    keys: HashSet<String>,
}

impl BaseKeySet {
    #[must_use]
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { keys: keys.into_iter().map(Into::into).collect() }
    }

    /// Loads the base dictionary from a JSON object and keeps its top-level keys.
    ///
    /// # Errors
    /// - File missing or unreadable
    /// - Content is not a JSON object
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| LoadError::from_io(path.to_path_buf(), e))?;
        let dictionary: Map<String, Value> = serde_json::from_str(&content)
            .map_err(|source| LoadError::InvalidBaseKeys { path: path.to_path_buf(), source })?;

        tracing::debug!(?path, keys = dictionary.len(), "Loaded base dictionary");
        Ok(Self::new(dictionary.into_iter().map(|(key, _)| key)))
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
