use std::path::PathBuf;

use thiserror::Error;

/// Reasons a translation source could not be turned into a flat map.
#[derive(Error, Debug)]
pub enum LoadError {
    /// No file at the resolved path
    #[error("Translation file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read
    #[error("Failed to read translation file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML
    #[error("Failed to parse YAML in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The base dictionary is not a JSON object
    #[error("Invalid base dictionary {}: {source}", .path.display())]
    InvalidBaseKeys {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Maps an I/O error on `path` to `NotFound` or `Read`.
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
