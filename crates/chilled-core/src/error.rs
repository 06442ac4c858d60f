//! Error type for building the run configuration.
//!
//! The only failure the record itself can hit is an unknown `user` key.  The
//! remaining variants belong to the string and file boundaries: parsing a
//! selector from text, and reading the TOML settings/override files.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration construction and loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `user` selector has no entry in the injected user-settings mapping.
    #[error("no user settings found for user '{user}'")]
    UnresolvedUserSettings { user: String },

    /// A selector string is outside its closed enumeration.
    #[error("invalid value '{value}' for {field}; expected one of: {allowed}")]
    InvalidSelector {
        field: &'static str,
        value: String,
        allowed: String,
    },

    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized to TOML.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigError {
    /// Builds an [`ConfigError::InvalidSelector`] from the allowed wire strings.
    pub(crate) fn invalid_selector(field: &'static str, value: &str, allowed: &[&str]) -> Self {
        Self::InvalidSelector {
            field,
            value: value.to_string(),
            allowed: allowed.join(", "),
        }
    }
}
