//! Per-user filesystem paths and chunk size.
//!
//! The pipeline runs on several machines, each with its own data layout.  A
//! [`UserSettingsTable`] maps a user identifier to the [`UserPaths`] on that
//! machine and is passed into [`ChilledConfig::build`] explicitly.
//!
//! # File format
//!
//! One TOML table per user:
//!
//! ```toml
//! [MEAS_UNICC]
//! project_path = "/projects/chilled"
//! dle_path = "/data/dle"
//! message_region_map_file = "/data/regions/MESSAGE_R11.csv"
//! isimip_bias_adj_path = "/data/isimip3b"
//! isimip_ewembi_path = "/data/ewembi"
//! chunk_size = 500
//! ```
//!
//! [`ChilledConfig::build`]: crate::ChilledConfig::build

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

/// Paths and chunk size for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserPaths {
    pub project_path: PathBuf,
    pub dle_path: PathBuf,
    pub message_region_map_file: PathBuf,
    pub isimip_bias_adj_path: PathBuf,
    pub isimip_ewembi_path: PathBuf,
    pub chunk_size: u32,
}

/// Lookup of a user identifier into its settings.
#[cfg_attr(test, mockall::automock)]
pub trait UserSettingsProvider {
    /// Returns the settings for `user`, or `None` when there is no entry.
    fn lookup(&self, user: &str) -> Option<UserPaths>;
}

/// Looks `user` up in `provider`, turning a miss into
/// [`ConfigError::UnresolvedUserSettings`].
///
/// # Errors
///
/// Returns [`ConfigError::UnresolvedUserSettings`] when `provider` has no
/// entry for `user`.
pub fn resolve(provider: &dyn UserSettingsProvider, user: &str) -> Result<UserPaths, ConfigError> {
    provider
        .lookup(user)
        .ok_or_else(|| ConfigError::UnresolvedUserSettings {
            user: user.to_string(),
        })
}

/// In-memory user → settings mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserSettingsTable {
    users: BTreeMap<String, UserPaths>,
}

impl UserSettingsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for `user`.
    pub fn insert(&mut self, user: impl Into<String>, paths: UserPaths) {
        self.users.insert(user.into(), paths);
    }

    /// User identifiers present in the table, in sorted order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Parses a table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML or an entry
    /// is missing one of the six fields.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads a table from the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its content is malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_toml_str(&content)?;
        info!(
            "loaded user settings for {} user(s) from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }
}

impl UserSettingsProvider for UserSettingsTable {
    fn lookup(&self, user: &str) -> Option<UserPaths> {
        self.users.get(user).cloned()
    }
}

impl<S: Into<String>> FromIterator<(S, UserPaths)> for UserSettingsTable {
    fn from_iter<I: IntoIterator<Item = (S, UserPaths)>>(iter: I) -> Self {
        Self {
            users: iter.into_iter().map(|(u, p)| (u.into(), p)).collect(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
