//! Optional per-run overrides of the default selectors and flags.
//!
//! Every field is optional; anything left unset keeps its default when the
//! record is built.  Unknown keys are rejected so a misspelt setting fails
//! loudly instead of silently running the reference case.
//!
//! ```toml
//! user = "MEAS"
//! rcp = "ssp370"
//! gcm = "UKESM1-0-LL"
//! heat = 1
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::domain::selectors::{ArchSetting, FloorSetting, Gcm, Node, Rcp, SolarGains, TempVar};
use crate::error::ConfigError;

/// Values to apply over the defaults before derivation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub user: Option<String>,
    pub vstr: Option<String>,
    pub gcm: Option<Gcm>,
    pub rcp: Option<Rcp>,
    pub vstrcntry: Option<String>,
    pub paranalysis_mode: Option<i32>,
    pub runsdd: Option<i32>,
    pub testing_mode: Option<i32>,
    pub popfix: Option<bool>,
    pub constr_setting: Option<i32>,
    pub floor_setting: Option<FloorSetting>,
    pub arch_setting: Option<ArchSetting>,
    pub verbose: Option<bool>,
    pub cool: Option<i32>,
    pub heat: Option<i32>,
    pub solar_gains: Option<SolarGains>,
    pub var: Option<TempVar>,
    pub overwrite: Option<i32>,
    pub node: Option<Node>,
}

impl ConfigOverrides {
    /// Parses overrides from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys, or a
    /// selector outside its enumeration.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Reads overrides from the TOML file at `path`.
///
/// Unlike the user-settings file, a missing overrides file is an error: the
/// caller asked for it explicitly.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if its content is malformed.
pub fn load_overrides(path: &Path) -> Result<ConfigOverrides, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ConfigOverrides::from_toml_str(&content)
}
