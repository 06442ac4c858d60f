//! Inputs that feed the configuration record from outside the crate.
//!
//! - `user_settings`: the user → paths mapping, injected into the record's
//!   constructor and loadable from a TOML file.
//! - `overrides`: optional per-run values applied over the defaults.

pub mod overrides;
pub mod user_settings;

pub use overrides::{load_overrides, ConfigOverrides};
pub use user_settings::{resolve, UserPaths, UserSettingsProvider, UserSettingsTable};
