//! # chilled-core
//!
//! Run configuration for the CHILLED building-energy pipeline, which
//! estimates cooling and heating demand under climate scenarios.
//!
//! The crate holds one record, [`ChilledConfig`], plus the pieces it is
//! built from:
//!
//! - **`domain`** – typed selectors (climate model, scenario, archetype, …),
//!   the averaging-window tables, NetCDF output settings, fixed building
//!   constants and the clock seam.
//! - **`settings`** – the injected user → paths mapping and optional per-run
//!   overrides, both loadable from TOML.
//! - **`config`** – the record itself and its ordered derivation.
//!
//! ```
//! use std::path::PathBuf;
//! use chilled_core::{ChilledConfig, ConfigOverrides, Rcp, SystemClock};
//! use chilled_core::{UserPaths, UserSettingsTable};
//!
//! let mut users = UserSettingsTable::new();
//! users.insert("MEAS", UserPaths {
//!     project_path: PathBuf::from("/projects/chilled"),
//!     dle_path: PathBuf::from("/data/dle"),
//!     message_region_map_file: PathBuf::from("/data/regions.csv"),
//!     isimip_bias_adj_path: PathBuf::from("/data/isimip3b"),
//!     isimip_ewembi_path: PathBuf::from("/data/ewembi"),
//!     chunk_size: 500,
//! });
//!
//! let overrides = ConfigOverrides {
//!     user: Some("MEAS".to_string()),
//!     rcp: Some(Rcp::Ssp370),
//!     ..ConfigOverrides::default()
//! };
//! let cfg = ChilledConfig::build(overrides, &users, &SystemClock).unwrap();
//! assert_eq!(cfg.rcpdata(), Rcp::Ssp370);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod settings;

pub use config::ChilledConfig;
pub use domain::clock::{Clock, FixedClock, SystemClock};
pub use domain::netcdf::{Compression, OutputAttributes};
pub use domain::selectors::{
    ArchSetting, FloorSetting, Gcm, Node, Rcp, SolarGains, TempVar, Urt, DEFAULT_USER,
    KNOWN_USERS,
};
pub use domain::years::{YearDic, YearWindow, YEAR_LABELS};
pub use error::ConfigError;
pub use settings::{ConfigOverrides, UserPaths, UserSettingsProvider, UserSettingsTable};
