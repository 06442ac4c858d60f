//! Closed enumerations for the run selectors.
//!
//! Every selector renders to (and parses from) the exact string used by the
//! pipeline's file names and data keys, e.g. `"GFDL-ESM4"` or `"ssp126"`.
//! Parsing a string outside the enumeration fails with
//! [`ConfigError::InvalidSelector`]; once a value is typed, an out-of-range
//! selector cannot be represented.
//!
//! The `user` selector is not an enum: it is only checked by looking it up in
//! the injected user-settings mapping (see [`crate::settings`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// User identifiers known to ship with a settings entry.
pub const KNOWN_USERS: [&str; 5] = ["ALE", "ED", "MEAS", "MEAS_EBRO", "MEAS_UNICC"];

/// User selected when no override is given.
pub const DEFAULT_USER: &str = "MEAS_UNICC";

/// Declares a selector enum with its wire strings, default, `ALL` listing,
/// `Display` and a `FromStr` that reports [`ConfigError::InvalidSelector`].
macro_rules! selector {
    (
        $(#[$meta:meta])*
        pub enum $name:ident for $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire string for this variant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => {
                        let allowed: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        Err(ConfigError::invalid_selector($field, other, &allowed))
                    }
                }
            }
        }
    };
}

selector! {
    /// Global climate model whose bias-adjusted data is read.
    pub enum Gcm for "gcm" {
        GfdlEsm4 => "GFDL-ESM4",
        IpslCm6aLr => "IPSL-CM6A-LR",
        MpiEsm12Hr => "MPI-ESM1-2-HR",
        MriEsm20 => "MRI-ESM2-0",
        Ukesm10Ll => "UKESM1-0-LL",
    }
    default = GfdlEsm4;
}

selector! {
    /// Emissions scenario of the run.
    pub enum Rcp for "rcp" {
        Ssp126 => "ssp126",
        Ssp370 => "ssp370",
        Ssp585 => "ssp585",
        /// Present-day climate held fixed; reads `ssp126` data.
        Baseline => "baseline",
    }
    default = Baseline;
}

impl Rcp {
    /// Scenario whose data files back this run.
    pub fn data_scenario(self) -> Rcp {
        match self {
            Rcp::Baseline => Rcp::Ssp126,
            other => other,
        }
    }
}

selector! {
    /// Floor-area setting.
    pub enum FloorSetting for "floor_setting" {
        /// Standard capacity.
        StdCap => "std_cap",
        /// Per capita.
        PerCap => "per_cap",
    }
    default = StdCap;
}

selector! {
    /// Building archetype setting.
    pub enum ArchSetting for "arch_setting" {
        /// Same values for all regions.
        Fixed => "fixed",
        /// Different values by MESSAGE region.
        Regional => "regional",
    }
    default = Regional;
}

selector! {
    /// Solar gain calculation.
    pub enum SolarGains for "solar_gains" {
        /// Windows and roof.
        Tot => "TOT",
        /// Windows only.
        Vert => "VERT",
        /// Roof only.
        Hor => "HOR",
    }
    default = Tot;
}

selector! {
    /// Temperature variable driving the calculation.
    pub enum TempVar for "var" {
        /// Near-surface air temperature.
        Tas => "tas",
        /// Wet-bulb temperature.
        Twb => "twb",
    }
    default = Tas;
}

selector! {
    /// Spatial (regional) resolution.
    // TODO: add R12 once the regional input files for it exist.
    pub enum Node for "node" {
        R11 => "R11",
    }
    default = R11;
}

selector! {
    /// Urban/rural disaggregation.
    pub enum Urt for "urt" {
        Urban => "urban",
        Rural => "rural",
    }
    default = Urban;
}
