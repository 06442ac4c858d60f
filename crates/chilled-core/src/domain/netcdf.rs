//! NetCDF output settings and file attribution.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use super::selectors::ArchSetting;

/// NetCDF flavour written by the pipeline.
pub const NETCDF4_FORMAT: &str = "NETCDF4_CLASSIC";

/// Timestamp layout of the `date` attribute (microsecond precision).
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Variable compression options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Compression {
    pub zlib: bool,
    /// 0 (none) to 9 (highest).
    pub complevel: u8,
}

impl Default for Compression {
    fn default() -> Self {
        Self {
            zlib: true,
            complevel: 5,
        }
    }
}

/// Global attributes stamped on every output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputAttributes {
    pub title: String,
    pub authors: String,
    pub date: String,
    pub institution: String,
    pub contact: String,
    pub arch_setting: ArchSetting,
}

impl OutputAttributes {
    /// Builds the attribute set for a run started at `created`.
    pub fn new(created: NaiveDateTime, arch_setting: ArchSetting) -> Self {
        Self {
            title: "map_area_env".to_string(),
            authors: "Alessio Mastrucci & Edward Byers".to_string(),
            date: created.format(DATE_FORMAT).to_string(),
            institution: "IIASA Energy Program".to_string(),
            contact: "mastrucc@iiasa.ac.at; byers@iiasa.ac.at; ".to_string(),
            arch_setting,
        }
    }

    /// Attributes as the ordered name → value dictionary written to files.
    pub fn as_map(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("title", self.title.clone()),
            ("authors", self.authors.clone()),
            ("date", self.date.clone()),
            ("institution", self.institution.clone()),
            ("contact", self.contact.clone()),
            ("arch_setting", self.arch_setting.to_string()),
        ])
    }
}
