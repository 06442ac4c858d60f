//! Climate averaging windows per output year.
//!
//! Each output year label maps to the `(start, end)` year range whose climate
//! data is averaged for it.  Baseline runs collapse every label onto the
//! present-day 2015–2020 window; projection runs use a window that follows
//! the label forward in time.

use std::collections::BTreeMap;

use serde::Serialize;

use super::selectors::Rcp;

/// Output year labels, in order.
pub const YEAR_LABELS: [&str; 10] = [
    "2015", "2020", "2030", "2040", "2050", "2060", "2070", "2080", "2090", "2100",
];

const BASELINE_WINDOWS: [(&str, &str); 10] = [("2015", "2020"); 10];

const PROJECTION_WINDOWS: [(&str, &str); 10] = [
    ("2015", "2020"),
    ("2015", "2025"),
    ("2015", "2045"),
    ("2025", "2055"),
    ("2035", "2065"),
    ("2045", "2075"),
    ("2055", "2085"),
    ("2065", "2095"),
    ("2080", "2100"),
    ("2095", "2100"),
];

/// Start and end year (inclusive labels) of one averaging window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearWindow {
    pub start: String,
    pub end: String,
}

impl YearWindow {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Borrowed `(start, end)` pair.
    pub fn as_pair(&self) -> (&str, &str) {
        (self.start.as_str(), self.end.as_str())
    }
}

/// Year label → averaging window.
pub type YearDic = BTreeMap<String, YearWindow>;

fn build_table(windows: &[(&str, &str); 10]) -> YearDic {
    YEAR_LABELS
        .iter()
        .zip(windows.iter())
        .map(|(label, (start, end))| (label.to_string(), YearWindow::new(start, end)))
        .collect()
}

/// Table used when the scenario is `baseline`.
pub fn baseline_yeardic() -> YearDic {
    build_table(&BASELINE_WINDOWS)
}

/// Table used for every projection scenario.
pub fn projection_yeardic() -> YearDic {
    build_table(&PROJECTION_WINDOWS)
}

/// Returns a fresh copy of the table matching `rcp`.
pub fn yeardic_for(rcp: Rcp) -> YearDic {
    match rcp {
        Rcp::Baseline => baseline_yeardic(),
        Rcp::Ssp126 | Rcp::Ssp370 | Rcp::Ssp585 => projection_yeardic(),
    }
}
