//! Integration tests for building `ChilledConfig` through the public API.
//!
//! These exercise the full derivation with a `UserSettingsTable` holding all
//! five known users and a `FixedClock`.

use std::path::{Path, PathBuf};

use chilled_core::{
    ArchSetting, ChilledConfig, ConfigError, ConfigOverrides, FixedClock, Rcp, TempVar, UserPaths,
    UserSettingsTable, KNOWN_USERS, YEAR_LABELS,
};
use chrono::NaiveDate;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn paths_for(user: &str, chunk_size: u32) -> UserPaths {
    let root = format!("/data/{}", user.to_lowercase());
    UserPaths {
        project_path: PathBuf::from(format!("{root}/project")),
        dle_path: PathBuf::from(format!("{root}/dle")),
        message_region_map_file: PathBuf::from(format!("{root}/MESSAGE_R11.csv")),
        isimip_bias_adj_path: PathBuf::from(format!("{root}/isimip3b")),
        isimip_ewembi_path: PathBuf::from(format!("{root}/ewembi")),
        chunk_size,
    }
}

fn all_users() -> UserSettingsTable {
    KNOWN_USERS
        .iter()
        .enumerate()
        .map(|(i, user)| (*user, paths_for(user, 100 * (i as u32 + 1))))
        .collect()
}

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2023, 11, 20)
            .unwrap()
            .and_hms_micro_opt(8, 30, 15, 123456)
            .unwrap(),
    )
}

fn build_with(overrides: ConfigOverrides) -> Result<ChilledConfig, ConfigError> {
    ChilledConfig::build(overrides, &all_users(), &clock())
}

fn with_rcp(rcp: Rcp) -> ConfigOverrides {
    ConfigOverrides {
        rcp: Some(rcp),
        ..ConfigOverrides::default()
    }
}

// ── User settings resolution ──────────────────────────────────────────────────

#[test]
fn test_every_known_user_resolves_its_own_paths() {
    let users = all_users();

    for (i, user) in KNOWN_USERS.iter().enumerate() {
        // Arrange
        let expected = paths_for(user, 100 * (i as u32 + 1));
        let overrides = ConfigOverrides {
            user: Some(user.to_string()),
            ..ConfigOverrides::default()
        };

        // Act
        let cfg = ChilledConfig::build(overrides, &users, &clock()).expect("known user");

        // Assert
        assert_eq!(cfg.user(), *user);
        assert_eq!(cfg.project_path(), expected.project_path.as_path());
        assert_eq!(cfg.dle_path(), expected.dle_path.as_path());
        assert_eq!(
            cfg.message_region_file(),
            expected.message_region_map_file.as_path()
        );
        assert_eq!(
            cfg.isimip_bias_adj_path(),
            expected.isimip_bias_adj_path.as_path()
        );
        assert_eq!(cfg.isimip_ewemib_path(), expected.isimip_ewembi_path.as_path());
        assert_eq!(cfg.chunk_size(), expected.chunk_size);
    }
}

#[test]
fn test_unknown_user_fails_with_unresolved_settings() {
    let overrides = ConfigOverrides {
        user: Some("UNKNOWN".to_string()),
        ..ConfigOverrides::default()
    };

    let err = build_with(overrides).expect_err("UNKNOWN has no settings");

    match err {
        ConfigError::UnresolvedUserSettings { user } => assert_eq!(user, "UNKNOWN"),
        other => panic!("expected UnresolvedUserSettings, got {other:?}"),
    }
}

#[test]
fn test_default_user_missing_from_table_fails() {
    // Arrange: table without MEAS_UNICC
    let users: UserSettingsTable = [("ALE", paths_for("ALE", 1))].into_iter().collect();

    // Act
    let result = ChilledConfig::with_defaults(&users, &clock());

    // Assert
    assert!(matches!(
        result,
        Err(ConfigError::UnresolvedUserSettings { .. })
    ));
}

#[test]
fn test_settings_loaded_from_toml_feed_the_record() {
    // Arrange
    let users = UserSettingsTable::from_toml_str(
        r#"
[MEAS_UNICC]
project_path = "/unicc/project"
dle_path = "/unicc/dle"
message_region_map_file = "/unicc/regions.csv"
isimip_bias_adj_path = "/unicc/isimip"
isimip_ewembi_path = "/unicc/ewembi"
chunk_size = 42
"#,
    )
    .expect("valid settings");

    // Act
    let cfg = ChilledConfig::with_defaults(&users, &clock()).expect("build");

    // Assert
    assert_eq!(cfg.project_path(), Path::new("/unicc/project"));
    assert_eq!(cfg.chunk_size(), 42);
}

// ── Scenario-derived values ───────────────────────────────────────────────────

#[test]
fn test_baseline_reads_ssp126_data() {
    let cfg = build_with(with_rcp(Rcp::Baseline)).unwrap();
    assert_eq!(cfg.rcpdata(), Rcp::Ssp126);
    assert_eq!(cfg.rcpdata().as_str(), "ssp126");
}

#[test]
fn test_projection_scenarios_read_their_own_data() {
    for rcp in [Rcp::Ssp126, Rcp::Ssp370, Rcp::Ssp585] {
        let cfg = build_with(with_rcp(rcp)).unwrap();
        assert_eq!(cfg.rcpdata(), rcp);
    }
}

#[test]
fn test_first_window_is_present_day_for_every_scenario() {
    for rcp in Rcp::ALL {
        let cfg = build_with(with_rcp(*rcp)).unwrap();
        assert_eq!(cfg.yeardic()["2015"].as_pair(), ("2015", "2020"), "{rcp}");
    }
}

#[test]
fn test_baseline_windows_stay_at_present_day() {
    let cfg = build_with(with_rcp(Rcp::Baseline)).unwrap();
    assert_eq!(cfg.yeardic()["2100"].as_pair(), ("2015", "2020"));
    assert_eq!(cfg.yeardic()["2050"].as_pair(), ("2015", "2020"));
}

#[test]
fn test_projection_windows_follow_the_year() {
    for rcp in [Rcp::Ssp126, Rcp::Ssp370, Rcp::Ssp585] {
        let cfg = build_with(with_rcp(rcp)).unwrap();
        assert_eq!(cfg.yeardic()["2100"].as_pair(), ("2095", "2100"));
        assert_eq!(cfg.yeardic()["2050"].as_pair(), ("2035", "2065"));
    }
}

#[test]
fn test_yeardic_covers_all_labels() {
    let cfg = build_with(ConfigOverrides::default()).unwrap();
    let labels: Vec<&str> = cfg.yeardic().keys().map(String::as_str).collect();
    assert_eq!(labels, YEAR_LABELS.to_vec());
}

#[test]
fn test_reference_lists_do_not_depend_on_selectors() {
    // Arrange
    let baseline = build_with(with_rcp(Rcp::Baseline)).unwrap();
    let ssp585 = build_with(with_rcp(Rcp::Ssp585)).unwrap();

    // Assert
    assert_eq!(baseline.rcps(), ssp585.rcps());
    assert_eq!(baseline.rcps(), Rcp::ALL);
    assert_eq!(baseline.urts(), ssp585.urts());
    assert_eq!(baseline.urts().len(), 2);
}

// ── Temperature variable ──────────────────────────────────────────────────────

#[test]
fn test_davar_mirrors_var() {
    for var in [TempVar::Tas, TempVar::Twb] {
        let overrides = ConfigOverrides {
            var: Some(var),
            ..ConfigOverrides::default()
        };
        let cfg = build_with(overrides).unwrap();
        assert_eq!(cfg.davar(), var);
        assert_eq!(cfg.davar().as_str(), var.as_str());
    }
}

// ── Output attributes ─────────────────────────────────────────────────────────

#[test]
fn test_attrs_carry_the_record_arch_setting() {
    for arch in [ArchSetting::Fixed, ArchSetting::Regional] {
        let overrides = ConfigOverrides {
            arch_setting: Some(arch),
            ..ConfigOverrides::default()
        };
        let cfg = build_with(overrides).unwrap();
        assert_eq!(cfg.y2_attrs_dic().arch_setting, cfg.arch_setting());
        assert_eq!(cfg.y2_attrs_dic().as_map()["arch_setting"], arch.as_str());
    }
}

#[test]
fn test_attrs_date_is_the_injected_instant() {
    let cfg = build_with(ConfigOverrides::default()).unwrap();
    assert_eq!(cfg.y2_attrs_dic().date, "2023-11-20 08:30:15.123456");
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[test]
fn test_identical_inputs_build_identical_records() {
    // Arrange
    let overrides = ConfigOverrides::from_toml_str(
        r#"
user = "ED"
gcm = "MRI-ESM2-0"
rcp = "ssp126"
var = "twb"
solar_gains = "HOR"
heat = 1
"#,
    )
    .expect("valid overrides");

    // Act
    let first = build_with(overrides.clone()).unwrap();
    let second = build_with(overrides).unwrap();

    // Assert
    assert_eq!(first, second);
}
