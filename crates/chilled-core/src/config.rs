//! The run configuration record.
//!
//! [`ChilledConfig`] is built once per run from defaults, optional
//! [`ConfigOverrides`], an injected user-settings mapping and a clock.  All
//! derived values are computed inside [`ChilledConfig::build`]; afterwards the
//! record exposes read-only accessors only, so it can be shared across threads
//! (e.g. behind an `Arc`) without locking.
//!
//! # Derivation order
//!
//! 1. `rcpdata` from `rcp` (`baseline` reads `ssp126` data).
//! 2. `davar` from `var`.
//! 3. `yeardic` from `rcp`.
//! 4. Paths and `chunk_size` from `user` via the settings mapping.
//! 5. `y2_attrs_dic` from the clock and `arch_setting`.
//!
//! Step 4 is the only one that can fail.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::clock::Clock;
use crate::domain::constants;
use crate::domain::netcdf::{Compression, OutputAttributes, NETCDF4_FORMAT};
use crate::domain::selectors::{
    ArchSetting, FloorSetting, Gcm, Node, Rcp, SolarGains, TempVar, Urt, DEFAULT_USER,
};
use crate::domain::years::{yeardic_for, YearDic};
use crate::error::ConfigError;
use crate::settings::{resolve, ConfigOverrides, UserSettingsProvider};

/// Configuration of one CHILLED run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChilledConfig {
    user: String,
    vstr: String,
    gcm: Gcm,
    rcp: Rcp,
    rcps: Vec<Rcp>,
    rcpdata: Rcp,
    vstrcntry: String,
    paranalysis_mode: i32,
    runsdd: i32,
    testing_mode: i32,
    popfix: bool,
    constr_setting: i32,
    floor_setting: FloorSetting,
    arch_setting: ArchSetting,
    urts: Vec<Urt>,
    verbose: bool,
    cool: i32,
    heat: i32,
    solar_gains: SolarGains,
    var: TempVar,
    davar: TempVar,
    overwrite: i32,
    node: Node,
    project_path: PathBuf,
    dle_path: PathBuf,
    message_region_file: PathBuf,
    isimip_bias_adj_path: PathBuf,
    isimip_ewemib_path: PathBuf,
    chunk_size: u32,
    netcdf4_format: String,
    comp: Compression,
    yeardic: YearDic,
    bal_temps: Vec<f64>,
    arb_fan: i32,
    t_sp_h: i8,
    p_f: i32,
    area_fan: i32,
    gridshape2: (usize, usize),
    y2_attrs_dic: OutputAttributes,
    nd_thresh: i32,
}

impl ChilledConfig {
    /// Builds the record from defaults with `overrides` applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnresolvedUserSettings`] if the selected user has
    /// no entry in `settings`.  No partial record is produced.
    pub fn build(
        overrides: ConfigOverrides,
        settings: &dyn UserSettingsProvider,
        clock: &dyn Clock,
    ) -> Result<Self, ConfigError> {
        let ConfigOverrides {
            user,
            vstr,
            gcm,
            rcp,
            vstrcntry,
            paranalysis_mode,
            runsdd,
            testing_mode,
            popfix,
            constr_setting,
            floor_setting,
            arch_setting,
            verbose,
            cool,
            heat,
            solar_gains,
            var,
            overwrite,
            node,
        } = overrides;

        let user = user.unwrap_or_else(|| DEFAULT_USER.to_string());
        let rcp = rcp.unwrap_or_default();
        let var = var.unwrap_or_default();
        let arch_setting = arch_setting.unwrap_or_default();

        let paranalysis_mode = paranalysis_mode.unwrap_or(1);
        let runsdd = runsdd.unwrap_or(0);
        let testing_mode = testing_mode.unwrap_or(0);
        let cool = cool.unwrap_or(1);
        let heat = heat.unwrap_or(0);
        let overwrite = overwrite.unwrap_or(0);
        for (name, value) in [
            ("paranalysis_mode", paranalysis_mode),
            ("runsdd", runsdd),
            ("testing_mode", testing_mode),
            ("cool", cool),
            ("heat", heat),
            ("overwrite", overwrite),
        ] {
            if value != 0 && value != 1 {
                warn!("{name} = {value} is neither 0 nor 1; non-zero is treated as enabled");
            }
        }

        let rcpdata = rcp.data_scenario();
        let davar = var;
        let yeardic = yeardic_for(rcp);
        let paths = resolve(settings, &user)?;
        let y2_attrs_dic = OutputAttributes::new(clock.now(), arch_setting);

        debug!(
            %user, %rcp, %rcpdata, %var,
            project_path = %paths.project_path.display(),
            chunk_size = paths.chunk_size,
            "resolved run configuration"
        );

        Ok(Self {
            user,
            vstr: vstr.unwrap_or_else(|| constants::VSTR.to_string()),
            gcm: gcm.unwrap_or_default(),
            rcp,
            rcps: Rcp::ALL.to_vec(),
            rcpdata,
            vstrcntry: vstrcntry.unwrap_or_else(|| constants::VSTRCNTRY.to_string()),
            paranalysis_mode,
            runsdd,
            testing_mode,
            popfix: popfix.unwrap_or(true),
            constr_setting: constr_setting.unwrap_or(0),
            floor_setting: floor_setting.unwrap_or_default(),
            arch_setting,
            urts: Urt::ALL.to_vec(),
            verbose: verbose.unwrap_or(true),
            cool,
            heat,
            solar_gains: solar_gains.unwrap_or_default(),
            var,
            davar,
            overwrite,
            node: node.unwrap_or_default(),
            project_path: paths.project_path,
            dle_path: paths.dle_path,
            message_region_file: paths.message_region_map_file,
            isimip_bias_adj_path: paths.isimip_bias_adj_path,
            isimip_ewemib_path: paths.isimip_ewembi_path,
            chunk_size: paths.chunk_size,
            netcdf4_format: NETCDF4_FORMAT.to_string(),
            comp: Compression::default(),
            yeardic,
            bal_temps: constants::BAL_TEMPS.to_vec(),
            arb_fan: constants::ARB_FAN,
            t_sp_h: constants::T_SP_H,
            p_f: constants::P_F,
            area_fan: constants::AREA_FAN,
            gridshape2: constants::GRIDSHAPE2,
            y2_attrs_dic,
            nd_thresh: constants::ND_THRESH,
        })
    }

    /// Builds the reference-case record (no overrides).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnresolvedUserSettings`] if the default user has
    /// no entry in `settings`.
    pub fn with_defaults(
        settings: &dyn UserSettingsProvider,
        clock: &dyn Clock,
    ) -> Result<Self, ConfigError> {
        Self::build(ConfigOverrides::default(), settings, clock)
    }

    /// Renders the record as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    // ── Selectors ─────────────────────────────────────────────────────────────

    pub fn user(&self) -> &str {
        &self.user
    }
    pub fn gcm(&self) -> Gcm {
        self.gcm
    }
    pub fn rcp(&self) -> Rcp {
        self.rcp
    }
    pub fn floor_setting(&self) -> FloorSetting {
        self.floor_setting
    }
    pub fn arch_setting(&self) -> ArchSetting {
        self.arch_setting
    }
    pub fn solar_gains(&self) -> SolarGains {
        self.solar_gains
    }
    pub fn var(&self) -> TempVar {
        self.var
    }
    pub fn node(&self) -> Node {
        self.node
    }

    // ── Scalars ───────────────────────────────────────────────────────────────

    /// Version label for output names.
    pub fn vstr(&self) -> &str {
        &self.vstr
    }
    /// Version of the country data and floor surface.
    pub fn vstrcntry(&self) -> &str {
        &self.vstrcntry
    }
    /// 1 runs the entire parametric analysis, 0 only the reference case.
    pub fn paranalysis_mode(&self) -> i32 {
        self.paranalysis_mode
    }
    /// 1 runs the simple (standard) degree-day calculation.
    pub fn runsdd(&self) -> i32 {
        self.runsdd
    }
    /// 1 selects only two years for testing, 0 runs all years.
    pub fn testing_mode(&self) -> i32 {
        self.testing_mode
    }
    /// Population fixed to SSP2.
    pub fn popfix(&self) -> bool {
        self.popfix
    }
    pub fn constr_setting(&self) -> i32 {
        self.constr_setting
    }
    pub fn verbose(&self) -> bool {
        self.verbose
    }
    /// 1 runs cooling calculations.
    pub fn cool(&self) -> i32 {
        self.cool
    }
    /// 1 runs heating calculations.
    pub fn heat(&self) -> i32 {
        self.heat
    }
    pub fn overwrite(&self) -> i32 {
        self.overwrite
    }

    // ── Derived values ────────────────────────────────────────────────────────

    /// Every scenario the pipeline knows about.
    pub fn rcps(&self) -> &[Rcp] {
        &self.rcps
    }
    /// Scenario whose data files are read.
    pub fn rcpdata(&self) -> Rcp {
        self.rcpdata
    }
    /// Temperature variable name used in data file keys.
    pub fn davar(&self) -> TempVar {
        self.davar
    }
    pub fn yeardic(&self) -> &YearDic {
        &self.yeardic
    }
    pub fn urts(&self) -> &[Urt] {
        &self.urts
    }
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }
    pub fn dle_path(&self) -> &Path {
        &self.dle_path
    }
    pub fn message_region_file(&self) -> &Path {
        &self.message_region_file
    }
    pub fn isimip_bias_adj_path(&self) -> &Path {
        &self.isimip_bias_adj_path
    }
    pub fn isimip_ewemib_path(&self) -> &Path {
        &self.isimip_ewemib_path
    }
    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }
    pub fn y2_attrs_dic(&self) -> &OutputAttributes {
        &self.y2_attrs_dic
    }

    // ── Fixed constants ───────────────────────────────────────────────────────

    pub fn netcdf4_format(&self) -> &str {
        &self.netcdf4_format
    }
    pub fn comp(&self) -> Compression {
        self.comp
    }
    pub fn bal_temps(&self) -> &[f64] {
        &self.bal_temps
    }
    pub fn arb_fan(&self) -> i32 {
        self.arb_fan
    }
    pub fn t_sp_h(&self) -> i8 {
        self.t_sp_h
    }
    pub fn p_f(&self) -> i32 {
        self.p_f
    }
    pub fn area_fan(&self) -> i32 {
        self.area_fan
    }
    pub fn gridshape2(&self) -> (usize, usize) {
        self.gridshape2
    }
    pub fn nd_thresh(&self) -> i32 {
        self.nd_thresh
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
