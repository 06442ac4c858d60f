//! `chilled-config` — prints the resolved CHILLED run configuration.
//!
//! Loads the user-settings file, applies an optional overrides file and any
//! selector flags, builds the [`ChilledConfig`] and writes it to stdout.  Logs
//! go to stderr so the output can be redirected into a file.
//!
//! # Usage
//!
//! ```text
//! chilled-config --user-settings users.toml [OPTIONS]
//!
//! Options:
//!   --user-settings <PATH>  User → paths mapping (TOML)
//!   --overrides <PATH>      Per-run overrides (TOML)
//!   --user <USER>           One of ALE, ED, MEAS, MEAS_EBRO, MEAS_UNICC
//!   --gcm <GCM>             Climate model
//!   --rcp <RCP>             ssp126 | ssp370 | ssp585 | baseline
//!   --var <VAR>             tas | twb
//!   --arch-setting <ARCH>   fixed | regional
//!   --format <FORMAT>       toml | json [default: toml]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                | Flag              |
//! |-------------------------|-------------------|
//! | `CHILLED_USER_SETTINGS` | `--user-settings` |
//! | `CHILLED_OVERRIDES`     | `--overrides`     |
//! | `CHILLED_USER`          | `--user`          |
//!
//! Flags take precedence over values from the overrides file.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chilled_core::settings::load_overrides;
use chilled_core::{
    ArchSetting, ChilledConfig, ConfigOverrides, Gcm, Rcp, SystemClock, TempVar,
    UserSettingsTable,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Output encoding of the resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Toml,
    Json,
}

/// Prints the resolved CHILLED run configuration.
#[derive(Debug, Parser)]
#[command(
    name = "chilled-config",
    about = "Resolve and print the CHILLED run configuration",
    version
)]
struct Cli {
    /// TOML file mapping each user to their paths and chunk size.
    #[arg(long, env = "CHILLED_USER_SETTINGS")]
    user_settings: PathBuf,

    /// Optional TOML file of per-run overrides.
    #[arg(long, env = "CHILLED_OVERRIDES")]
    overrides: Option<PathBuf>,

    /// User whose paths are used.
    #[arg(long, env = "CHILLED_USER")]
    user: Option<String>,

    /// Climate model.
    #[arg(long)]
    gcm: Option<Gcm>,

    /// Emissions scenario.
    #[arg(long)]
    rcp: Option<Rcp>,

    /// Temperature variable.
    #[arg(long)]
    var: Option<TempVar>,

    /// Building archetype setting.
    #[arg(long)]
    arch_setting: Option<ArchSetting>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Toml)]
    format: OutputFormat,
}

impl Cli {
    /// Reads the overrides file (if any) and lays the selector flags over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the overrides file cannot be read or parsed.
    fn resolve_overrides(&self) -> anyhow::Result<ConfigOverrides> {
        let mut overrides = match &self.overrides {
            Some(path) => load_overrides(path)
                .with_context(|| format!("failed to load overrides from {}", path.display()))?,
            None => ConfigOverrides::default(),
        };

        if let Some(user) = &self.user {
            overrides.user = Some(user.clone());
        }
        overrides.gcm = self.gcm.or(overrides.gcm);
        overrides.rcp = self.rcp.or(overrides.rcp);
        overrides.var = self.var.or(overrides.var);
        overrides.arch_setting = self.arch_setting.or(overrides.arch_setting);
        Ok(overrides)
    }
}

/// Renders `config` in the requested format.
fn render(config: &ChilledConfig, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Toml => Ok(config.to_toml_string()?),
        OutputFormat::Json => {
            serde_json::to_string_pretty(config).context("failed to render configuration as JSON")
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Level is overridden by `RUST_LOG`; stdout is reserved for the output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = UserSettingsTable::load(&cli.user_settings).with_context(|| {
        format!(
            "failed to load user settings from {}",
            cli.user_settings.display()
        )
    })?;
    let overrides = cli.resolve_overrides()?;

    let config = ChilledConfig::build(overrides, &settings, &SystemClock)
        .context("failed to build run configuration")?;

    info!(
        "resolved configuration — user={}, gcm={}, rcp={} (data {})",
        config.user(),
        config.gcm(),
        config.rcp(),
        config.rcpdata()
    );

    println!("{}", render(&config, cli.format)?);
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
