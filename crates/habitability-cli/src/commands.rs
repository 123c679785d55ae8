pub mod assess;
pub mod catalog;
pub mod checks;
pub mod presets;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use habitability::{AssessmentConfig, AtmosphereModel, RotationModel};
use stellar::ZoneModel;
use tracing::debug;

#[derive(Parser)]
#[command(name = "exohab")]
#[command(about = "Exoplanet habitability calculator.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON file with model presets, thresholds and constants
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Habitable zone model (conservative, simple, flux)
    #[arg(long, global = true, value_name = "MODEL")]
    pub zone_model: Option<ZoneModel>,

    /// Rotation model (heuristic, kepler)
    #[arg(long, global = true, value_name = "MODEL")]
    pub rotation_model: Option<RotationModel>,

    /// Atmosphere model (categorical, hazard-index)
    #[arg(long, global = true, value_name = "MODEL")]
    pub atmosphere_model: Option<AtmosphereModel>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors; results are still printed
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every check, prompting for missing inputs
    #[command(alias = "a")]
    Assess(AssessArgs),
    /// Luminosity and habitable zone from absolute magnitude
    #[command(alias = "s")]
    Star(StarArgs),
    /// Mass-only rotation difference heuristic
    #[command(alias = "r")]
    Rotation(RotationArgs),
    /// ΔP/P tidal synchronization check
    Sync(SyncArgs),
    /// Atmospheric survivability from O2 and CO2 concentrations
    #[command(alias = "atm")]
    Atmosphere(AtmosphereArgs),
    /// Screen a JSON catalog export
    #[command(alias = "c")]
    Catalog(CatalogArgs),
    /// Show model presets and reference tables
    #[command(alias = "p")]
    Presets,
}

#[derive(Args, Debug, Default)]
pub struct AssessArgs {
    /// Absolute magnitude Mv
    #[arg(long, allow_negative_numbers = true)]
    pub magnitude: Option<f64>,
    /// Orbital distance in AU
    #[arg(long)]
    pub distance: Option<f64>,
    /// Stellar mass in solar masses
    #[arg(long)]
    pub mass: Option<f64>,
    /// O2 concentration in percent
    #[arg(long)]
    pub o2: Option<f64>,
    /// CO2 concentration in percent
    #[arg(long)]
    pub co2: Option<f64>,
}

#[derive(Args, Debug)]
pub struct StarArgs {
    /// Absolute magnitude Mv
    #[arg(long, allow_negative_numbers = true, required_unless_present = "class", conflicts_with = "class")]
    pub magnitude: Option<f64>,
    /// Reference spectral class instead of a magnitude (e.g. G2, K)
    #[arg(long)]
    pub class: Option<String>,
    /// Also check whether a planet at this distance (AU) is in the zone
    #[arg(long)]
    pub distance: Option<f64>,
}

#[derive(Args, Debug)]
pub struct RotationArgs {
    /// Stellar mass in solar masses
    #[arg(long)]
    pub mass: f64,
}

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Stellar mass in solar masses
    #[arg(long, required_unless_present_any = ["orbital_days", "planet"], requires = "radius")]
    pub mass: Option<f64>,
    /// Orbital radius in AU
    #[arg(long, requires = "mass")]
    pub radius: Option<f64>,
    /// Measured orbital period in days
    #[arg(long, conflicts_with_all = ["mass", "radius"])]
    pub orbital_days: Option<f64>,
    /// Measured rotation period in days (defaults to the initial spin period)
    #[arg(long, requires = "orbital_days")]
    pub rotation_days: Option<f64>,
    /// Solar System planet to take both periods from
    #[arg(long, conflicts_with_all = ["mass", "radius", "orbital_days", "rotation_days"])]
    pub planet: Option<String>,
}

#[derive(Args, Debug)]
pub struct AtmosphereArgs {
    /// O2 concentration in percent
    #[arg(long, required_unless_present = "planet")]
    pub o2: Option<f64>,
    /// CO2 concentration in percent
    #[arg(long, required_unless_present = "planet")]
    pub co2: Option<f64>,
    /// Solar System planet to take the composition from
    #[arg(long, conflicts_with_all = ["o2", "co2"])]
    pub planet: Option<String>,
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// JSON array of { name, orbitalPeriodDays, starMassSolar } rows
    #[arg(long, value_name = "FILE")]
    pub file: PathBuf,
    /// Minimum host star mass in solar masses
    #[arg(long, default_value_t = 0.0)]
    pub min_mass: f64,
    /// Maximum host star mass in solar masses
    #[arg(long, default_value_t = f64::MAX, hide_default_value = true)]
    pub max_mass: f64,
    /// Minimum orbital period in days
    #[arg(long)]
    pub min_period: Option<f64>,
    /// Maximum orbital period in days
    #[arg(long)]
    pub max_period: Option<f64>,
    /// Maximum number of rows to screen
    #[arg(long, default_value_t = habitability::catalog::DEFAULT_LIMIT)]
    pub limit: usize,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Build the effective config: file first, then flag overrides, then
    /// install any custom constants before a formula runs.
    pub fn load_config(&self) -> anyhow::Result<AssessmentConfig> {
        let mut cfg = match &self.config {
            Some(path) => AssessmentConfig::load(path)?,
            None => AssessmentConfig::default(),
        };
        if let Some(model) = self.zone_model {
            cfg = cfg.with_zone_model(model);
        }
        if let Some(model) = self.rotation_model {
            cfg = cfg.with_rotation_model(model);
        }
        if let Some(model) = self.atmosphere_model {
            cfg = cfg.with_atmosphere_model(model);
        }
        cfg.install_constants()?;
        debug!(zone = %cfg.zone_model, rotation = %cfg.rotation_model, atmosphere = %cfg.atmosphere_model, "effective config");
        Ok(cfg)
    }
}
