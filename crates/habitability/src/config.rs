//! Assessment configuration
//!
//! Every coefficient and threshold the formulas use is collected here so a
//! caller selects model variants by name instead of by code path. All fields
//! default to the reference values, so a JSON file only needs the keys it
//! overrides:
//!
//! ```json
//! {
//!   "zoneModel": "simple",
//!   "rotationModel": "heuristic",
//!   "hazard": { "survivableBelow": 0.2 }
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use planetary::{CategoricalThresholds, HazardThresholds, HeuristicRotationConfig, SyncThresholds};
use serde::{Deserialize, Serialize};
use stellar::ZoneModel;
use tracing::{debug, info};
use units::PhysicalConstants;

use crate::error::{HabitabilityError, Result};

/// Which synchronization model drives the rotation verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RotationModel {
    /// Rotation difference from stellar mass alone
    Heuristic,
    /// ΔP/P against the Keplerian orbital period
    #[default]
    Kepler,
}

impl RotationModel {
    pub fn name(&self) -> &'static str {
        match self {
            RotationModel::Heuristic => "heuristic",
            RotationModel::Kepler => "kepler",
        }
    }
}

impl fmt::Display for RotationModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RotationModel {
    type Err = HabitabilityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(RotationModel::Heuristic),
            "kepler" | "delta-p" | "physical" => Ok(RotationModel::Kepler),
            _ => Err(HabitabilityError::UnknownPreset {
                kind: "rotation model",
                name: s.to_string(),
            }),
        }
    }
}

/// Which atmospheric model drives the atmosphere verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AtmosphereModel {
    Categorical,
    #[default]
    HazardIndex,
}

impl AtmosphereModel {
    pub fn name(&self) -> &'static str {
        match self {
            AtmosphereModel::Categorical => "categorical",
            AtmosphereModel::HazardIndex => "hazard-index",
        }
    }
}

impl fmt::Display for AtmosphereModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AtmosphereModel {
    type Err = HabitabilityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "categorical" => Ok(AtmosphereModel::Categorical),
            "hazard-index" | "hazardindex" | "hazard" => Ok(AtmosphereModel::HazardIndex),
            _ => Err(HabitabilityError::UnknownPreset {
                kind: "atmosphere model",
                name: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentConfig {
    pub zone_model: ZoneModel,
    pub rotation_model: RotationModel,
    pub atmosphere_model: AtmosphereModel,
    pub heuristic_rotation: HeuristicRotationConfig,
    pub sync: SyncThresholds,
    pub categorical: CategoricalThresholds,
    pub hazard: HazardThresholds,
    /// Replacement physical constants, installed process-wide at startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constants: Option<PhysicalConstants>,
}

impl AssessmentConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| HabitabilityError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        debug!(path = %path.display(), ?config, "loaded assessment config");
        Ok(config)
    }

    /// Install the configured constants, if any, as the process-wide table.
    ///
    /// Must run before any formula is evaluated.
    pub fn install_constants(&self) -> Result<()> {
        match self.constants {
            Some(constants) => {
                units::constants::install(constants)
                    .map_err(|_| HabitabilityError::ConstantsAlreadySet)?;
                info!(?constants, "installed custom physical constants");
                Ok(())
            }
            None => Ok(()),
        }
    }

    pub fn with_zone_model(mut self, model: ZoneModel) -> Self {
        self.zone_model = model;
        self
    }

    pub fn with_rotation_model(mut self, model: RotationModel) -> Self {
        self.rotation_model = model;
        self
    }

    pub fn with_atmosphere_model(mut self, model: AtmosphereModel) -> Self {
        self.atmosphere_model = model;
        self
    }
}
