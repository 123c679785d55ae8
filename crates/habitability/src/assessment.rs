//! Combined habitability check
//!
//! Runs the three independent checks (habitable zone, spin–orbit
//! synchronization, atmosphere) with the models selected in an
//! [`AssessmentConfig`]. Each sub-result keeps the model that produced it so
//! results from different variants are never confused.

use planetary::{
    AtmosphereCategory, AtmosphereComposition, HazardIndex, HazardVerdict, HeuristicVerdict,
    RotationDifference, SyncAssessment, categorize, hazard_index, rotation_difference,
};
use serde::{Deserialize, Serialize};
use stellar::HabitableZone;
use tracing::{debug, instrument};
use units::{Length, Mass};

use crate::config::{AssessmentConfig, AtmosphereModel, RotationModel};
use crate::error::Result;

/// Raw inputs of a single evaluation, as collected from a prompt or form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    pub absolute_magnitude: f64,
    /// Planet's distance from the star; also the orbital radius for ΔP/P
    pub orbital_distance: Length,
    pub star_mass: Mass,
    pub atmosphere: AtmosphereComposition,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarAssessment {
    pub luminosity: f64,
    pub habitable_zone: HabitableZone,
    pub in_habitable_zone: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "model")]
pub enum RotationAssessment {
    Heuristic(RotationDifference),
    Kepler(SyncAssessment),
}

impl RotationAssessment {
    pub fn is_favorable(&self) -> bool {
        match self {
            RotationAssessment::Heuristic(r) => r.verdict == HeuristicVerdict::Possible,
            RotationAssessment::Kepler(s) => s.verdict.is_survivable(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "model")]
pub enum AtmosphereAssessment {
    Categorical { category: AtmosphereCategory },
    HazardIndex(HazardIndex),
}

impl AtmosphereAssessment {
    pub fn is_favorable(&self) -> bool {
        match self {
            AtmosphereAssessment::Categorical { category } => {
                *category == AtmosphereCategory::Normal
            }
            AtmosphereAssessment::HazardIndex(h) => h.verdict == HazardVerdict::Survivable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub star: StarAssessment,
    pub rotation: RotationAssessment,
    pub atmosphere: AtmosphereAssessment,
}

impl Assessment {
    /// True when every check came out favorable.
    pub fn is_habitable(&self) -> bool {
        self.star.in_habitable_zone && self.rotation.is_favorable() && self.atmosphere.is_favorable()
    }
}

/// Luminosity, habitable zone and zone membership for a star and distance.
pub fn assess_star(
    absolute_magnitude: f64,
    orbital_distance: Length,
    config: &AssessmentConfig,
) -> Result<StarAssessment> {
    orbital_distance.positive_au("orbital distance")?;
    let luminosity = stellar::from_absolute_magnitude(absolute_magnitude)?;
    let habitable_zone = HabitableZone::from_luminosity(luminosity, config.zone_model)?;
    Ok(StarAssessment {
        luminosity,
        habitable_zone,
        in_habitable_zone: habitable_zone.contains(orbital_distance),
    })
}

/// Rotation check with the configured model. The heuristic model ignores
/// the orbital radius.
pub fn assess_rotation(
    star_mass: Mass,
    orbital_radius: Length,
    config: &AssessmentConfig,
) -> Result<RotationAssessment> {
    let assessment = match config.rotation_model {
        RotationModel::Heuristic => RotationAssessment::Heuristic(rotation_difference(
            star_mass,
            &config.heuristic_rotation,
        )?),
        RotationModel::Kepler => RotationAssessment::Kepler(planetary::assess_synchronization(
            orbital_radius,
            star_mass,
            &config.sync,
        )?),
    };
    Ok(assessment)
}

/// Atmosphere check with the configured model.
pub fn assess_atmosphere(
    composition: &AtmosphereComposition,
    config: &AssessmentConfig,
) -> Result<AtmosphereAssessment> {
    let assessment = match config.atmosphere_model {
        AtmosphereModel::Categorical => AtmosphereAssessment::Categorical {
            category: categorize(composition, &config.categorical)?,
        },
        AtmosphereModel::HazardIndex => {
            AtmosphereAssessment::HazardIndex(hazard_index(composition, &config.hazard)?)
        }
    };
    Ok(assessment)
}

/// Run every check for one set of inputs.
#[instrument(level = "debug", skip(config), fields(zone = %config.zone_model, rotation = %config.rotation_model, atmosphere = %config.atmosphere_model))]
pub fn assess(input: &AssessmentInput, config: &AssessmentConfig) -> Result<Assessment> {
    let star = assess_star(input.absolute_magnitude, input.orbital_distance, config)?;
    let rotation = assess_rotation(input.star_mass, input.orbital_distance, config)?;
    let atmosphere = assess_atmosphere(&input.atmosphere, config)?;

    let assessment = Assessment {
        star,
        rotation,
        atmosphere,
    };
    debug!(habitable = assessment.is_habitable(), "assessment complete");
    Ok(assessment)
}
