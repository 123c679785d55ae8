//! Atmospheric survivability from O₂ and CO₂ concentration
//!
//! Two models are provided:
//! - a categorical model with nested thresholds that yields one of three labels
//! - a continuous hazard index summing normalized deviations of O₂ and CO₂
//!   from their safe bands
//!
//! Concentrations are volume percentages of the whole atmosphere.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::QuantityError;
use units::error::ensure_within;

/// Volume fractions of the two gases that matter for respiration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmosphereComposition {
    pub oxygen_percent: f64,
    pub co2_percent: f64,
}

impl AtmosphereComposition {
    /// Validated composition, each percentage in `0..=100`.
    pub fn new(oxygen_percent: f64, co2_percent: f64) -> Result<Self, QuantityError> {
        Ok(Self {
            oxygen_percent: ensure_within("O2 percent", oxygen_percent, 0.0, 100.0)?,
            co2_percent: ensure_within("CO2 percent", co2_percent, 0.0, 100.0)?,
        })
    }

    /// Present-day Earth: 21 % O₂, 0.04 % CO₂
    pub fn earth() -> Self {
        Self {
            oxygen_percent: 21.0,
            co2_percent: 0.04,
        }
    }

    fn validated(&self) -> Result<Self, QuantityError> {
        Self::new(self.oxygen_percent, self.co2_percent)
    }
}

// ============================================================================
// Categorical model
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoricalThresholds {
    pub oxygen_min_percent: f64,
    pub oxygen_max_percent: f64,
    /// CO₂ at or above this is lethal
    pub co2_lethal_percent: f64,
    /// CO₂ at or above this (and below lethal) makes survival very unlikely
    pub co2_hazard_percent: f64,
}

impl Default for CategoricalThresholds {
    fn default() -> Self {
        Self {
            oxygen_min_percent: 15.0,
            oxygen_max_percent: 60.0,
            co2_lethal_percent: 5.0,
            co2_hazard_percent: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AtmosphereCategory {
    Impossible,
    VeryLowSurvival,
    Normal,
}

impl fmt::Display for AtmosphereCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AtmosphereCategory::Impossible => write!(f, "impossible"),
            AtmosphereCategory::VeryLowSurvival => write!(f, "very low survival likelihood"),
            AtmosphereCategory::Normal => write!(f, "normal"),
        }
    }
}

/// Classify an atmosphere with the nested-threshold model.
///
/// # Examples
/// ```
/// use planetary::atmosphere::{
///     AtmosphereCategory, AtmosphereComposition, CategoricalThresholds, categorize,
/// };
///
/// let earth = AtmosphereComposition::earth();
/// let category = categorize(&earth, &CategoricalThresholds::default()).unwrap();
/// assert_eq!(category, AtmosphereCategory::Normal);
/// ```
pub fn categorize(
    composition: &AtmosphereComposition,
    thresholds: &CategoricalThresholds,
) -> Result<AtmosphereCategory, QuantityError> {
    let AtmosphereComposition {
        oxygen_percent: o2,
        co2_percent: co2,
    } = composition.validated()?;

    let category = if o2 < thresholds.oxygen_min_percent || o2 > thresholds.oxygen_max_percent {
        AtmosphereCategory::Impossible
    } else if co2 >= thresholds.co2_lethal_percent {
        AtmosphereCategory::Impossible
    } else if co2 >= thresholds.co2_hazard_percent {
        AtmosphereCategory::VeryLowSurvival
    } else {
        AtmosphereCategory::Normal
    };
    debug!(o2, co2, %category, "categorical atmosphere model");
    Ok(category)
}

// ============================================================================
// Hazard index model
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HazardThresholds {
    /// Lower edge of the O₂ band that carries no risk
    pub oxygen_safe_min_percent: f64,
    /// Upper edge of the O₂ band that carries no risk
    pub oxygen_safe_max_percent: f64,
    /// O₂ level deviations are normalized against
    pub oxygen_reference_percent: f64,
    /// CO₂ up to this level carries no risk; also the normalization scale
    pub co2_safe_max_percent: f64,
    /// Indices strictly below this are survivable
    pub survivable_below: f64,
}

impl Default for HazardThresholds {
    fn default() -> Self {
        Self {
            oxygen_safe_min_percent: 19.5,
            oxygen_safe_max_percent: 23.5,
            oxygen_reference_percent: 21.0,
            co2_safe_max_percent: 0.5,
            survivable_below: 0.10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HazardVerdict {
    Survivable,
    NotSurvivable,
}

impl fmt::Display for HazardVerdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HazardVerdict::Survivable => write!(f, "survivable"),
            HazardVerdict::NotSurvivable => write!(f, "not survivable"),
        }
    }
}

/// Hazard index H with its per-gas contributions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardIndex {
    pub oxygen_risk: f64,
    pub co2_risk: f64,
    pub total: f64,
    pub verdict: HazardVerdict,
}

/// Normalized O₂ deviation; zero inside the safe band.
pub fn oxygen_risk(oxygen_percent: f64, thresholds: &HazardThresholds) -> f64 {
    if (thresholds.oxygen_safe_min_percent..=thresholds.oxygen_safe_max_percent)
        .contains(&oxygen_percent)
    {
        0.0
    } else {
        (oxygen_percent - thresholds.oxygen_reference_percent).abs()
            / thresholds.oxygen_reference_percent
    }
}

/// Normalized CO₂ excess; zero at or below the safe maximum.
pub fn co2_risk(co2_percent: f64, thresholds: &HazardThresholds) -> f64 {
    if co2_percent <= thresholds.co2_safe_max_percent {
        0.0
    } else {
        (co2_percent - thresholds.co2_safe_max_percent) / thresholds.co2_safe_max_percent
    }
}

/// Compute H = O₂ risk + CO₂ risk and classify it.
///
/// # Examples
/// ```
/// use planetary::atmosphere::{AtmosphereComposition, HazardThresholds, HazardVerdict, hazard_index};
///
/// // Venus-like: no oxygen, 96.5 % CO₂
/// let venus = AtmosphereComposition::new(0.0, 96.5).unwrap();
/// let h = hazard_index(&venus, &HazardThresholds::default()).unwrap();
/// assert_eq!(h.total, 193.0);
/// assert_eq!(h.verdict, HazardVerdict::NotSurvivable);
/// ```
pub fn hazard_index(
    composition: &AtmosphereComposition,
    thresholds: &HazardThresholds,
) -> Result<HazardIndex, QuantityError> {
    let composition = composition.validated()?;
    units::error::ensure_positive("O2 reference percent", thresholds.oxygen_reference_percent)?;
    units::error::ensure_positive("CO2 safe maximum percent", thresholds.co2_safe_max_percent)?;

    let oxygen_risk = oxygen_risk(composition.oxygen_percent, thresholds);
    let co2_risk = co2_risk(composition.co2_percent, thresholds);
    let total = oxygen_risk + co2_risk;
    let verdict = if total < thresholds.survivable_below {
        HazardVerdict::Survivable
    } else {
        HazardVerdict::NotSurvivable
    };
    debug!(oxygen_risk, co2_risk, total, %verdict, "atmospheric hazard index");

    Ok(HazardIndex {
        oxygen_risk,
        co2_risk,
        total,
        verdict,
    })
}
