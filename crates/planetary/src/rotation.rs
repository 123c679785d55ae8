//! Tidal synchronization risk
//!
//! Two unrelated models live here and are never combined:
//!
//! - The **heuristic** model maps stellar mass alone to an assumed
//!   star–planet rotation-period difference in days and calls a small
//!   difference "impossible".
//! - The **ΔP/P** model compares an assumed primordial 24 h spin period with
//!   the Keplerian orbital period. A small fractional difference means the
//!   planet is close to spin–orbit lock.
//!
//! The two models answer different questions from different inputs, and
//! their thresholds point in opposite directions.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::error::ensure_positive;
use units::{Length, Mass, QuantityError, Time, constants};

use crate::orbit::orbital_period;

// ============================================================================
// Heuristic model
// ============================================================================

/// Coefficients of the mass-only rotation heuristic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeuristicRotationConfig {
    /// Rotation difference at zero stellar mass (days)
    pub base_days: f64,
    /// Reduction of the difference per solar mass (days / M☉)
    pub days_per_solar_mass: f64,
    /// Differences at or below this are classified impossible (days)
    pub impossible_at_or_below_days: f64,
}

impl Default for HeuristicRotationConfig {
    fn default() -> Self {
        Self {
            base_days: 30.0,
            days_per_solar_mass: 5.0,
            impossible_at_or_below_days: 7.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeuristicVerdict {
    /// Rotation difference too small for survival
    Impossible,
    Possible,
}

impl fmt::Display for HeuristicVerdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HeuristicVerdict::Impossible => write!(f, "impossible"),
            HeuristicVerdict::Possible => write!(f, "possible"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationDifference {
    pub difference_days: f64,
    pub verdict: HeuristicVerdict,
}

/// Evaluate the heuristic rotation model for a star of `star_mass`.
///
/// `difference = max(base - slope * M, 0)`.
pub fn rotation_difference(
    star_mass: Mass,
    config: &HeuristicRotationConfig,
) -> Result<RotationDifference, QuantityError> {
    let m = star_mass.positive_solar_masses("stellar mass")?;
    let difference_days = (config.base_days - m * config.days_per_solar_mass).max(0.0);
    let verdict = if difference_days <= config.impossible_at_or_below_days {
        HeuristicVerdict::Impossible
    } else {
        HeuristicVerdict::Possible
    };
    debug!(m, difference_days, %verdict, "heuristic rotation difference");
    Ok(RotationDifference {
        difference_days,
        verdict,
    })
}

// ============================================================================
// ΔP/P model
// ============================================================================

/// Threshold for the ΔP/P classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncThresholds {
    /// Ratios at or above this are non-synchronous
    pub ratio_threshold: f64,
}

impl Default for SyncThresholds {
    fn default() -> Self {
        Self {
            ratio_threshold: 0.10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SyncVerdict {
    /// Spin and orbit far apart, survivable
    NonSynchronous,
    /// Spin close to the orbital period, at risk of tidal locking
    NearSynchronous,
}

impl SyncVerdict {
    pub fn classify(ratio: f64, thresholds: &SyncThresholds) -> Self {
        if ratio >= thresholds.ratio_threshold {
            SyncVerdict::NonSynchronous
        } else {
            SyncVerdict::NearSynchronous
        }
    }

    pub fn is_survivable(&self) -> bool {
        matches!(self, SyncVerdict::NonSynchronous)
    }
}

impl fmt::Display for SyncVerdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SyncVerdict::NonSynchronous => write!(f, "non-synchronous, survivable"),
            SyncVerdict::NearSynchronous => write!(f, "near-synchronous, at risk"),
        }
    }
}

/// Result of a ΔP/P evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncAssessment {
    pub rotation_period: Time,
    pub orbital_period: Time,
    pub ratio: f64,
    pub verdict: SyncVerdict,
}

/// `|rotation - orbital| / orbital` for directly supplied periods.
pub fn compute_delta_ratio(rotation_period: Time, orbital_period: Time) -> Result<f64, QuantityError> {
    let rotation = rotation_period.positive_seconds("rotation period")?;
    let orbital = orbital_period.positive_seconds("orbital period")?;
    Ok((rotation - orbital).abs() / orbital)
}

/// ΔP/P of the assumed initial spin against the Keplerian orbital period.
///
/// # Examples
/// ```
/// use planetary::rotation::delta_p_ratio;
/// use units::{Length, Mass};
///
/// let ratio = delta_p_ratio(Length::from_au(1.0), Mass::from_solar_masses(1.0)).unwrap();
/// assert!((ratio - 0.9973).abs() < 1e-4);
/// ```
pub fn delta_p_ratio(semi_major_axis: Length, star_mass: Mass) -> Result<f64, QuantityError> {
    let period = orbital_period(semi_major_axis, star_mass)?;
    compute_delta_ratio(initial_spin_period(), period)
}

/// The assumed primordial spin period from the process-wide constants.
pub fn initial_spin_period() -> Time {
    Time::from_seconds(constants().initial_spin_period_s)
}

/// Full ΔP/P evaluation from orbital radius and stellar mass.
pub fn assess_synchronization(
    semi_major_axis: Length,
    star_mass: Mass,
    thresholds: &SyncThresholds,
) -> Result<SyncAssessment, QuantityError> {
    let orbital = orbital_period(semi_major_axis, star_mass)?;
    assess_periods(initial_spin_period(), orbital, thresholds)
}

/// Full ΔP/P evaluation from periods measured directly (days, hours, ...).
pub fn assess_periods(
    rotation_period: Time,
    orbital_period: Time,
    thresholds: &SyncThresholds,
) -> Result<SyncAssessment, QuantityError> {
    ensure_positive("ratio threshold", thresholds.ratio_threshold)?;
    let ratio = compute_delta_ratio(rotation_period, orbital_period)?;
    let verdict = SyncVerdict::classify(ratio, thresholds);
    debug!(
        rotation_s = rotation_period.to_seconds(),
        orbital_s = orbital_period.to_seconds(),
        ratio,
        %verdict,
        "spin-orbit synchronization"
    );
    Ok(SyncAssessment {
        rotation_period,
        orbital_period,
        ratio,
        verdict,
    })
}
