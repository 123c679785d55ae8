//! Process-wide physical constants
//!
//! Every formula in the workspace reads its physical constants from a single
//! immutable table. The table is either installed once at startup with
//! [`install`] or lazily initialized to [`PhysicalConstants::SI`] on first read.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Newtonian gravitational constant in m³ kg⁻¹ s⁻² (CODATA 2018)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Solar mass in kilograms
pub const SOLAR_MASS_KG: f64 = 1.98847e30;

/// Astronomical unit in meters (IAU 2012, exact)
pub const AU_M: f64 = 1.495978707e11;

/// Seconds in one day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Assumed primordial spin period of a planet, 24 hours in seconds
pub const INITIAL_SPIN_PERIOD_S: f64 = 24.0 * 3_600.0;

static CONSTANTS: OnceLock<PhysicalConstants> = OnceLock::new();

/// Table of the physical constants shared by the orbital and rotational formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicalConstants {
    /// G in m³ kg⁻¹ s⁻²
    pub gravitational_constant: f64,
    /// M☉ in kg
    pub solar_mass_kg: f64,
    /// 1 AU in m
    pub au_m: f64,
    /// Length of a day in seconds
    pub seconds_per_day: f64,
    /// Spin period assumed before tidal evolution, in seconds
    pub initial_spin_period_s: f64,
}

impl PhysicalConstants {
    /// Reference SI values.
    pub const SI: Self = Self {
        gravitational_constant: GRAVITATIONAL_CONSTANT,
        solar_mass_kg: SOLAR_MASS_KG,
        au_m: AU_M,
        seconds_per_day: SECONDS_PER_DAY,
        initial_spin_period_s: INITIAL_SPIN_PERIOD_S,
    };

    /// Standard gravitational parameter G·M for a mass given in solar masses.
    ///
    /// Evaluated left to right as `G * M * M☉` so results match the
    /// reference formulas to the last bit.
    pub fn gravitational_parameter(&self, solar_masses: f64) -> f64 {
        self.gravitational_constant * solar_masses * self.solar_mass_kg
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::SI
    }
}

/// Returns the process-wide constants, initializing them to SI values if
/// nothing was installed.
pub fn constants() -> &'static PhysicalConstants {
    CONSTANTS.get_or_init(PhysicalConstants::default)
}

/// Installs the process-wide constants.
///
/// Succeeds only before the first call to [`constants`] and only once. On
/// failure the rejected table is handed back.
pub fn install(constants: PhysicalConstants) -> Result<(), PhysicalConstants> {
    CONSTANTS.set(constants)
}
