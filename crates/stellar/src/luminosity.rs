//! Bolometric luminosity from absolute visual magnitude
//!
//! Uses the Pogson magnitude relation anchored to the Sun:
//! ```text
//! L / L☉ = 10^(0.4 × (M☉ - Mv))
//! ```
//! Bolometric corrections are ignored, so for very hot or very cool stars the
//! result underestimates the true luminosity.

use tracing::debug;
use units::QuantityError;
use units::error::{ensure_finite, ensure_positive};

/// Absolute visual magnitude of the Sun
pub const SOLAR_ABSOLUTE_MAGNITUDE: f64 = 4.83;

/// Luminosity in solar units for an absolute magnitude.
///
/// Always strictly positive for finite input.
///
/// # Examples
/// ```
/// use stellar::luminosity::from_absolute_magnitude;
///
/// assert_eq!(from_absolute_magnitude(4.83).unwrap(), 1.0);
/// // Five magnitudes brighter is a factor of 100
/// assert!((from_absolute_magnitude(-0.17).unwrap() - 100.0).abs() < 1e-9);
/// ```
pub fn from_absolute_magnitude(absolute_magnitude: f64) -> Result<f64, QuantityError> {
    let mv = ensure_finite("absolute magnitude", absolute_magnitude)?;
    let luminosity = 10f64.powf(0.4 * (SOLAR_ABSOLUTE_MAGNITUDE - mv));
    debug!(absolute_magnitude = mv, luminosity, "computed stellar luminosity");
    // Overflow past Mv ≈ -1760 or underflow past Mv ≈ +1860
    ensure_positive("luminosity", luminosity)
}

/// Absolute magnitude for a luminosity in solar units.
pub fn absolute_magnitude(luminosity: f64) -> Result<f64, QuantityError> {
    let l = ensure_positive("luminosity", luminosity)?;
    Ok(SOLAR_ABSOLUTE_MAGNITUDE - 2.5 * l.log10())
}
