//! Kepler's third law for a planet of negligible mass
//!
//! ```text
//! P = 2π √(a³ / (G M))
//! ```
//! Semi-major axis in AU and stellar mass in M☉ are converted to SI with the
//! process-wide [`units::constants`], so periods come out in seconds.

use std::f64::consts::PI;

use tracing::debug;
use units::error::ensure_positive;
use units::{Length, Mass, QuantityError, Time, constants};

/// Orbital period of a body at `semi_major_axis` around a star of `star_mass`.
///
/// # Examples
/// ```
/// use planetary::orbit::orbital_period;
/// use units::{Length, Mass};
///
/// let year = orbital_period(Length::from_au(1.0), Mass::from_solar_masses(1.0)).unwrap();
/// assert!((year.to_days() - 365.25).abs() < 0.1);
/// ```
pub fn orbital_period(semi_major_axis: Length, star_mass: Mass) -> Result<Time, QuantityError> {
    let a_au = semi_major_axis.positive_au("orbital radius")?;
    let m_solar = star_mass.positive_solar_masses("stellar mass")?;
    let c = constants();

    let a_m = a_au * c.au_m;
    let seconds = 2.0 * PI * (a_m.powf(3.0) / c.gravitational_parameter(m_solar)).sqrt();
    let seconds = ensure_positive("orbital period", seconds)?;
    debug!(a_au, m_solar, seconds, "computed orbital period");
    Ok(Time::from_seconds(seconds))
}

/// Semi-major axis implied by an observed orbital period (inverse of [`orbital_period`]).
///
/// ```text
/// a = (G M (P / 2π)²)^(1/3)
/// ```
pub fn semi_major_axis_from_period(period: Time, star_mass: Mass) -> Result<Length, QuantityError> {
    let seconds = period.positive_seconds("orbital period")?;
    let m_solar = star_mass.positive_solar_masses("stellar mass")?;
    let c = constants();

    let angular = seconds / (2.0 * PI);
    let a_m = (c.gravitational_constant * (m_solar * c.solar_mass_kg) * angular.powf(2.0))
        .powf(1.0 / 3.0);
    let a_au = ensure_positive("semi-major axis", a_m / c.au_m)?;
    debug!(seconds, m_solar, a_au, "estimated semi-major axis");
    Ok(Length::from_au(a_au))
}
