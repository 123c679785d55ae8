use serde::{Deserialize, Serialize};

/// A physical temperature quantity using f64 precision.
///
/// Kelvin is the base unit. Used for the effective temperatures in the
/// stellar reference table and mean surface temperatures of reference planets.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let earth_surface = Temperature::from_celsius(15.0);
/// assert!((earth_surface.to_kelvin() - 288.15).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub const fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from a value in Celsius.
    ///
    /// Converts Celsius to Kelvin: K = °C + 273.15
    pub fn from_celsius(value: f64) -> Self {
        Self(value + 273.15)
    }

    /// Returns the temperature in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Converts the temperature to Celsius.
    pub fn to_celsius(&self) -> f64 {
        self.0 - 273.15
    }
}
