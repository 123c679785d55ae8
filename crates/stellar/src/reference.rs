//! Representative main-sequence stars by spectral class
//!
//! Read-only lookup tables used as convenient inputs for luminosity and
//! habitable-zone calculations. Values are rounded textbook figures for
//! luminosity class V.

use serde::Serialize;
use units::{Mass, QuantityError, Temperature};

use crate::habitable_zone::{HabitableZone, ZoneModel};
use crate::spectral::{SpectralClass, SpectralParseError, SpectralType};

/// Reference properties of a main-sequence star
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarReference {
    pub class: SpectralClass,
    pub mass: Mass,
    pub temperature: Temperature,
    /// Luminosity in solar units
    pub luminosity: f64,
}

impl StellarReference {
    const fn new(
        spectral_type: SpectralType,
        subclass: Option<u8>,
        mass: f64,
        temperature: f64,
        luminosity: f64,
    ) -> Self {
        Self {
            class: SpectralClass::new(spectral_type, subclass),
            mass: Mass::from_solar_masses(mass),
            temperature: Temperature::from_kelvin(temperature),
            luminosity,
        }
    }

    /// Habitable zone around this reference star.
    pub fn habitable_zone(&self, model: ZoneModel) -> Result<HabitableZone, QuantityError> {
        HabitableZone::from_luminosity(self.luminosity, model)
    }
}

/// Named subclasses spanning the main sequence
pub static SUBCLASSES: [StellarReference; 7] = [
    StellarReference::new(SpectralType::O, Some(5), 40.0, 41_000.0, 500_000.0),
    StellarReference::new(SpectralType::B, Some(0), 16.0, 31_000.0, 20_000.0),
    StellarReference::new(SpectralType::A, Some(0), 2.9, 9_700.0, 54.0),
    StellarReference::new(SpectralType::F, Some(0), 1.6, 7_300.0, 6.5),
    StellarReference::new(SpectralType::G, Some(2), 1.0, 5_778.0, 1.0),
    StellarReference::new(SpectralType::K, Some(5), 0.69, 4_400.0, 0.16),
    StellarReference::new(SpectralType::M, Some(5), 0.16, 3_100.0, 0.0027),
];

/// Typical values for each letter class as a whole
pub static LETTER_CLASSES: [StellarReference; 7] = [
    StellarReference::new(SpectralType::O, None, 30.0, 35_000.0, 100_000.0),
    StellarReference::new(SpectralType::B, None, 6.5, 20_000.0, 800.0),
    StellarReference::new(SpectralType::A, None, 2.1, 8_750.0, 20.0),
    StellarReference::new(SpectralType::F, None, 1.4, 6_750.0, 2.5),
    StellarReference::new(SpectralType::G, None, 1.0, 5_750.0, 1.0),
    StellarReference::new(SpectralType::K, None, 0.7, 4_450.0, 0.3),
    StellarReference::new(SpectralType::M, None, 0.3, 3_050.0, 0.04),
];

/// Iterator over every reference entry, subclasses first.
pub fn all() -> impl Iterator<Item = &'static StellarReference> {
    SUBCLASSES.iter().chain(LETTER_CLASSES.iter())
}

/// Look up a reference star by designation such as `"G2"` or `"k"`.
///
/// Returns `Ok(None)` for a well-formed class that has no table entry (e.g. `G7`).
pub fn lookup(designation: &str) -> Result<Option<&'static StellarReference>, SpectralParseError> {
    let class: SpectralClass = designation.parse()?;
    Ok(all().find(|entry| entry.class == class))
}
