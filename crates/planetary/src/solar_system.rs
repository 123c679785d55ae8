//! Solar System planets as reference inputs
//!
//! Rounded NASA fact-sheet values. Rotation periods are sidereal and stored
//! as magnitudes; Venus and Uranus rotate retrograde.

use serde::Serialize;
use units::{Length, Mass, Temperature, Time};

use crate::atmosphere::AtmosphereComposition;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceBody {
    pub name: &'static str,
    pub mass: Mass,
    /// Mean surface (or 1 bar level) temperature
    pub mean_temperature: Temperature,
    pub rotation_period: Time,
    pub retrograde: bool,
    pub orbital_period: Time,
    pub semi_major_axis: Length,
    pub atmosphere: AtmosphereComposition,
}

impl ReferenceBody {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        name: &'static str,
        mass_earth: f64,
        mean_temperature_k: f64,
        rotation_hours: f64,
        retrograde: bool,
        orbital_days: f64,
        semi_major_axis_au: f64,
        oxygen_percent: f64,
        co2_percent: f64,
    ) -> Self {
        Self {
            name,
            mass: Mass::from_earth_masses(mass_earth),
            mean_temperature: Temperature::from_kelvin(mean_temperature_k),
            rotation_period: Time::from_hours(rotation_hours),
            retrograde,
            orbital_period: Time::from_days(orbital_days),
            semi_major_axis: Length::from_au(semi_major_axis_au),
            atmosphere: AtmosphereComposition {
                oxygen_percent,
                co2_percent,
            },
        }
    }
}

pub static PLANETS: [ReferenceBody; 8] = [
    ReferenceBody::new("Mercury", 0.0553, 440.0, 1407.6, false, 87.969, 0.387, 0.0, 0.0),
    ReferenceBody::new("Venus", 0.815, 737.0, 5832.5, true, 224.701, 0.723, 0.0, 96.5),
    ReferenceBody::new("Earth", 1.0, 288.0, 23.9345, false, 365.256, 1.0, 21.0, 0.04),
    ReferenceBody::new("Mars", 0.107, 210.0, 24.6229, false, 686.980, 1.524, 0.174, 95.32),
    ReferenceBody::new("Jupiter", 317.8, 165.0, 9.925, false, 4332.59, 5.203, 0.0, 0.0),
    ReferenceBody::new("Saturn", 95.2, 134.0, 10.656, false, 10_759.22, 9.537, 0.0, 0.0),
    ReferenceBody::new("Uranus", 14.5, 76.0, 17.24, true, 30_685.4, 19.19, 0.0, 0.0),
    ReferenceBody::new("Neptune", 17.1, 72.0, 16.11, false, 60_189.0, 30.07, 0.0, 0.0),
];

/// Case-insensitive lookup by planet name.
pub fn lookup(name: &str) -> Option<&'static ReferenceBody> {
    let name = name.trim();
    PLANETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
