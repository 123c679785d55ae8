//! Declared input ranges for interactive front ends
//!
//! Forms and prompts describe each numeric field with a range, a step and a
//! default. The formulas themselves only require positivity; these ranges are
//! the narrower bounds a UI offers.

use serde::Serialize;
use units::QuantityError;
use units::error::ensure_within;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl FieldSpec {
    /// Check that `value` lies within the field's declared range.
    pub fn validate(&self, value: f64) -> Result<f64, QuantityError> {
        ensure_within(self.name, value, self.min, self.max)
    }
}

pub const ABSOLUTE_MAGNITUDE: FieldSpec = FieldSpec {
    name: "absolute magnitude",
    label: "Absolute magnitude (Mv)",
    min: -10.0,
    max: 20.0,
    step: 0.01,
    default: 4.83,
};

pub const ORBITAL_DISTANCE: FieldSpec = FieldSpec {
    name: "orbital distance",
    label: "Distance to planet (AU)",
    min: 0.001,
    max: 100.0,
    step: 0.01,
    default: 1.0,
};

pub const STELLAR_MASS: FieldSpec = FieldSpec {
    name: "stellar mass",
    label: "Stellar mass (M☉)",
    min: 0.01,
    max: 10.0,
    step: 0.01,
    default: 1.0,
};

pub const ORBITAL_RADIUS: FieldSpec = FieldSpec {
    name: "orbital radius",
    label: "Orbital radius a (AU)",
    min: 0.001,
    max: 100.0,
    step: 0.01,
    default: 1.0,
};

pub const OXYGEN_PERCENT: FieldSpec = FieldSpec {
    name: "O2 percent",
    label: "Oxygen concentration (%)",
    min: 0.0,
    max: 100.0,
    step: 0.1,
    default: 21.0,
};

pub const CO2_PERCENT: FieldSpec = FieldSpec {
    name: "CO2 percent",
    label: "Carbon dioxide concentration (%)",
    min: 0.0,
    max: 100.0,
    step: 0.01,
    default: 0.04,
};

pub const ALL: [FieldSpec; 6] = [
    ABSOLUTE_MAGNITUDE,
    ORBITAL_DISTANCE,
    STELLAR_MASS,
    ORBITAL_RADIUS,
    OXYGEN_PERCENT,
    CO2_PERCENT,
];
