//! Orbital, rotational and atmospheric habitability formulas
//!
//! This crate evaluates the planet side of a habitability check: Keplerian
//! orbital periods, spin–orbit synchronization risk and atmospheric
//! survivability, plus Solar System reference bodies to feed them.

pub mod atmosphere;
pub mod orbit;
pub mod rotation;
pub mod solar_system;

pub use atmosphere::{
    AtmosphereCategory, AtmosphereComposition, CategoricalThresholds, HazardIndex,
    HazardThresholds, HazardVerdict, categorize, hazard_index,
};
pub use orbit::{orbital_period, semi_major_axis_from_period};
pub use rotation::{
    HeuristicRotationConfig, HeuristicVerdict, RotationDifference, SyncAssessment,
    SyncThresholds, SyncVerdict, assess_periods, assess_synchronization, compute_delta_ratio,
    delta_p_ratio, rotation_difference,
};
pub use solar_system::ReferenceBody;

#[cfg(test)]
mod atmosphere_test;
#[cfg(test)]
mod rotation_test;
