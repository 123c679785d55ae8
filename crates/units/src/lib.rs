pub mod constants;
pub mod error;
pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;

#[cfg(test)]
mod constants_test;

pub use constants::{PhysicalConstants, constants};
pub use error::QuantityError;
pub use length::Length;
pub use mass::{EARTH_MASS_KG, Mass};
pub use temperature::Temperature;
pub use time::{SECONDS_PER_YEAR, Time};
