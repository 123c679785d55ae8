//! Stellar luminosity, habitable zones and spectral reference data.

pub mod habitable_zone;
pub mod luminosity;
pub mod reference;
pub mod spectral;


pub use habitable_zone::{HabitableZone, UnknownZoneModel, ZoneModel, in_habitable_zone};
pub use luminosity::{SOLAR_ABSOLUTE_MAGNITUDE, absolute_magnitude, from_absolute_magnitude};
pub use reference::StellarReference;
pub use spectral::{SpectralClass, SpectralParseError, SpectralType};
