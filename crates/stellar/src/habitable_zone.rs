//! Circumstellar habitable zone boundaries
//!
//! All supported models place both edges proportional to √L, so a zone around
//! a star 100× brighter than the Sun is 10× wider and 10× farther out. The
//! models differ only in the proportionality coefficients.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use units::error::ensure_positive;
use units::{Length, QuantityError};

/// Habitable zone boundary preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZoneModel {
    /// Inner edge 0.95·√L, outer edge 1.37·√L (AU)
    #[default]
    Conservative,
    /// Inner edge √L, outer edge √(4L) = 2·√L (AU)
    Simple,
    /// Effective-flux edges: √(L/1.1) and √(L/0.36) (AU)
    Flux,
}

impl ZoneModel {
    pub const ALL: [ZoneModel; 3] = [ZoneModel::Conservative, ZoneModel::Simple, ZoneModel::Flux];

    /// Preset name as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            ZoneModel::Conservative => "conservative",
            ZoneModel::Simple => "simple",
            ZoneModel::Flux => "flux",
        }
    }

    /// Inner and outer edges in AU for a luminosity already known to be positive.
    fn edges_au(&self, luminosity: f64) -> (f64, f64) {
        match self {
            ZoneModel::Conservative => {
                let root = luminosity.sqrt();
                (0.95 * root, 1.37 * root)
            }
            ZoneModel::Simple => {
                let root = luminosity.sqrt();
                (root, 2.0 * root)
            }
            ZoneModel::Flux => ((luminosity / 1.1).sqrt(), (luminosity / 0.36).sqrt()),
        }
    }
}

impl fmt::Display for ZoneModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown habitable zone model `{0}` (expected conservative, simple or flux)")]
pub struct UnknownZoneModel(pub String);

impl FromStr for ZoneModel {
    type Err = UnknownZoneModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" | "a" => Ok(ZoneModel::Conservative),
            "simple" | "b" => Ok(ZoneModel::Simple),
            "flux" => Ok(ZoneModel::Flux),
            _ => Err(UnknownZoneModel(s.to_string())),
        }
    }
}

/// Habitable zone boundaries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitableZone {
    pub inner_edge: Length,
    pub outer_edge: Length,
    pub model: ZoneModel,
}

impl HabitableZone {
    /// Zone boundaries for a star of the given luminosity (L☉).
    ///
    /// # Examples
    /// ```
    /// use stellar::{HabitableZone, ZoneModel};
    ///
    /// let hz = HabitableZone::from_luminosity(1.0, ZoneModel::Simple).unwrap();
    /// assert_eq!(hz.inner_edge.to_au(), 1.0);
    /// assert_eq!(hz.outer_edge.to_au(), 2.0);
    /// ```
    pub fn from_luminosity(luminosity: f64, model: ZoneModel) -> Result<Self, QuantityError> {
        let luminosity = ensure_positive("luminosity", luminosity)?;
        let (inner, outer) = model.edges_au(luminosity);
        debug!(luminosity, %model, inner, outer, "computed habitable zone");
        Ok(Self {
            inner_edge: Length::from_au(inner),
            outer_edge: Length::from_au(outer),
            model,
        })
    }

    /// Whether a planet at `distance` lies inside the zone, edges included.
    pub fn contains(&self, distance: Length) -> bool {
        in_habitable_zone(distance, self.inner_edge, self.outer_edge)
    }

    pub fn width(&self) -> Length {
        self.outer_edge - self.inner_edge
    }

    /// Midpoint between the two edges
    pub fn center(&self) -> Length {
        (self.inner_edge + self.outer_edge) / 2.0
    }
}

/// True iff `inner <= distance <= outer`.
pub fn in_habitable_zone(distance: Length, inner: Length, outer: Length) -> bool {
    inner <= distance && distance <= outer
}
