//! Consolidated exoplanet habitability checks
//!
//! Ties the stellar and planetary formulas together behind one configuration:
//! model presets and thresholds live in [`AssessmentConfig`], a full
//! evaluation is [`assess`], and catalog rows are screened through the
//! [`ExoplanetCatalog`] seam.

pub mod assessment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fields;

pub use assessment::{
    Assessment, AssessmentInput, AtmosphereAssessment, RotationAssessment, StarAssessment, assess,
    assess_atmosphere, assess_rotation, assess_star,
};
pub use catalog::{
    CatalogError, CatalogQuery, CatalogRecord, ExoplanetCatalog, MassRange, PeriodConstraints,
    ScreenedPlanet, StaticCatalog, screen_catalog, screen_record,
};
pub use config::{AssessmentConfig, AtmosphereModel, RotationModel};
pub use error::{HabitabilityError, Result};
pub use fields::FieldSpec;

#[cfg(test)]
mod catalog_test;
#[cfg(test)]
mod fields_test;
