//! Screening of exoplanet catalog rows
//!
//! The catalog itself is an injected data source: anything that can answer a
//! [`CatalogQuery`] with [`CatalogRecord`]s. Only a record's orbital period and
//! host-star mass are used. The semi-major axis is estimated by inverting
//! Kepler's third law and fed into the ΔP/P check.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};
use units::{Length, Mass, Time, constants};

use planetary::{SyncAssessment, assess_synchronization, semi_major_axis_from_period};

use crate::config::AssessmentConfig;
use crate::error::Result;

/// Default row cap matching typical archive query limits
pub const DEFAULT_LIMIT: usize = 1000;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
    #[error("malformed catalog data: {0}")]
    Malformed(String),
}

/// One catalog row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    pub name: String,
    /// Orbital period in days
    pub orbital_period_days: f64,
    /// Host star mass in solar masses
    pub star_mass_solar: f64,
}

/// Inclusive host-star mass window in solar masses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MassRange {
    pub min: f64,
    pub max: f64,
}

impl MassRange {
    pub fn contains(&self, mass_solar: f64) -> bool {
        (self.min..=self.max).contains(&mass_solar)
    }
}

impl Default for MassRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f64::MAX,
        }
    }
}

/// Optional inclusive bounds on orbital period in days
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodConstraints {
    pub min_days: Option<f64>,
    pub max_days: Option<f64>,
}

impl PeriodConstraints {
    pub fn contains(&self, period_days: f64) -> bool {
        self.min_days.is_none_or(|min| period_days >= min)
            && self.max_days.is_none_or(|max| period_days <= max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    pub mass_range: MassRange,
    pub period: PeriodConstraints,
    pub limit: usize,
}

impl CatalogQuery {
    pub fn new(mass_range: MassRange, period: PeriodConstraints) -> Self {
        Self {
            mass_range,
            period,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn matches(&self, record: &CatalogRecord) -> bool {
        self.mass_range.contains(record.star_mass_solar)
            && self.period.contains(record.orbital_period_days)
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new(MassRange::default(), PeriodConstraints::default())
    }
}

/// A source of exoplanet rows (archive client, local export, fixture, ...).
pub trait ExoplanetCatalog {
    fn query(&self, query: &CatalogQuery) -> std::result::Result<Vec<CatalogRecord>, CatalogError>;
}

/// In-memory catalog answering queries with a linear filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticCatalog {
    records: Vec<CatalogRecord>,
}

impl StaticCatalog {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> std::result::Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::Malformed(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ExoplanetCatalog for StaticCatalog {
    fn query(&self, query: &CatalogQuery) -> std::result::Result<Vec<CatalogRecord>, CatalogError> {
        Ok(self
            .records
            .iter()
            .filter(|record| query.matches(record))
            .take(query.limit)
            .cloned()
            .collect())
    }
}

/// A catalog row with its derived orbit and synchronization verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenedPlanet {
    pub record: CatalogRecord,
    pub estimated_semi_major_axis: Length,
    pub synchronization: SyncAssessment,
}

/// Evaluate one record. The period used for ΔP/P is the Keplerian period of
/// the estimated orbit, not the catalog value.
pub fn screen_record(record: &CatalogRecord, config: &AssessmentConfig) -> Result<ScreenedPlanet> {
    let period = Time::from_seconds(record.orbital_period_days * constants().seconds_per_day);
    let mass = Mass::from_solar_masses(record.star_mass_solar);

    let estimated_semi_major_axis = semi_major_axis_from_period(period, mass)?;
    let synchronization = assess_synchronization(estimated_semi_major_axis, mass, &config.sync)?;

    Ok(ScreenedPlanet {
        record: record.clone(),
        estimated_semi_major_axis,
        synchronization,
    })
}

/// Query `catalog` and screen every returned row.
///
/// Rows with non-positive or non-finite period or mass are skipped with a
/// warning rather than failing the whole batch.
#[instrument(level = "debug", skip(catalog, config))]
pub fn screen_catalog<C: ExoplanetCatalog + ?Sized>(
    catalog: &C,
    query: &CatalogQuery,
    config: &AssessmentConfig,
) -> Result<Vec<ScreenedPlanet>> {
    let records = catalog.query(query)?;
    debug!(rows = records.len(), "catalog returned rows");

    let mut screened = Vec::with_capacity(records.len());
    for record in &records {
        match screen_record(record, config) {
            Ok(planet) => screened.push(planet),
            Err(err) => warn!(name = %record.name, %err, "skipping catalog row"),
        }
    }
    Ok(screened)
}
