use approx::assert_relative_eq;
use planetary::SyncVerdict;

use crate::catalog::{
    CatalogError, CatalogQuery, CatalogRecord, DEFAULT_LIMIT, ExoplanetCatalog, MassRange,
    PeriodConstraints, StaticCatalog, screen_catalog, screen_record,
};
use crate::config::AssessmentConfig;
use crate::error::HabitabilityError;

fn record(name: &str, period_days: f64, mass: f64) -> CatalogRecord {
    CatalogRecord {
        name: name.to_string(),
        orbital_period_days: period_days,
        star_mass_solar: mass,
    }
}

fn sample_catalog() -> StaticCatalog {
    StaticCatalog::new(vec![
        record("Earth twin", 365.25, 1.0),
        record("Hot Jupiter", 1.05, 1.0),
        record("Proxima b", 11.186, 0.122),
        record("Heavy host", 30.0, 3.0),
        record("Bad row", -4.0, 1.0),
    ])
}

struct OfflineCatalog;

impl ExoplanetCatalog for OfflineCatalog {
    fn query(&self, _query: &CatalogQuery) -> Result<Vec<CatalogRecord>, CatalogError> {
        Err(CatalogError::Unavailable("archive offline".to_string()))
    }
}

#[test]
fn default_query_caps_at_one_thousand_rows() {
    assert_eq!(CatalogQuery::default().limit, DEFAULT_LIMIT);
    assert_eq!(DEFAULT_LIMIT, 1000);

    let many = StaticCatalog::new((0..1500).map(|i| record(&format!("p{}", i), 10.0, 1.0)).collect());
    assert_eq!(many.query(&CatalogQuery::default()).unwrap().len(), 1000);
}

#[test]
fn query_filters_by_mass_and_period() {
    let query = CatalogQuery::new(
        MassRange { min: 0.5, max: 1.5 },
        PeriodConstraints {
            min_days: Some(1.0),
            max_days: Some(400.0),
        },
    );
    let rows = sample_catalog().query(&query).unwrap();
    let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Earth twin", "Hot Jupiter"]);
}

#[test]
fn period_constraints_are_optional_and_inclusive() {
    let open = PeriodConstraints::default();
    assert!(open.contains(0.1));
    assert!(open.contains(1e6));

    let bounded = PeriodConstraints {
        min_days: Some(10.0),
        max_days: None,
    };
    assert!(bounded.contains(10.0));
    assert!(!bounded.contains(9.99));
}

#[test]
fn earth_twin_has_one_au_orbit() {
    let planet = screen_record(&record("Earth twin", 365.25, 1.0), &AssessmentConfig::default())
        .unwrap();
    assert_relative_eq!(planet.estimated_semi_major_axis.to_au(), 1.0, epsilon = 1e-5);
    assert_relative_eq!(planet.synchronization.ratio, 0.99726, epsilon = 1e-4);
    assert_eq!(planet.synchronization.verdict, SyncVerdict::NonSynchronous);
}

#[test]
fn one_day_orbit_is_near_synchronous() {
    let planet = screen_record(&record("Hot Jupiter", 1.05, 1.0), &AssessmentConfig::default())
        .unwrap();
    // The Keplerian period of the estimated orbit reproduces the catalog period
    assert_relative_eq!(planet.synchronization.orbital_period.to_days(), 1.05, max_relative = 1e-9);
    assert_relative_eq!(planet.synchronization.ratio, 0.05 / 1.05, max_relative = 1e-9);
    assert_eq!(planet.synchronization.verdict, SyncVerdict::NearSynchronous);
}

#[test]
fn screening_skips_invalid_rows() {
    let screened =
        screen_catalog(&sample_catalog(), &CatalogQuery::default(), &AssessmentConfig::default())
            .unwrap();
    assert_eq!(screened.len(), 4);
    assert!(screened.iter().all(|p| p.record.name != "Bad row"));
}

#[test]
fn screening_works_through_a_trait_object() {
    let catalog: Box<dyn ExoplanetCatalog> = Box::new(sample_catalog());
    let screened =
        screen_catalog(catalog.as_ref(), &CatalogQuery::default(), &AssessmentConfig::default())
            .unwrap();
    assert_eq!(screened.len(), 4);
}

#[test]
fn source_failures_propagate() {
    let result = screen_catalog(&OfflineCatalog, &CatalogQuery::default(), &AssessmentConfig::default());
    assert!(matches!(
        result,
        Err(HabitabilityError::Catalog(CatalogError::Unavailable(_)))
    ));
}

#[test]
fn static_catalog_parses_json_rows() {
    let catalog = StaticCatalog::from_json_str(
        r#"[
            { "name": "TRAPPIST-1 e", "orbitalPeriodDays": 6.101, "starMassSolar": 0.0898 },
            { "name": "Kepler-452 b", "orbitalPeriodDays": 384.84, "starMassSolar": 1.037 }
        ]"#,
    )
    .unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(!catalog.is_empty());

    assert!(matches!(
        StaticCatalog::from_json_str("{ not json"),
        Err(CatalogError::Malformed(_))
    ));
}
