//! Tests for atmospheric survivability models

use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use units::QuantityError;

use crate::atmosphere::{
    AtmosphereCategory, AtmosphereComposition, CategoricalThresholds, HazardThresholds,
    HazardVerdict, categorize, co2_risk, hazard_index, oxygen_risk,
};

fn composition(o2: f64, co2: f64) -> AtmosphereComposition {
    AtmosphereComposition::new(o2, co2).unwrap()
}

// ========== Categorical model ==========

#[test]
fn earth_is_normal() {
    let category = categorize(&composition(21.0, 0.04), &CategoricalThresholds::default()).unwrap();
    assert_eq!(category, AtmosphereCategory::Normal);
    assert_eq!(category.to_string(), "normal");
}

#[test]
fn oxygen_outside_band_is_impossible() {
    let thresholds = CategoricalThresholds::default();
    assert_eq!(
        categorize(&composition(14.9, 0.04), &thresholds).unwrap(),
        AtmosphereCategory::Impossible
    );
    assert_eq!(
        categorize(&composition(60.1, 0.04), &thresholds).unwrap(),
        AtmosphereCategory::Impossible
    );
    // Band edges are allowed
    assert_eq!(
        categorize(&composition(15.0, 0.04), &thresholds).unwrap(),
        AtmosphereCategory::Normal
    );
    assert_eq!(
        categorize(&composition(60.0, 0.04), &thresholds).unwrap(),
        AtmosphereCategory::Normal
    );
}

#[test]
fn co2_levels() {
    let thresholds = CategoricalThresholds::default();
    assert_eq!(
        categorize(&composition(21.0, 5.0), &thresholds).unwrap(),
        AtmosphereCategory::Impossible
    );
    assert_eq!(
        categorize(&composition(21.0, 4.99), &thresholds).unwrap(),
        AtmosphereCategory::VeryLowSurvival
    );
    assert_eq!(
        categorize(&composition(21.0, 0.5), &thresholds).unwrap(),
        AtmosphereCategory::VeryLowSurvival
    );
    assert_eq!(
        categorize(&composition(21.0, 0.49), &thresholds).unwrap(),
        AtmosphereCategory::Normal
    );
}

#[test]
fn venus_is_impossible_in_both_models() {
    let venus = composition(0.0, 96.5);
    assert_eq!(
        categorize(&venus, &CategoricalThresholds::default()).unwrap(),
        AtmosphereCategory::Impossible
    );
    assert_eq!(
        hazard_index(&venus, &HazardThresholds::default()).unwrap().verdict,
        HazardVerdict::NotSurvivable
    );
}

// ========== Hazard index model ==========

#[test]
fn earth_hazard_index_is_zero() {
    let h = hazard_index(&AtmosphereComposition::earth(), &HazardThresholds::default()).unwrap();
    assert_eq!(h.oxygen_risk, 0.0);
    assert_eq!(h.co2_risk, 0.0);
    assert_eq!(h.total, 0.0);
    assert_eq!(h.verdict, HazardVerdict::Survivable);
}

#[test]
fn venus_hazard_index() {
    let h = hazard_index(&composition(0.0, 96.5), &HazardThresholds::default()).unwrap();
    assert_eq!(h.oxygen_risk, 1.0);
    assert_eq!(h.co2_risk, 192.0);
    assert_eq!(h.total, 193.0);
}

#[test]
fn oxygen_band_edges_carry_no_risk() {
    let thresholds = HazardThresholds::default();
    assert_eq!(oxygen_risk(19.5, &thresholds), 0.0);
    assert_eq!(oxygen_risk(23.5, &thresholds), 0.0);
    assert_relative_eq!(oxygen_risk(19.4, &thresholds), 1.6 / 21.0, epsilon = 1e-12);
    assert_relative_eq!(oxygen_risk(30.0, &thresholds), 9.0 / 21.0, epsilon = 1e-12);
}

#[test]
fn co2_risk_grows_linearly() {
    let thresholds = HazardThresholds::default();
    assert_eq!(co2_risk(0.5, &thresholds), 0.0);
    assert_relative_eq!(co2_risk(1.0, &thresholds), 1.0);
    assert_relative_eq!(co2_risk(2.5, &thresholds), 4.0);
}

#[test]
fn hazard_boundary_at_one_tenth() {
    let thresholds = HazardThresholds::default();
    // CO₂ 0.55 % gives co2_risk 0.1 (not survivable), 0.54 % gives 0.08
    let at = hazard_index(&composition(21.0, 0.55), &thresholds).unwrap();
    assert_relative_eq!(at.total, 0.1, epsilon = 1e-12);

    let below = hazard_index(&composition(21.0, 0.54), &thresholds).unwrap();
    assert_eq!(below.verdict, HazardVerdict::Survivable);

    let above = hazard_index(&composition(21.0, 0.6), &thresholds).unwrap();
    assert_eq!(above.verdict, HazardVerdict::NotSurvivable);
}

#[test]
fn hazard_is_zero_exactly_inside_safe_region() {
    let thresholds = HazardThresholds::default();
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..2000 {
        let o2: f64 = rng.random_range(0.0..=100.0);
        let co2: f64 = rng.random_range(0.0..=10.0);
        let h = hazard_index(&composition(o2, co2), &thresholds).unwrap();

        let safe = (19.5..=23.5).contains(&o2) && co2 <= 0.5;
        assert_eq!(
            h.total == 0.0,
            safe,
            "O2 {} CO2 {} gave H = {}",
            o2,
            co2,
            h.total
        );
        assert!(h.total >= 0.0);
    }
}

// ========== Validation ==========

#[test]
fn percentages_out_of_range_are_rejected() {
    assert!(matches!(
        AtmosphereComposition::new(-1.0, 0.04),
        Err(QuantityError::OutOfRange { quantity: "O2 percent", .. })
    ));
    assert!(matches!(
        AtmosphereComposition::new(21.0, 100.1),
        Err(QuantityError::OutOfRange { quantity: "CO2 percent", .. })
    ));
    assert!(AtmosphereComposition::new(f64::NAN, 0.0).is_err());
}

#[test]
fn unvalidated_composition_is_checked_by_models() {
    let bogus = AtmosphereComposition {
        oxygen_percent: 150.0,
        co2_percent: 0.0,
    };
    assert!(categorize(&bogus, &CategoricalThresholds::default()).is_err());
    assert!(hazard_index(&bogus, &HazardThresholds::default()).is_err());
}

#[test]
fn thresholds_deserialize_with_defaults() {
    let thresholds: HazardThresholds =
        serde_json::from_str(r#"{ "survivableBelow": 0.5 }"#).unwrap();
    assert_eq!(thresholds.survivable_below, 0.5);
    assert_eq!(thresholds.oxygen_safe_min_percent, 19.5);
    assert_eq!(thresholds.co2_safe_max_percent, 0.5);
}
