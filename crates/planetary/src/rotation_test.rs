use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use units::{Length, Mass, QuantityError, Time};

use crate::orbit::orbital_period;
use crate::rotation::{
    HeuristicRotationConfig, HeuristicVerdict, SyncThresholds, SyncVerdict, assess_periods,
    assess_synchronization, compute_delta_ratio, delta_p_ratio, initial_spin_period,
    rotation_difference,
};

// ========== Heuristic model ==========

#[test]
fn heuristic_sun_like_star_is_possible() {
    let result =
        rotation_difference(Mass::from_solar_masses(1.0), &HeuristicRotationConfig::default())
            .unwrap();
    assert_eq!(result.difference_days, 25.0);
    assert_eq!(result.verdict, HeuristicVerdict::Possible);
}

#[test]
fn heuristic_boundary_at_seven_days_is_impossible() {
    // 30 - 4.6 * 5 = 7
    let result =
        rotation_difference(Mass::from_solar_masses(4.6), &HeuristicRotationConfig::default())
            .unwrap();
    assert_relative_eq!(result.difference_days, 7.0, epsilon = 1e-12);
    assert_eq!(result.verdict, HeuristicVerdict::Impossible);

    let exact =
        rotation_difference(Mass::from_solar_masses(4.0), &HeuristicRotationConfig::default())
            .unwrap();
    assert_eq!(exact.difference_days, 10.0);
    assert_eq!(exact.verdict, HeuristicVerdict::Possible);

    let at_limit = rotation_difference(
        Mass::from_solar_masses(4.6),
        &HeuristicRotationConfig {
            impossible_at_or_below_days: result.difference_days,
            ..HeuristicRotationConfig::default()
        },
    )
    .unwrap();
    assert_eq!(at_limit.verdict, HeuristicVerdict::Impossible);
}

#[test]
fn heuristic_difference_never_goes_negative() {
    let result =
        rotation_difference(Mass::from_solar_masses(10.0), &HeuristicRotationConfig::default())
            .unwrap();
    assert_eq!(result.difference_days, 0.0);
    assert_eq!(result.verdict, HeuristicVerdict::Impossible);
}

#[test]
fn heuristic_rejects_zero_mass() {
    assert!(matches!(
        rotation_difference(Mass::from_solar_masses(0.0), &HeuristicRotationConfig::default()),
        Err(QuantityError::NonPositive { .. })
    ));
}

// ========== ΔP/P model ==========

#[test]
fn initial_spin_is_one_day() {
    assert_eq!(initial_spin_period().to_seconds(), 86_400.0);
}

#[test]
fn earth_like_orbit_is_non_synchronous() {
    let ratio = delta_p_ratio(Length::from_au(1.0), Mass::from_solar_masses(1.0)).unwrap();
    assert_relative_eq!(ratio, 0.9973, epsilon = 1e-4);

    let assessment = assess_synchronization(
        Length::from_au(1.0),
        Mass::from_solar_masses(1.0),
        &SyncThresholds::default(),
    )
    .unwrap();
    assert_eq!(assessment.verdict, SyncVerdict::NonSynchronous);
    assert!(assessment.verdict.is_survivable());
    assert_eq!(assessment.ratio, ratio);
}

#[test]
fn delta_p_ratio_matches_reference_formula_exactly() {
    let a = Length::from_au(0.3);
    let m = Mass::from_solar_masses(0.7);
    let p = orbital_period(a, m).unwrap().to_seconds();
    assert_eq!(delta_p_ratio(a, m).unwrap(), (86_400.0 - p).abs() / p);
}

#[test]
fn orbit_close_to_a_day_is_near_synchronous() {
    // P ≈ 1.05 days around a solar-mass star
    let assessment = assess_synchronization(
        Length::from_au(0.0202),
        Mass::from_solar_masses(1.0),
        &SyncThresholds::default(),
    )
    .unwrap();
    assert!(assessment.ratio < 0.10, "ratio {} should be < 0.10", assessment.ratio);
    assert_eq!(assessment.verdict, SyncVerdict::NearSynchronous);
    assert!(!assessment.verdict.is_survivable());
}

#[test]
fn classification_threshold_is_inclusive_on_the_survivable_side() {
    let thresholds = SyncThresholds::default();
    assert_eq!(SyncVerdict::classify(0.10, &thresholds), SyncVerdict::NonSynchronous);
    assert_eq!(SyncVerdict::classify(0.0999, &thresholds), SyncVerdict::NearSynchronous);
    assert_eq!(SyncVerdict::classify(0.0, &thresholds), SyncVerdict::NearSynchronous);
}

#[test]
fn absolute_difference_is_symmetric() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..200 {
        let rotation = Time::from_hours(rng.random_range(1.0..2000.0));
        let orbital = Time::from_hours(rng.random_range(1.0..2000.0));

        let forward = compute_delta_ratio(rotation, orbital).unwrap();
        let numerator = forward * orbital.to_seconds();
        let swapped_numerator = (orbital.to_seconds() - rotation.to_seconds()).abs();
        assert_relative_eq!(numerator, swapped_numerator, max_relative = 1e-12);
        assert!(forward >= 0.0);
    }
}

#[test]
fn spin_faster_or_slower_by_the_same_amount_gives_the_same_ratio() {
    let orbital = Time::from_hours(100.0);
    let slower = compute_delta_ratio(Time::from_hours(120.0), orbital).unwrap();
    let faster = compute_delta_ratio(Time::from_hours(80.0), orbital).unwrap();
    assert_relative_eq!(slower, faster);
    assert_relative_eq!(slower, 0.2);
}

#[test]
fn direct_periods_in_days_or_hours_agree() {
    let thresholds = SyncThresholds::default();
    let days = assess_periods(Time::from_days(1.0), Time::from_days(27.3), &thresholds).unwrap();
    let hours =
        assess_periods(Time::from_hours(24.0), Time::from_hours(27.3 * 24.0), &thresholds).unwrap();

    assert_relative_eq!(days.ratio, hours.ratio, max_relative = 1e-12);
    assert_eq!(days.verdict, SyncVerdict::NonSynchronous);
}

#[test]
fn tidally_locked_moon_is_near_synchronous() {
    // The Moon: rotation and orbit both 27.32 days
    let moon = assess_periods(
        Time::from_days(27.32),
        Time::from_days(27.32),
        &SyncThresholds::default(),
    )
    .unwrap();
    assert_eq!(moon.ratio, 0.0);
    assert_eq!(moon.verdict, SyncVerdict::NearSynchronous);
}

#[test]
fn zero_periods_are_rejected() {
    assert!(compute_delta_ratio(Time::from_hours(24.0), Time::zero()).is_err());
    assert!(compute_delta_ratio(Time::zero(), Time::from_hours(24.0)).is_err());
}

#[test]
fn verdict_labels() {
    assert_eq!(SyncVerdict::NonSynchronous.to_string(), "non-synchronous, survivable");
    assert_eq!(SyncVerdict::NearSynchronous.to_string(), "near-synchronous, at risk");
    assert_eq!(HeuristicVerdict::Impossible.to_string(), "impossible");
    assert_eq!(HeuristicVerdict::Possible.to_string(), "possible");
}
