use crate::constants::{
    AU_M, GRAVITATIONAL_CONSTANT, INITIAL_SPIN_PERIOD_S, PhysicalConstants, SOLAR_MASS_KG,
    constants, install,
};

#[test]
fn si_table_matches_reference_values() {
    let si = PhysicalConstants::SI;
    assert_eq!(si.gravitational_constant, 6.67430e-11);
    assert_eq!(si.solar_mass_kg, 1.98847e30);
    assert_eq!(si.au_m, 1.495978707e11);
    assert_eq!(si.seconds_per_day, 86_400.0);
    assert_eq!(si.initial_spin_period_s, 86_400.0);
    assert_eq!(PhysicalConstants::default(), si);
}

#[test]
fn gravitational_parameter_is_evaluated_left_to_right() {
    let mu = PhysicalConstants::SI.gravitational_parameter(1.0);
    assert_eq!(mu, GRAVITATIONAL_CONSTANT * 1.0 * SOLAR_MASS_KG);
}

#[test]
fn install_after_first_read_is_rejected() {
    let current = *constants();
    let replacement = PhysicalConstants {
        au_m: AU_M * 2.0,
        ..PhysicalConstants::SI
    };
    assert_eq!(install(replacement), Err(replacement));
    assert_eq!(*constants(), current);
    assert_eq!(constants().initial_spin_period_s, INITIAL_SPIN_PERIOD_S);
}

#[test]
fn partial_json_falls_back_to_si_values() {
    let parsed: PhysicalConstants =
        serde_json::from_str(r#"{ "initialSpinPeriodS": 36000.0 }"#).unwrap();
    assert_eq!(parsed.initial_spin_period_s, 36_000.0);
    assert_eq!(parsed.au_m, AU_M);
}
