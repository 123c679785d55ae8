use crate::fields::{ALL, CO2_PERCENT, ORBITAL_RADIUS, OXYGEN_PERCENT, STELLAR_MASS};

#[test]
fn widget_ranges() {
    assert_eq!((STELLAR_MASS.min, STELLAR_MASS.max, STELLAR_MASS.default), (0.01, 10.0, 1.0));
    assert_eq!(STELLAR_MASS.step, 0.01);
    assert_eq!((ORBITAL_RADIUS.min, ORBITAL_RADIUS.max), (0.001, 100.0));
    assert_eq!(OXYGEN_PERCENT.default, 21.0);
    assert_eq!(OXYGEN_PERCENT.step, 0.1);
    assert_eq!(CO2_PERCENT.default, 0.04);
}

#[test]
fn defaults_lie_within_their_ranges() {
    for field in ALL {
        assert!(field.validate(field.default).is_ok(), "{} default out of range", field.name);
        assert!(field.min < field.max);
        assert!(field.step > 0.0);
    }
}

#[test]
fn validate_rejects_out_of_range_values() {
    assert!(STELLAR_MASS.validate(0.0).is_err());
    assert!(STELLAR_MASS.validate(10.5).is_err());
    assert_eq!(STELLAR_MASS.validate(10.0), Ok(10.0));
    assert!(OXYGEN_PERCENT.validate(f64::NAN).is_err());
}
