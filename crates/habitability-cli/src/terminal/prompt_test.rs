use std::io::Cursor;

use habitability::fields::{CO2_PERCENT, ORBITAL_DISTANCE, STELLAR_MASS};

use crate::terminal::prompt::{parse_entry, read_field, value_or_prompt};

#[test]
fn empty_line_takes_the_default() {
    assert_eq!(parse_entry(&STELLAR_MASS, "\n"), Ok(1.0));
    assert_eq!(parse_entry(&CO2_PERCENT, "   "), Ok(0.04));
}

#[test]
fn numbers_are_trimmed_and_parsed() {
    assert_eq!(parse_entry(&ORBITAL_DISTANCE, " 0.72 \n"), Ok(0.72));
}

#[test]
fn junk_and_out_of_range_values_are_rejected() {
    let err = parse_entry(&STELLAR_MASS, "heavy").unwrap_err();
    assert!(err.contains("not a number"));

    let err = parse_entry(&STELLAR_MASS, "42").unwrap_err();
    assert!(err.contains("stellar mass"));
}

#[test]
fn invalid_input_reprompts() {
    let mut input = Cursor::new("abc\n-3\n2.5\n");
    let mut output = Vec::new();

    let value = read_field(&STELLAR_MASS, &mut input, &mut output).unwrap();
    assert_eq!(value, 2.5);

    let transcript = String::from_utf8(output).unwrap();
    assert_eq!(transcript.matches("Stellar mass").count(), 3);
    assert_eq!(transcript.matches("[-]").count(), 2);
}

#[test]
fn closed_input_is_an_error() {
    let mut input = Cursor::new("");
    let mut output = Vec::new();
    assert!(read_field(&STELLAR_MASS, &mut input, &mut output).is_err());
}

#[test]
fn given_values_skip_the_prompt() {
    let mut input = Cursor::new("");
    let mut output = Vec::new();
    let value = value_or_prompt(Some(3.0), &STELLAR_MASS, &mut input, &mut output).unwrap();
    assert_eq!(value, 3.0);
    assert!(output.is_empty());
}
