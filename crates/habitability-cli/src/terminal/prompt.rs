//! Line-oriented numeric prompts
//!
//! An empty line takes the field default. Unparseable or out-of-range input
//! prints an error and asks again.

use std::io::{BufRead, Write};

use anyhow::bail;
use colored::*;
use habitability::FieldSpec;

/// Interpret one line of user input for `field`.
pub fn parse_entry(field: &FieldSpec, line: &str) -> Result<f64, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(field.default);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| format!("`{}` is not a number", trimmed))?;
    field.validate(value).map_err(|e| e.to_string())
}

/// Prompt until a valid value is entered. Fails on end of input.
pub fn read_field<R: BufRead, W: Write>(
    field: &FieldSpec,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<f64> {
    loop {
        write!(
            output,
            "{} {} {}: ",
            "?".blue().bold(),
            field.label,
            format!("[{}]", field.default).bright_black()
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed while reading {}", field.name);
        }

        match parse_entry(field, &line) {
            Ok(value) => return Ok(value),
            Err(message) => writeln!(output, "{} {}", "[-]".red().bold(), message)?,
        }
    }
}

/// Use `given` when present, otherwise prompt for the field.
pub fn value_or_prompt<R: BufRead, W: Write>(
    given: Option<f64>,
    field: &FieldSpec,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<f64> {
    match given {
        Some(value) => Ok(value),
        None => read_field(field, input, output),
    }
}
