use thiserror::Error;

/// Rejected input to a formula.
///
/// Formulas validate their arguments up front so that a zero mass or a
/// negative luminosity surfaces as an error instead of a silent NaN or Inf.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuantityError {
    #[error("invalid input: {quantity} must be a finite number (got {value})")]
    NonFinite { quantity: &'static str, value: f64 },

    #[error("invalid input: {quantity} must be greater than zero (got {value})")]
    NonPositive { quantity: &'static str, value: f64 },

    #[error("invalid input: {quantity} must lie within {min}..={max} (got {value})")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Checks that `value` is finite.
pub fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, QuantityError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QuantityError::NonFinite { quantity, value })
    }
}

/// Checks that `value` is finite and strictly positive.
pub fn ensure_positive(quantity: &'static str, value: f64) -> Result<f64, QuantityError> {
    let value = ensure_finite(quantity, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(QuantityError::NonPositive { quantity, value })
    }
}

/// Checks that `value` is finite and inside the inclusive range `min..=max`.
pub fn ensure_within(
    quantity: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, QuantityError> {
    let value = ensure_finite(quantity, value)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(QuantityError::OutOfRange {
            quantity,
            value,
            min,
            max,
        })
    }
}
