//! Numeric validation.

use tracing::debug;

use crate::error::ValidationError;

/// Checks that `value` is a finite real number.
///
/// # Errors
///
/// Returns `ValidationError::InvalidNumber` carrying `label` if `value` is
/// NaN, `+inf`, or `-inf`.
pub fn validate_number(label: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        return Ok(());
    }
    debug!(label, value, "rejected non-finite number");
    Err(ValidationError::InvalidNumber {
        label: label.to_owned(),
    })
}

/// Returns `true` if `n` is finite and has a fractional part.
///
/// `5.0`, `0.0`, and `-0.0` are integral; NaN and the infinities are not
/// floats either.
#[must_use]
pub fn is_float(n: f64) -> bool {
    n.is_finite() && n.fract() != 0.0
}
