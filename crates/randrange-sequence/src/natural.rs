//! Natural-number sequences.

use randrange_core::error::{MAX_SEQUENCE_LENGTH, NumericError, TypeError, ValidationError};
use tracing::debug;

/// Generates `floor(n)` consecutive natural numbers.
///
/// With `include_zero` the sequence is `[0, 1, ..., floor(n) - 1]`, otherwise
/// `[1, 2, ..., floor(n)]`. Fractional `n` is floored and negative `n` yields
/// an empty sequence.
///
/// # Errors
///
/// Returns `NumericError::Type` if `n` is NaN or infinite, and
/// `NumericError::Validation(ValidationError::InvalidLength)` if `floor(n)`
/// exceeds [`MAX_SEQUENCE_LENGTH`].
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn natural_sequence(n: f64, include_zero: bool) -> Result<Vec<u64>, NumericError> {
    if !n.is_finite() {
        debug!(n, "natural_sequence rejected non-finite length");
        return Err(TypeError::NotFinite {
            function: "seqℕ",
            parameter: "'n'",
            value: n,
        }
        .into());
    }

    let length = n.floor().max(0.0);
    if length > MAX_SEQUENCE_LENGTH as f64 {
        debug!(n, "natural_sequence rejected oversized length");
        return Err(ValidationError::InvalidLength.into());
    }

    let count = length as u64;
    let offset = u64::from(!include_zero);
    Ok((0..count).map(|i| i + offset).collect())
}
