//! Half-open arithmetic progressions.

use randrange_core::error::{MAX_SEQUENCE_LENGTH, NumericError, TypeError, ValidationError};
use tracing::debug;

/// The three accepted argument shapes for [`arithmetic_range`].
///
/// `start` defaults to `0` and `step` to `1` when the shape omits them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeArgs {
    /// `[0, stop)` with step `1`.
    Stop(f64),
    /// `[start, stop)` with step `1`.
    StartStop(f64, f64),
    /// `[start, stop)` advancing by `step`, which may be negative.
    StartStopStep(f64, f64, f64),
}

impl RangeArgs {
    /// Returns `(start, stop, step)` with defaults filled in.
    #[must_use]
    pub fn resolve(self) -> (f64, f64, f64) {
        match self {
            Self::Stop(stop) => (0.0, stop, 1.0),
            Self::StartStop(start, stop) => (start, stop, 1.0),
            Self::StartStopStep(start, stop, step) => (start, stop, step),
        }
    }
}

impl From<f64> for RangeArgs {
    fn from(stop: f64) -> Self {
        Self::Stop(stop)
    }
}

impl From<(f64, f64)> for RangeArgs {
    fn from((start, stop): (f64, f64)) -> Self {
        Self::StartStop(start, stop)
    }
}

impl From<(f64, f64, f64)> for RangeArgs {
    fn from((start, stop, step): (f64, f64, f64)) -> Self {
        Self::StartStopStep(start, stop, step)
    }
}

/// Generates `start, start + step, start + 2·step, ...`, exclusive of `stop`.
///
/// Returns an empty sequence when `step` does not move `start` toward `stop`.
/// Otherwise the length is `ceil((stop - start) / step)`.
///
/// # Errors
///
/// Returns `NumericError::Type` if any resolved parameter is NaN or infinite,
/// `NumericError::Validation(ValidationError::ZeroStep)` if `step` is zero, and
/// `NumericError::Validation(ValidationError::InvalidLength)` if the sequence
/// would exceed [`MAX_SEQUENCE_LENGTH`] elements.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn arithmetic_range(args: impl Into<RangeArgs>) -> Result<Vec<f64>, NumericError> {
    let (start, stop, step) = args.into().resolve();

    for (parameter, value) in [("start", start), ("stop", stop), ("step", step)] {
        if !value.is_finite() {
            debug!(parameter, value, "arithmetic_range rejected non-finite parameter");
            return Err(TypeError::NotFinite {
                function: "range",
                parameter,
                value,
            }
            .into());
        }
    }

    if step == 0.0 {
        return Err(ValidationError::ZeroStep.into());
    }

    if (step > 0.0 && start >= stop) || (step < 0.0 && start <= stop) {
        return Ok(Vec::new());
    }

    let length = ((stop - start) / step).ceil();
    if length > MAX_SEQUENCE_LENGTH as f64 {
        debug!(start, stop, step, "arithmetic_range rejected oversized length");
        return Err(ValidationError::InvalidLength.into());
    }

    let count = length as usize;
    Ok((0..count).map(|i| start + i as f64 * step).collect())
}
