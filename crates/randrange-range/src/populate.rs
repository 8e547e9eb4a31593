//! Batch population.

use randrange_core::error::ValidationError;
use randrange_core::rng::{RandomSource, ThreadRandomSource};
use tracing::{debug, trace};

use crate::random_range::RandomRange;

/// Parameters for [`RandomRange::populate`].
///
/// Defaults to integers drawn from `[0, 100)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulateOptions {
    /// Lower bound of the integer draw.
    pub start: f64,
    /// Upper bound of the integer draw, and the divisor in fractional mode.
    pub end: f64,
    /// Divide every draw by `end`.
    pub frac: bool,
}

impl Default for PopulateOptions {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 100.0,
            frac: false,
        }
    }
}

impl PopulateOptions {
    /// Sets the lower bound.
    #[must_use]
    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Sets the upper bound.
    #[must_use]
    pub fn with_end(mut self, end: f64) -> Self {
        self.end = end;
        self
    }

    /// Enables or disables fractional mode.
    #[must_use]
    pub fn with_frac(mut self, frac: bool) -> Self {
        self.frac = frac;
        self
    }
}

impl RandomRange {
    /// Draws `n` independent integers from `[start, end)`.
    ///
    /// In fractional mode each draw is divided by `end`; with `start == 0`
    /// that gives values in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonPositiveCount` if `n == 0`,
    /// `ValidationError::DivisionByZero` if `frac` is set and `end == 0`, and
    /// any error from [`RandomRange::new`] for the bounds.
    pub fn populate(n: usize, options: PopulateOptions) -> Result<Vec<f64>, ValidationError> {
        Self::populate_with(n, options, &mut ThreadRandomSource)
    }

    /// [`RandomRange::populate`] drawing from `source`.
    ///
    /// # Errors
    ///
    /// Same as [`RandomRange::populate`].
    #[allow(clippy::float_cmp, clippy::cast_precision_loss)]
    pub fn populate_with(
        n: usize,
        options: PopulateOptions,
        source: &mut dyn RandomSource,
    ) -> Result<Vec<f64>, ValidationError> {
        let PopulateOptions { start, end, frac } = options;

        if n == 0 {
            debug!("rejected populate with zero count");
            return Err(ValidationError::NonPositiveCount);
        }
        if frac && end == 0.0 {
            debug!(start, end, "rejected fractional populate over zero end");
            return Err(ValidationError::DivisionByZero);
        }

        let generator = Self::new(start, end)?;
        trace!(n, start, end, frac, "populating");

        Ok((0..n)
            .map(|_| {
                let draw = generator.random_integer_with(source) as f64;
                if frac { draw / end } else { draw }
            })
            .collect())
    }
}
