//! The validated random range.

use randrange_core::error::ValidationError;
use randrange_core::rng::{RandomSource, ThreadRandomSource};
use randrange_core::validate::validate_number;
use tracing::{debug, trace};

/// A uniform generator over the half-open interval `[minimum, maximum)`.
///
/// `minimum <= maximum` holds for the lifetime of the value. Every mutator
/// checks the new bound against the current value of the other one and
/// rejects the change before assigning, so a failed call leaves the range
/// untouched.
///
/// Each randomized method comes in two forms: the plain one draws from the
/// thread-local generator, the `_with` one from a caller-supplied
/// [`RandomSource`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomRange {
    minimum: f64,
    maximum: f64,
}

impl Default for RandomRange {
    /// The unit interval `[0, 1)`.
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
        }
    }
}

impl RandomRange {
    /// Creates a range over `[minimum, maximum)`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonFiniteBounds` if either bound is NaN or
    /// infinite, or `ValidationError::MinimumAboveMaximum` if
    /// `minimum > maximum`.
    pub fn new(minimum: f64, maximum: f64) -> Result<Self, ValidationError> {
        if !minimum.is_finite() || !maximum.is_finite() {
            debug!(minimum, maximum, "rejected non-finite range bounds");
            return Err(ValidationError::NonFiniteBounds);
        }
        if minimum > maximum {
            debug!(minimum, maximum, "rejected range construction");
            return Err(ValidationError::MinimumAboveMaximum);
        }
        Ok(Self { minimum, maximum })
    }

    /// Current lower bound (inclusive).
    #[must_use]
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Current upper bound (exclusive unless equal to the minimum).
    #[must_use]
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Moves the lower bound.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidNumber` if `value` is not finite, or
    /// `ValidationError::MinimumAboveMaximum` if `value` exceeds the current
    /// maximum.
    pub fn set_minimum(&mut self, value: f64) -> Result<(), ValidationError> {
        validate_number("Minimum", value)?;
        if value > self.maximum {
            debug!(value, maximum = self.maximum, "rejected minimum update");
            return Err(ValidationError::MinimumAboveMaximum);
        }
        trace!(from = self.minimum, to = value, "minimum updated");
        self.minimum = value;
        Ok(())
    }

    /// Moves the upper bound.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidNumber` if `value` is not finite, or
    /// `ValidationError::MaximumBelowMinimum` if `value` is below the current
    /// minimum.
    pub fn set_maximum(&mut self, value: f64) -> Result<(), ValidationError> {
        validate_number("Maximum", value)?;
        if value < self.minimum {
            debug!(value, minimum = self.minimum, "rejected maximum update");
            return Err(ValidationError::MaximumBelowMinimum);
        }
        trace!(from = self.maximum, to = value, "maximum updated");
        self.maximum = value;
        Ok(())
    }

    /// Replaces both bounds at once.
    ///
    /// The pair is validated as a whole, so moving a range past its old
    /// position (e.g. `[0, 1)` to `[5, 10)`) needs no particular call order.
    ///
    /// # Errors
    ///
    /// Same as [`RandomRange::new`]. On error neither bound changes.
    pub fn set_bounds(&mut self, minimum: f64, maximum: f64) -> Result<(), ValidationError> {
        *self = Self::new(minimum, maximum)?;
        trace!(minimum, maximum, "bounds updated");
        Ok(())
    }

    /// Uniform float in `[minimum, maximum)`; always `minimum` when the bounds
    /// are equal.
    #[must_use]
    pub fn random_number(&self) -> f64 {
        self.random_number_with(&mut ThreadRandomSource)
    }

    /// [`RandomRange::random_number`] drawing from `source`.
    ///
    /// Scaling a draw just below `1` can round up to `maximum` when the bounds
    /// are large; such results are pulled back to the float below it.
    pub fn random_number_with(&self, source: &mut dyn RandomSource) -> f64 {
        let x = source.next_f64() * (self.maximum - self.minimum) + self.minimum;
        if x >= self.maximum && self.maximum > self.minimum {
            self.maximum.next_down()
        } else {
            x
        }
    }

    /// `floor(random_number())`.
    #[must_use]
    pub fn random_integer(&self) -> i64 {
        self.random_integer_with(&mut ThreadRandomSource)
    }

    /// [`RandomRange::random_integer`] drawing from `source`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn random_integer_with(&self, source: &mut dyn RandomSource) -> i64 {
        self.random_number_with(source).floor() as i64
    }

    /// A fair coin flip, `0` or `1`. Ignores the configured bounds.
    #[must_use]
    pub fn zero_or_one(&self) -> u32 {
        self.zero_or_one_with(&mut ThreadRandomSource)
    }

    /// [`RandomRange::zero_or_one`] drawing from `source`.
    #[allow(clippy::unused_self)]
    pub fn zero_or_one_with(&self, source: &mut dyn RandomSource) -> u32 {
        source.next_u32_range(0, 1)
    }

    /// Picks one element of `items` uniformly.
    ///
    /// The index is drawn from a separate `[0, len)` range; this range's own
    /// bounds are not touched.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyChoice` if `items` is empty.
    pub fn choice<'a, T>(&self, items: &'a [T]) -> Result<&'a T, ValidationError> {
        self.choice_with(items, &mut ThreadRandomSource)
    }

    /// [`RandomRange::choice`] drawing from `source`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyChoice` if `items` is empty.
    #[allow(clippy::unused_self, clippy::cast_precision_loss)]
    pub fn choice_with<'a, T>(
        &self,
        items: &'a [T],
        source: &mut dyn RandomSource,
    ) -> Result<&'a T, ValidationError> {
        let Some(last) = items.len().checked_sub(1) else {
            debug!("rejected choice from empty slice");
            return Err(ValidationError::EmptyChoice);
        };

        let indices = Self::new(0.0, items.len() as f64)?;
        let index = usize::try_from(indices.random_integer_with(source))
            .unwrap_or(0)
            .min(last);
        Ok(&items[index])
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use randrange_test_support::SequenceRng;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn bounds_round_trip(a in -1.0e6_f64..1.0e6, b in -1.0e6_f64..1.0e6) {
            let (minimum, maximum) = if a <= b { (a, b) } else { (b, a) };
            let range = RandomRange::new(minimum, maximum).unwrap();
            prop_assert_eq!(range.minimum(), minimum);
            prop_assert_eq!(range.maximum(), maximum);
        }

        #[test]
        fn inverted_bounds_always_rejected(a in -1.0e6_f64..1.0e6, delta in 1.0e-3_f64..1.0e3) {
            prop_assert_eq!(
                RandomRange::new(a + delta, a),
                Err(ValidationError::MinimumAboveMaximum)
            );
        }

        #[test]
        fn draws_stay_in_half_open_interval(minimum in -1_000_i32..1_000, width in 1_i32..1_000) {
            let minimum = f64::from(minimum);
            let maximum = minimum + f64::from(width);
            let range = RandomRange::new(minimum, maximum).unwrap();
            let x = range.random_number();
            prop_assert!(x >= minimum && x < maximum);
            #[allow(clippy::cast_precision_loss)]
            let k = range.random_integer() as f64;
            prop_assert!(k >= minimum && k < maximum);
        }

        #[test]
        fn zero_or_one_is_binary(draw in 0.0_f64..1.0) {
            let mut rng = SequenceRng::new(vec![draw]);
            let bit = RandomRange::default().zero_or_one_with(&mut rng);
            prop_assert!(bit == 0 || bit == 1);
        }

        #[test]
        fn choice_returns_member(items in proptest::collection::vec(any::<i32>(), 1..40)) {
            let picked = RandomRange::default().choice(&items).unwrap();
            prop_assert!(items.contains(picked));
        }
    }
}
