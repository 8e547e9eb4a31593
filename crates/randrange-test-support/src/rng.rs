//! Test RNG — deterministic `RandomSource` implementations for tests.

use randrange_core::rng::RandomSource;

/// A no-op RNG that always returns `min` for `next_u32_range` and `0.0` for
/// `next_f64`. Suitable for tests that only need the lower edge of a range.
#[derive(Debug)]
pub struct MockRng;

impl RandomSource for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that replays a predetermined sequence of unit draws. Panics if the
/// sequence is exhausted.
///
/// Every value must lie in `[0.0, 1.0)`. `next_u32_range` consumes one draw
/// and scales it onto the inclusive integer range, so a single script drives
/// both float and coin-flip operations.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given draws.
    ///
    /// # Panics
    ///
    /// Panics if any draw lies outside `[0.0, 1.0)`.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "SequenceRng draws must lie in [0.0, 1.0)"
        );
        Self { values, index: 0 }
    }

    /// Number of draws consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl RandomSource for SequenceRng {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        let span = f64::from(max - min) + 1.0;
        min + (self.next_f64() * span).floor() as u32
    }

    fn next_f64(&mut self) -> f64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
