//! Random source abstraction.
//!
//! In production, draws come from the thread-local generator. In tests, a
//! scripted implementation is injected so that outcomes are predictable.

use rand::Rng;

/// Abstraction over uniform random draws.
pub trait RandomSource: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

/// Production source backed by `rand::rng()`.
///
/// Holds no state of its own; each draw borrows the thread-local generator,
/// which is seeded from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        rand::rng().random_range(min..=max)
    }

    fn next_f64(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}
