//! Randrange Sequence — deterministic sequence generators.
//!
//! Pure functions with no dependency on the random range. They are used to
//! build expected-value fixtures and index sets.

pub mod arithmetic;
pub mod natural;

pub use arithmetic::{RangeArgs, arithmetic_range};
pub use natural::natural_sequence;
