//! Randrange Range — uniform random values over a configurable range.
//!
//! [`RandomRange`] owns a `[minimum, maximum)` pair, keeps
//! `minimum <= maximum` across construction and mutation, and derives floats,
//! integers, coin flips, element choices, and batches from a single unit draw.

pub mod populate;
pub mod random_range;

pub use populate::PopulateOptions;
pub use random_range::RandomRange;
