//! Shared test doubles for the randrange workspace.

mod rng;

pub use rng::{MockRng, SequenceRng};
