//! Randrange Core — shared abstractions.
//!
//! This crate defines the error taxonomy, the random source seam, and the
//! numeric validator that the sequence and range crates depend on.

pub mod error;
pub mod rng;
pub mod validate;
