//! Randrange demo — error types.

use randrange_core::error::{NumericError, ValidationError};
use thiserror::Error;

/// Startup and runtime errors for the demo.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is present but unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// The configured range or counts were rejected.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// A sequence generator rejected its arguments.
    #[error("invalid input: {0}")]
    Numeric(#[from] NumericError),
}
