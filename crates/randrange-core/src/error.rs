//! Error types.

use thiserror::Error;

/// Rejected input or a violated precondition.
///
/// The `Display` strings are part of the public contract; callers match on
/// them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A value was NaN or infinite.
    #[error("{label} must be a valid number.")]
    InvalidNumber {
        /// Name of the offending value (e.g. `"Minimum"`).
        label: String,
    },

    /// A bound passed to the constructor was NaN or infinite.
    #[error("Minimum and maximum must be finite numbers.")]
    NonFiniteBounds,

    /// A minimum was placed above the current maximum.
    #[error("Minimum cannot be greater than maximum.")]
    MinimumAboveMaximum,

    /// A maximum was placed below the current minimum.
    #[error("Maximum cannot be less than minimum.")]
    MaximumBelowMinimum,

    /// `choice` was given nothing to choose from.
    #[error("Array cannot be empty.")]
    EmptyChoice,

    /// `populate` was asked for zero values.
    #[error("Count must be a positive number.")]
    NonPositiveCount,

    /// Fractional population was requested with an upper bound of zero.
    #[error("Division by zero error or invalid range.")]
    DivisionByZero,

    /// An arithmetic range was requested with a step of zero.
    #[error("range: step cannot be 0")]
    ZeroStep,

    /// A generated sequence would exceed [`MAX_SEQUENCE_LENGTH`] elements.
    #[error("Invalid array length")]
    InvalidLength,
}

/// Longest sequence the generators will build (`2^32 - 1`).
pub const MAX_SEQUENCE_LENGTH: u64 = 4_294_967_295;

/// A sequence generator received an argument that is not a finite number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeError {
    /// The named parameter was NaN or infinite.
    #[error("{function}: {parameter} must be a finite number. Received: {value}.")]
    NotFinite {
        /// The generator that rejected the argument.
        function: &'static str,
        /// The parameter name.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Either kind of numeric failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericError {
    /// See [`ValidationError`].
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// See [`TypeError`].
    #[error(transparent)]
    Type(#[from] TypeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_message_includes_label() {
        let err = ValidationError::InvalidNumber {
            label: "Minimum".to_owned(),
        };
        assert_eq!(err.to_string(), "Minimum must be a valid number.");
    }

    #[test]
    fn test_ordering_messages() {
        assert_eq!(
            ValidationError::MinimumAboveMaximum.to_string(),
            "Minimum cannot be greater than maximum."
        );
        assert_eq!(
            ValidationError::MaximumBelowMinimum.to_string(),
            "Maximum cannot be less than minimum."
        );
    }

    #[test]
    fn test_constructor_and_length_messages() {
        assert_eq!(
            ValidationError::NonFiniteBounds.to_string(),
            "Minimum and maximum must be finite numbers."
        );
        assert_eq!(
            ValidationError::InvalidLength.to_string(),
            "Invalid array length"
        );
    }

    #[test]
    fn test_not_finite_message() {
        let err = TypeError::NotFinite {
            function: "range",
            parameter: "step",
            value: f64::NAN,
        };
        assert_eq!(
            err.to_string(),
            "range: step must be a finite number. Received: NaN."
        );
    }

    #[test]
    fn test_numeric_error_is_transparent() {
        let err = NumericError::from(ValidationError::ZeroStep);
        assert_eq!(err.to_string(), "range: step cannot be 0");
        assert!(matches!(
            err,
            NumericError::Validation(ValidationError::ZeroStep)
        ));
    }
}
