//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent or null
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Value is well-formed but outside the accepted range
    OutOfRange { field: &'static str, min: i32, max: i32 },

    /// Value doesn't match the required format
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl ValidationError {
    /// Whether the input was well-formed but violates a data constraint.
    ///
    /// These surface as 422 rather than 400.
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Unwrap an optional request field, reporting which one was absent.
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}
