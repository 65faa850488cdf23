//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided calling code is not 1-3 digits in the range 1..=999.
    InvalidCallingCode(String),

    /// The provided string is not in normalized `+<digits>` form.
    NotNormalized(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCallingCode(code) => write!(f, "Invalid calling code: {}", code),
            Self::NotNormalized(number) => write!(f, "Not a normalized number: {}", number),
        }
    }
}

impl std::error::Error for ValidationError {}
