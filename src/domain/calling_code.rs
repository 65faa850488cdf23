//! CallingCode value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A country calling code such as `1` (NANP) or `91` (India).
///
/// Calling codes are validated at construction time: 1 to 3 digits, never
/// zero. Whether the code is actually assigned is a question for the
/// numbering plan, not for this type.
///
/// # Example
///
/// ```
/// use phone_intel::domain::CallingCode;
///
/// let code: CallingCode = "+91".parse().unwrap();
/// assert_eq!(code.value(), 91);
/// assert_eq!(code.to_string(), "+91");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallingCode(u16);

impl CallingCode {
    /// Create a new CallingCode from its numeric value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCallingCode` unless `1 <= value <= 999`.
    pub fn new(value: u16) -> Result<Self, ValidationError> {
        if !(1..=999).contains(&value) {
            return Err(ValidationError::InvalidCallingCode(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Numeric value of the code.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl FromStr for CallingCode {
    type Err = ValidationError;

    /// Accepts `"91"` and `"+91"`, with surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

        if digits.is_empty() || digits.len() > 3 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidCallingCode(s.to_string()));
        }

        let value = digits
            .parse::<u16>()
            .map_err(|_| ValidationError::InvalidCallingCode(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<u16> for CallingCode {
    type Error = ValidationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Serde support - serialize as the bare number
impl Serialize for CallingCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from number with validation
impl<'de> Deserialize<'de> for CallingCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u16::deserialize(deserializer)?;
        CallingCode::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for CallingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}
