//! Phone number value objects produced by the normalize and parse stages.

use super::calling_code::CallingCode;
use super::errors::ValidationError;
use serde::Serialize;
use std::fmt;

/// A cleaned phone number: a leading `+` followed only by ASCII digits.
///
/// Produced by [`crate::pipeline::normalize`]. The flag records whether the
/// default calling code had to be assumed, which is the structured form of
/// the warning the normalizer logs.
///
/// # Example
///
/// ```
/// use phone_intel::domain::NormalizedNumber;
///
/// let number = NormalizedNumber::new("+14155552671").unwrap();
/// assert_eq!(number.digits(), "14155552671");
/// assert!(!number.default_code_applied());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NormalizedNumber {
    value: String,
    default_code_applied: bool,
}

impl NormalizedNumber {
    /// Wrap an already-normalized string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NotNormalized` unless the string is a `+`
    /// followed by zero or more ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !Self::is_normalized(&value) {
            return Err(ValidationError::NotNormalized(value));
        }
        Ok(Self {
            value,
            default_code_applied: false,
        })
    }

    pub(crate) fn from_cleaned(value: String, default_code_applied: bool) -> Self {
        debug_assert!(Self::is_normalized(&value));
        Self {
            value,
            default_code_applied,
        }
    }

    /// Check the `+<digits>` shape.
    pub fn is_normalized(value: &str) -> bool {
        match value.strip_prefix('+') {
            Some(rest) => rest.chars().all(|c| c.is_ascii_digit()),
            None => false,
        }
    }

    /// Get the number as a string slice, including the `+`.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The digits after the `+`.
    pub fn digits(&self) -> &str {
        &self.value[1..]
    }

    /// Whether the default calling code was prepended.
    pub fn default_code_applied(&self) -> bool {
        self.default_code_applied
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl fmt::Display for NormalizedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A number split into calling code and national significant number.
///
/// Two parsed numbers are equal when code, national number and region all
/// agree; this is the identity the round-trip law is stated over.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParsedNumber {
    calling_code: CallingCode,
    national_number: String,
    region: Option<String>,
}

impl ParsedNumber {
    /// Create a ParsedNumber.
    ///
    /// `national_number` keeps any leading zeros (Italian fixed lines start
    /// with `0`). `region` is an ISO 3166-1 alpha-2 id when the plan can
    /// attribute the number to one region.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NotNormalized` if `national_number` is empty
    /// or contains anything but ASCII digits.
    pub fn new(
        calling_code: CallingCode,
        national_number: impl Into<String>,
        region: Option<String>,
    ) -> Result<Self, ValidationError> {
        let national_number = national_number.into();
        if national_number.is_empty() || !national_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NotNormalized(national_number));
        }
        Ok(Self {
            calling_code,
            national_number,
            region,
        })
    }

    pub fn calling_code(&self) -> CallingCode {
        self.calling_code
    }

    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// E.164 rendering: `+`, calling code, national number, no separators.
    pub fn e164(&self) -> String {
        format!("+{}{}", self.calling_code.value(), self.national_number)
    }
}

impl fmt::Display for ParsedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.e164())
    }
}
