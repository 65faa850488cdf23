//! Error types for phone-intel.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by the parse stage when a normalized number cannot be split
/// into a calling code and a national significant number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but a `+` (or nothing at all) survived normalization
    #[error("No digits to parse in {0:?}")]
    NoNumber(String),

    /// National number is shorter than any length known for the calling code
    #[error("Number too short for calling code +{calling_code}: {input}")]
    TooShort { calling_code: u16, input: String },

    /// More digits than any numbering plan allows
    #[error("Number too long: {0}")]
    TooLong(String),

    /// The numbering plan could not tokenize the number
    #[error("Numbering plan rejected {input}: {reason}")]
    Rejected { input: String, reason: String },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while loading region data.
#[derive(Error, Debug)]
pub enum PlanDataError {
    /// Region data file could not be read
    #[error("Failed to read region data from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Region data is not valid JSON for the expected schema
    #[error("Region data parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Region data is structurally valid but inconsistent
    #[error("Invalid region data: {0}")]
    Invalid(String),
}

/// Errors surfaced by the lookup service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The pipeline could not parse the number
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The caller supplied input the service refuses to process
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Number has no leading `+` and no default calling code is configured
    #[error("No leading '+' in {0:?} and no default country code configured")]
    MissingDefaultCode(String),

    /// Supplied default calling code is malformed
    #[error("Invalid default country code: {0}")]
    InvalidDefaultCode(#[from] ValidationError),
}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with PlanDataError
pub type PlanDataResult<T> = Result<T, PlanDataError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;
