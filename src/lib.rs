//! phone-intel - phone number normalization, validation and classification.
//!
//! Raw, user-entered numbers flow through three stages:
//!
//! 1. **normalize**: strip formatting and apply a default calling code (never fails)
//! 2. **parse**: split into calling code and national number (the only fallible stage)
//! 3. **classify**: validity, line type, country, carrier, time zones and formats
//!
//! Numbering-plan knowledge sits behind the [`plan::NumberingPlan`] trait, so the
//! pipeline can run over the bundled libphonenumber data or a test double.
//!
//! # Architecture
//!
//! - **domain**: Validated value types (calling codes, normalized and parsed numbers)
//! - **models**: Classification output records
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **plan**: Numbering-plan trait, region table and libphonenumber backend
//! - **pipeline**: The normalize, parse and classify stages
//! - **services**: Lookup service with input limits, default-code policy and metrics
//! - **metrics**: Lookup counters
//! - **server**: MCP protocol server

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod plan;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use domain::{CallingCode, NormalizedNumber, ParsedNumber, ValidationError};
pub use error::{ConfigError, ParseError, PlanDataError, ServiceError};
pub use metrics::{LookupTimer, Metrics, MetricsSummary};
pub use models::{ClassificationResult, FormattedNumber, LineType, NumberFormat};
pub use pipeline::classify;
pub use plan::{LibPhonenumberPlan, NumberingPlan, RegionTable};
pub use server::PhoneIntelMcpServer;
pub use services::{PhoneLookupService, PhoneLookupServiceImpl};
