//! Data models for classification output.
//!
//! This module contains the line-type categories, number renderings and the
//! classification record returned to callers.

pub mod classification;

pub use classification::{ClassificationResult, FormattedNumber, LineType, NumberFormat};
