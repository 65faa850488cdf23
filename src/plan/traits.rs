use crate::domain::{NormalizedNumber, ParsedNumber};
use crate::error::ParseResult;
use crate::models::{LineType, NumberFormat};

/// Read-only numbering-plan lookups.
///
/// Provides abstraction over the dataset that decomposes and classifies
/// numbers, enabling different implementations (libphonenumber metadata,
/// synthetic plans in tests). Implementations are shared across threads and
/// must never mutate after construction.
pub trait NumberingPlan: Send + Sync {
    /// Split a normalized number into calling code and national number.
    fn parse(&self, number: &NormalizedNumber) -> ParseResult<ParsedNumber>;

    /// Number falls in an assigned range for its region.
    fn is_valid(&self, number: &ParsedNumber) -> bool;

    /// Length and shape are plausible for the calling code.
    fn is_possible(&self, number: &ParsedNumber) -> bool;

    /// Line category, `LineType::Unknown` when no range matches.
    fn line_type(&self, number: &ParsedNumber) -> LineType;

    /// Country or region name, empty when unknown.
    fn region_label(&self, number: &ParsedNumber) -> String;

    /// Carrier name, empty when unknown.
    fn carrier_label(&self, number: &ParsedNumber) -> String;

    /// IANA zone ids associated with the number.
    fn time_zones(&self, number: &ParsedNumber) -> Vec<String>;

    /// Render the number.
    fn format(&self, number: &ParsedNumber, format: NumberFormat) -> String;

    /// Dataset version, for logs and diagnostics.
    fn version(&self) -> String {
        "unversioned".to_string()
    }
}
