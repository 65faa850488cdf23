//! Classify stage: parsed number to derived facts.

use crate::domain::ParsedNumber;
use crate::models::{ClassificationResult, FormattedNumber, NumberFormat};
use crate::plan::NumberingPlan;

/// Render a parsed number in every supported format.
pub fn format_all(plan: &dyn NumberingPlan, number: &ParsedNumber) -> FormattedNumber {
    FormattedNumber {
        e164: plan.format(number, NumberFormat::E164),
        international: plan.format(number, NumberFormat::International),
        national: plan.format(number, NumberFormat::National),
        rfc3966: plan.format(number, NumberFormat::Rfc3966),
    }
}

/// Derive validity, line type, labels and zones for a parsed number.
///
/// Total: missing data shows up as `LineType::Unknown`, empty labels or an
/// empty zone list. `is_possible` is forced true whenever `is_valid` is, so a
/// plan whose length table lags its range data cannot break that ordering.
pub fn classify_parsed(plan: &dyn NumberingPlan, number: &ParsedNumber) -> ClassificationResult {
    let is_valid = plan.is_valid(number);
    let is_possible = is_valid || plan.is_possible(number);

    ClassificationResult {
        normalized: None,
        parsed: number.clone(),
        is_valid,
        is_possible,
        line_type: plan.line_type(number),
        country_label: plan.region_label(number),
        carrier_label: plan.carrier_label(number),
        time_zones: plan.time_zones(number),
        formats: format_all(plan, number),
    }
}
