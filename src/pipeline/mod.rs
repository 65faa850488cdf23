//! The normalize -> parse -> classify pipeline.
//!
//! Each stage is a free function over an injected [`NumberingPlan`]; only
//! the parse stage can fail.

mod classifier;
mod normalizer;
mod parser;

pub use classifier::{classify_parsed, format_all};
pub use normalizer::{has_leading_plus, normalize, normalize_explicit};
pub use parser::{parse, MAX_DIGITS};

use crate::domain::{CallingCode, NormalizedNumber};
use crate::error::ParseResult;
use crate::models::ClassificationResult;
use crate::plan::NumberingPlan;

/// Run all three stages on raw input.
///
/// # Errors
///
/// Returns the parse stage's `ParseError` unchanged.
///
/// # Example
///
/// ```
/// use phone_intel::domain::CallingCode;
/// use phone_intel::pipeline::classify;
/// use phone_intel::plan::LibPhonenumberPlan;
///
/// let plan = LibPhonenumberPlan::bundled().unwrap();
/// let result = classify(&plan, "+1 415 555 2671", CallingCode::new(1).unwrap()).unwrap();
/// assert_eq!(result.country_label, "United States");
/// ```
pub fn classify(
    plan: &dyn NumberingPlan,
    raw: &str,
    default_code: CallingCode,
) -> ParseResult<ClassificationResult> {
    let span = tracing::debug_span!("classify", default_code = %default_code);
    let _guard = span.enter();

    let normalized = normalize(raw, default_code);
    tracing::debug!(normalized = %normalized, "Normalized input");

    classify_normalized(plan, normalized)
}

/// Run the parse and classify stages on an already normalized number.
///
/// # Errors
///
/// Returns the parse stage's `ParseError` unchanged.
pub fn classify_normalized(
    plan: &dyn NumberingPlan,
    normalized: NormalizedNumber,
) -> ParseResult<ClassificationResult> {
    let parsed = parse(plan, &normalized)?;
    let mut result = classify_parsed(plan, &parsed);
    result.normalized = Some(normalized);
    Ok(result)
}
