//! Parse stage: normalized number to calling code + national number.

use crate::domain::{NormalizedNumber, ParsedNumber};
use crate::error::{ParseError, ParseResult};
use crate::plan::NumberingPlan;

/// Calling code (3) plus the longest national number any plan allows (17).
pub const MAX_DIGITS: usize = 20;

/// Decompose a normalized number against a numbering plan.
///
/// Rejects numbers with no digits or more than [`MAX_DIGITS`] digits before
/// the plan is consulted; everything else is the plan's call.
///
/// # Errors
///
/// Returns `ParseError` when the number cannot be split into a calling code
/// and a national significant number.
pub fn parse(plan: &dyn NumberingPlan, number: &NormalizedNumber) -> ParseResult<ParsedNumber> {
    let digits = number.digits();

    if digits.is_empty() {
        return Err(ParseError::NoNumber(number.to_string()));
    }
    if digits.len() > MAX_DIGITS {
        return Err(ParseError::TooLong(number.to_string()));
    }

    let parsed = plan.parse(number)?;
    tracing::debug!(
        calling_code = parsed.calling_code().value(),
        national_number = %parsed.national_number(),
        region = ?parsed.region(),
        "Parsed number"
    );
    Ok(parsed)
}
