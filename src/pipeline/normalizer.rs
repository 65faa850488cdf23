//! Normalize stage: raw input to `+<digits>`.

use crate::domain::{CallingCode, NormalizedNumber};
use once_cell::sync::Lazy;
use regex::Regex;

/// Everything that is neither an ASCII digit nor a plus sign.
static STRIP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9+]").expect("Failed to compile strip regex"));

/// Clean a raw phone number string.
///
/// Strips every character that is not an ASCII digit, keeping a `+` only when
/// it comes before the first digit. When no such `+` exists the default
/// calling code is prepended and a warning is logged.
///
/// Never fails: garbage in yields a (possibly digit-less) normalized number
/// that the parse stage will reject.
///
/// # Example
///
/// ```
/// use phone_intel::domain::CallingCode;
/// use phone_intel::pipeline::normalize;
///
/// let code = CallingCode::new(91).unwrap();
/// assert_eq!(normalize("98765 43210", code).as_str(), "+919876543210");
/// assert_eq!(normalize("+1 (415) 555-2671", code).as_str(), "+14155552671");
/// ```
pub fn normalize(raw: &str, default_code: CallingCode) -> NormalizedNumber {
    if let Some(normalized) = normalize_explicit(raw) {
        return normalized;
    }

    tracing::warn!(
        default_code = %default_code,
        "No country code in input, assuming default"
    );
    let digits = clean_digits(raw);
    NormalizedNumber::from_cleaned(format!("+{}{}", default_code.value(), digits), true)
}

/// Normalize input that carries its own calling code.
///
/// Returns `None` when there is no `+` before the first digit, i.e. when
/// [`normalize`] would have to assume a default.
pub fn normalize_explicit(raw: &str) -> Option<NormalizedNumber> {
    if !has_leading_plus(raw) {
        return None;
    }
    Some(NormalizedNumber::from_cleaned(
        format!("+{}", clean_digits(raw)),
        false,
    ))
}

/// Whether a `+` appears before the first digit.
pub fn has_leading_plus(raw: &str) -> bool {
    STRIP_PATTERN.replace_all(raw.trim(), "").starts_with('+')
}

fn clean_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}
