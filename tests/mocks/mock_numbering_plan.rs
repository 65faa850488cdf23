use phone_intel::domain::{CallingCode, NormalizedNumber, ParsedNumber};
use phone_intel::error::{ParseError, ParseResult};
use phone_intel::models::{LineType, NumberFormat};
use phone_intel::plan::NumberingPlan;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Calling code of the synthetic "Testland" plan.
pub const TEST_CODE: u16 = 999;

/// National numbers in Testland are exactly this long.
pub const TEST_LENGTH: usize = 6;

/// Mock numbering plan for testing.
///
/// Knows a single calling code (+999). Six-digit national numbers starting
/// with 7 are mobile on "TestCell", those starting with 2 are fixed lines;
/// any other six-digit number is possible but unassigned.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockNumberingPlan {
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    possible_override: Option<bool>,
}

#[allow(dead_code)]
impl MockNumberingPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// A plan whose `is_possible` always answers `value`, regardless of length.
    pub fn with_possible_override(value: bool) -> Self {
        Self {
            possible_override: Some(value),
            ..Self::default()
        }
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn assigned(number: &ParsedNumber) -> bool {
        let national = number.national_number();
        national.len() == TEST_LENGTH && (national.starts_with('7') || national.starts_with('2'))
    }
}

impl NumberingPlan for MockNumberingPlan {
    fn parse(&self, number: &NormalizedNumber) -> ParseResult<ParsedNumber> {
        self.track_call("parse");

        let national = number
            .digits()
            .strip_prefix("999")
            .ok_or_else(|| ParseError::Rejected {
                input: number.to_string(),
                reason: "unknown calling code".to_string(),
            })?;
        if national.len() < 2 {
            return Err(ParseError::TooShort {
                calling_code: TEST_CODE,
                input: number.to_string(),
            });
        }

        let code = CallingCode::new(TEST_CODE).unwrap();
        Ok(ParsedNumber::new(code, national, Some("XT".to_string())).unwrap())
    }

    fn is_valid(&self, number: &ParsedNumber) -> bool {
        self.track_call("is_valid");
        Self::assigned(number)
    }

    fn is_possible(&self, number: &ParsedNumber) -> bool {
        self.track_call("is_possible");
        self.possible_override
            .unwrap_or(number.national_number().len() == TEST_LENGTH)
    }

    fn line_type(&self, number: &ParsedNumber) -> LineType {
        if !Self::assigned(number) {
            return LineType::Unknown;
        }
        if number.national_number().starts_with('7') {
            LineType::Mobile
        } else {
            LineType::FixedLine
        }
    }

    fn region_label(&self, _number: &ParsedNumber) -> String {
        "Testland".to_string()
    }

    fn carrier_label(&self, number: &ParsedNumber) -> String {
        if Self::assigned(number) && number.national_number().starts_with('7') {
            "TestCell".to_string()
        } else {
            String::new()
        }
    }

    fn time_zones(&self, _number: &ParsedNumber) -> Vec<String> {
        vec!["Etc/UTC".to_string()]
    }

    fn format(&self, number: &ParsedNumber, format: NumberFormat) -> String {
        let national = number.national_number();
        match format {
            NumberFormat::E164 => number.e164(),
            NumberFormat::International => format!("+999 {}", national),
            NumberFormat::National => format!("0{}", national),
            NumberFormat::Rfc3966 => format!("tel:+999-{}", national),
        }
    }

    fn version(&self) -> String {
        "mock-1".to_string()
    }
}
