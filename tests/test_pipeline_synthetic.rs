//! Pipeline tests against a synthetic numbering plan.
//!
//! These tests pin down the pipeline's own behavior (stage ordering, error
//! propagation, totality of classification) independently of real-world
//! numbering data.

mod mocks;

use mocks::{MockNumberingPlan, TEST_CODE};
use phone_intel::domain::{CallingCode, NormalizedNumber};
use phone_intel::error::ParseError;
use phone_intel::models::LineType;
use phone_intel::pipeline::{self, classify, classify_parsed, MAX_DIGITS};
use phone_intel::plan::NumberingPlan;

fn testland() -> CallingCode {
    CallingCode::new(TEST_CODE).unwrap()
}

#[test]
fn test_mobile_number_classified() {
    let plan = MockNumberingPlan::new();
    let result = classify(&plan, "+999 712 345", testland()).unwrap();

    assert!(result.is_valid);
    assert!(result.is_possible);
    assert_eq!(result.line_type, LineType::Mobile);
    assert_eq!(result.country_label, "Testland");
    assert_eq!(result.carrier_label, "TestCell");
    assert_eq!(result.time_zones, vec!["Etc/UTC".to_string()]);
    assert_eq!(result.formats.e164, "+999712345");
    assert_eq!(result.formats.rfc3966, "tel:+999-712345");
    assert!(!result.default_code_applied());
}

#[test]
fn test_default_code_applied_for_national_input() {
    let plan = MockNumberingPlan::new();
    let result = classify(&plan, "212-345", testland()).unwrap();

    assert!(result.default_code_applied());
    assert_eq!(result.line_type, LineType::FixedLine);
    assert_eq!(result.carrier_label, "");
    assert_eq!(
        result.normalized.as_ref().map(NormalizedNumber::as_str),
        Some("+999212345")
    );
}

#[test]
fn test_unassigned_number_is_possible_but_invalid() {
    let plan = MockNumberingPlan::new();
    let result = classify(&plan, "+999512345", testland()).unwrap();

    assert!(!result.is_valid);
    assert!(result.is_possible);
    assert_eq!(result.line_type, LineType::Unknown);
}

#[test]
fn test_wrong_length_is_neither_valid_nor_possible() {
    let plan = MockNumberingPlan::new();
    let result = classify(&plan, "+99971234", testland()).unwrap();

    assert!(!result.is_valid);
    assert!(!result.is_possible);
    assert_eq!(result.country_or_unknown(), "Testland");
    assert_eq!(result.carrier_or_unknown(), "Unknown");
}

#[test]
fn test_valid_forces_possible() {
    // A plan whose length table disagrees with its ranges
    let plan = MockNumberingPlan::with_possible_override(false);
    let result = classify(&plan, "+999712345", testland()).unwrap();

    assert!(result.is_valid);
    assert!(result.is_possible);
}

#[test]
fn test_possible_not_consulted_when_valid() {
    let plan = MockNumberingPlan::new();
    classify(&plan, "+999712345", testland()).unwrap();

    assert_eq!(plan.get_call_count("is_valid"), 1);
    assert_eq!(plan.get_call_count("is_possible"), 0);
}

#[test]
fn test_plan_parse_error_propagates_unchanged() {
    let plan = MockNumberingPlan::new();

    let result = classify(&plan, "+44 20 7946 0958", testland());
    assert!(matches!(result, Err(ParseError::Rejected { .. })));

    let result = classify(&plan, "+9991", testland());
    assert!(matches!(
        result,
        Err(ParseError::TooShort {
            calling_code: 999,
            ..
        })
    ));
}

#[test]
fn test_digitless_input_never_reaches_plan() {
    let plan = MockNumberingPlan::new();

    let result = classify(&plan, "+ ( ) -", testland());
    assert!(matches!(result, Err(ParseError::NoNumber(_))));
    assert_eq!(plan.get_call_count("parse"), 0);
}

#[test]
fn test_overlong_input_never_reaches_plan() {
    let plan = MockNumberingPlan::new();
    let raw = format!("+999{}", "7".repeat(MAX_DIGITS));

    let result = classify(&plan, &raw, testland());
    assert!(matches!(result, Err(ParseError::TooLong(_))));
    assert_eq!(plan.get_call_count("parse"), 0);
}

#[test]
fn test_classify_parsed_is_total() {
    let plan = MockNumberingPlan::new();
    let normalized = NormalizedNumber::new("+99900").unwrap();
    let parsed = pipeline::parse(&plan, &normalized).unwrap();

    let result = classify_parsed(&plan, &parsed);
    assert!(result.normalized.is_none());
    assert!(!result.is_valid);
    assert_eq!(result.line_type, LineType::Unknown);
    assert_eq!(result.formats.national, "000");
}

#[test]
fn test_plan_is_shareable_across_threads() {
    let plan: std::sync::Arc<dyn NumberingPlan> = std::sync::Arc::new(MockNumberingPlan::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let plan = plan.clone();
            std::thread::spawn(move || {
                let raw = format!("+99971234{}", i);
                classify(plan.as_ref(), &raw, CallingCode::new(TEST_CODE).unwrap())
                    .unwrap()
                    .formats
                    .e164
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("+99971234{}", i));
    }
}
