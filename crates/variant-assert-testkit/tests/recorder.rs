// crates/variant-assert-testkit/tests/recorder.rs
// ============================================================================
// Module: Recorder Tests
// Description: Scope, retention, and comparison behavior of `Recorder`.
// Purpose: Ensure records carry correct labels and counts stay consistent.
// Dependencies: serde_json, variant_assert, variant_assert_testkit
// ============================================================================
//! ## Overview
//! Covers nested scopes, the depth limit, passing-record retention, and the
//! JSON capture of compared values.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use serde_json::json;
use support::TestResult;
use support::ensure;
use variant_assert::Assertions;
use variant_assert::assert_some;
use variant_assert_testkit::Operator;
use variant_assert_testkit::Outcome;
use variant_assert_testkit::Recorder;
use variant_assert_testkit::RecorderConfig;

// ============================================================================
// SECTION: Scopes
// ============================================================================

#[test]
fn test_nested_scopes_label_records() -> TestResult {
    let mut t = Recorder::new(RecorderConfig::default());
    let mut inner_depth = 0;
    t.ok(true, "root");
    t.test("outer", |t| {
        t.ok(true, "in outer");
        t.test("inner", |t| {
            inner_depth = t.depth();
            t.ok(true, "in inner");
        });
        t.ok(true, "back in outer");
    });

    let scopes: Vec<&str> = t.report().records.iter().map(|record| record.scope.as_str()).collect();
    ensure(
        scopes == vec!["", "outer", "outer > inner", "outer"],
        format!("Unexpected scopes: {scopes:?}"),
    )?;
    ensure(inner_depth == 2, "Expected depth two inside inner")?;
    ensure(t.depth() == 0, "Expected scopes to unwind")?;
    Ok(())
}

#[test]
fn test_depth_limit_skips_body() -> TestResult {
    let mut t = Recorder::new(RecorderConfig {
        max_depth: 1,
        keep_passing: true,
    });
    let mut inner_ran = false;
    t.test("level one", |t| {
        t.test("level two", |t| {
            inner_ran = true;
            t.ok(true, "unreachable");
        });
    });

    ensure(!inner_ran, "Expected the over-deep body to be skipped")?;
    let report = t.into_report();
    ensure(report.failed == 1 && report.passed == 0, "Expected one depth failure")?;
    let record = &report.records[0];
    ensure(record.operator == Operator::Subtest, "Expected a subtest record")?;
    ensure(record.scope == "level one", "Expected the failure in the enclosing scope")?;
    ensure(
        record.message == "level two: nesting exceeds limit of 1",
        format!("Unexpected depth message: {}", record.message),
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Retention
// ============================================================================

#[test]
fn test_keep_passing_false_retains_only_failures() -> TestResult {
    let mut t = Recorder::new(RecorderConfig {
        keep_passing: false,
        ..RecorderConfig::default()
    });
    t.ok(true, "pass one");
    t.fail("boom");
    t.ok(true, "pass two");

    let report = t.report();
    ensure(report.passed == 2, "Expected passing outcomes to be counted")?;
    ensure(report.failed == 1, "Expected the failure to be counted")?;
    ensure(report.messages() == vec!["boom"], "Expected only the failure to be retained")?;
    ensure(report.records[0].sequence == 2, "Expected sequence numbers to count dropped records")?;
    Ok(())
}

#[test]
fn test_sequence_numbers_are_monotonic() -> TestResult {
    let mut t = Recorder::new(RecorderConfig::default());
    for index in 0 .. 5 {
        t.ok(index % 2 == 0, "alternating");
    }

    let sequences: Vec<u64> = t.report().records.iter().map(|record| record.sequence).collect();
    ensure(sequences == vec![1, 2, 3, 4, 5], "Expected sequences to start at one")?;
    ensure(t.report().failed == 2, "Expected odd indices to fail")?;
    Ok(())
}

// ============================================================================
// SECTION: Comparisons
// ============================================================================

#[test]
fn test_equal_captures_operands() -> TestResult {
    let mut t = Recorder::new(RecorderConfig::default());
    t.equal(&json!({ "a": 1 }), &json!({ "a": 2 }), Some("objects match"));

    let record = &t.report().records[0];
    ensure(record.outcome == Outcome::Fail, "Expected unequal objects to fail")?;
    ensure(record.actual == Some(json!({ "a": 1 })), "Expected actual operand captured")?;
    ensure(record.expected == Some(json!({ "a": 2 })), "Expected expected operand captured")?;
    Ok(())
}

#[test]
fn test_equal_on_unsized_str() -> TestResult {
    let mut t = Recorder::new(RecorderConfig::default());
    t.equal("abc", "abc", None);
    t.not_equal("abc", "abd", None);

    ensure(t.report().is_success(), "Expected str comparisons to pass")?;
    ensure(
        t.report().records[0].actual == Some(json!("abc")),
        "Expected the str operand to be captured as JSON",
    )?;
    Ok(())
}

#[test]
fn test_identity_compares_addresses() -> TestResult {
    let mut t = Recorder::new(RecorderConfig::default());
    let first = vec![1, 2];
    let second = first.clone();
    t.is(&first, &first, None);
    t.is(&first, &second, None);
    t.is_not(&first, &second, None);

    let outcomes: Vec<Outcome> = t.report().records.iter().map(|record| record.outcome).collect();
    ensure(
        outcomes == vec![Outcome::Pass, Outcome::Fail, Outcome::Pass],
        "Expected identity to ignore structural equality",
    )?;
    ensure(t.report().records[0].actual.is_none(), "Expected identity records to omit operands")?;
    Ok(())
}

#[test]
fn test_adapter_checks_run_in_current_scope() -> TestResult {
    let mut t = Recorder::new(RecorderConfig::default());
    t.test("options", |t| {
        assert_some(t, Some(3), |t, value| t.equal(&value, &3, Some("three")));
    });

    let record = &t.report().records[0];
    ensure(record.scope == "options", "Expected the check to inherit the scope")?;
    ensure(record.operator == Operator::Equal, "Expected the check's own operator")?;
    Ok(())
}

#[test]
fn test_report_serializes_labels() -> TestResult {
    let mut t = Recorder::new(RecorderConfig::default());
    t.not_ok(true, Some("should be false"));

    let value = serde_json::to_value(t.report())?;
    ensure(value["failed"] == 1, "Expected failed count in JSON")?;
    ensure(value["records"][0]["operator"] == "not_ok", "Expected snake_case operator")?;
    ensure(value["records"][0]["outcome"] == "fail", "Expected snake_case outcome")?;
    ensure(value["records"][0].get("actual").is_none(), "Expected absent operands to be omitted")?;
    Ok(())
}
