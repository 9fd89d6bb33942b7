// crates/variant-assert-testkit/src/recorder.rs
// ============================================================================
// Module: Recording Assertions
// Description: In-process assertion collector with nested scopes.
// Purpose: Provide a concrete `Assertions` implementation for adapter tests.
// Dependencies: crate::{audit, config, record}, serde, serde_json, variant-assert
// ============================================================================

//! ## Overview
//! [`Recorder`] implements [`Assertions`] and adds the comparison primitives
//! used alongside the variant adapters (`equal`, `is`, `not_ok`, ...). Outcomes
//! are recorded, never raised: a failing assertion does not stop the test
//! body. Nested [`Recorder::test`] scopes label records with their path.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use variant_assert::Assertions;

use crate::audit::AuditEvent;
use crate::audit::AuditSink;
use crate::audit::NoopAuditSink;
use crate::config::RecorderConfig;
use crate::record::AssertionRecord;
use crate::record::Operator;
use crate::record::Outcome;
use crate::record::Report;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Separator between nested scope descriptions.
pub const SCOPE_SEPARATOR: &str = " > ";

// ============================================================================
// SECTION: Recorder
// ============================================================================

/// Assertion collector backing the testkit.
pub struct Recorder {
    /// Behavior settings.
    config: RecorderConfig,
    /// Destination for audit events.
    sink: Arc<dyn AuditSink>,
    /// Active nested test descriptions, outermost first.
    scope: Vec<String>,
    /// Number of records made so far.
    sequence: u64,
    /// Aggregated outcomes.
    report: Report,
}

impl Recorder {
    /// Creates a recorder that discards audit events.
    #[must_use]
    pub fn new(config: RecorderConfig) -> Self {
        Self::with_sink(config, Arc::new(NoopAuditSink))
    }

    /// Creates a recorder mirroring every outcome to `sink`.
    #[must_use]
    pub fn with_sink(config: RecorderConfig, sink: Arc<dyn AuditSink>) -> Self {
        Self {
            config,
            sink,
            scope: Vec::new(),
            sequence: 0,
            report: Report::default(),
        }
    }

    /// Returns the active scope path.
    #[must_use]
    pub fn scope(&self) -> String {
        self.scope.join(SCOPE_SEPARATOR)
    }

    /// Returns the number of active nested scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scope.len()
    }

    /// Returns the outcomes recorded so far.
    #[must_use]
    pub const fn report(&self) -> &Report {
        &self.report
    }

    /// Consumes the recorder and returns its report.
    #[must_use]
    pub fn into_report(self) -> Report {
        self.report
    }

    // ------------------------------------------------------------------------
    // Scopes
    // ------------------------------------------------------------------------

    /// Runs `body` inside a nested scope named `description`.
    ///
    /// Past `max_depth` the body is skipped and one failure is recorded.
    pub fn test<F>(&mut self, description: &str, body: F)
    where
        F: FnOnce(&mut Self),
    {
        if self.scope.len() >= self.config.max_depth {
            let message =
                format!("{description}: nesting exceeds limit of {}", self.config.max_depth);
            self.record(Operator::Subtest, false, &message, None, None);
            return;
        }
        self.scope.push(description.to_string());
        body(self);
        self.scope.pop();
    }

    // ------------------------------------------------------------------------
    // Primitives
    // ------------------------------------------------------------------------

    /// Passes when `condition` is false.
    pub fn not_ok(&mut self, condition: bool, description: Option<&str>) {
        let message = description.unwrap_or(Operator::NotOk.default_description());
        self.record(Operator::NotOk, !condition, message, None, None);
    }

    /// Passes when `actual == expected`.
    pub fn equal<T>(&mut self, actual: &T, expected: &T, description: Option<&str>)
    where
        T: PartialEq + Serialize + ?Sized,
    {
        self.compare(Operator::Equal, actual == expected, actual, expected, description);
    }

    /// Passes when `actual != expected`.
    pub fn not_equal<T>(&mut self, actual: &T, expected: &T, description: Option<&str>)
    where
        T: PartialEq + Serialize + ?Sized,
    {
        self.compare(Operator::NotEqual, actual != expected, actual, expected, description);
    }

    /// Passes when both references point at the same value.
    pub fn is<T: ?Sized>(&mut self, actual: &T, expected: &T, description: Option<&str>) {
        let message = description.unwrap_or(Operator::Is.default_description());
        self.record(Operator::Is, std::ptr::eq(actual, expected), message, None, None);
    }

    /// Passes when the references point at different values.
    pub fn is_not<T: ?Sized>(&mut self, actual: &T, expected: &T, description: Option<&str>) {
        let message = description.unwrap_or(Operator::IsNot.default_description());
        self.record(Operator::IsNot, !std::ptr::eq(actual, expected), message, None, None);
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    /// Records a comparison, capturing both operands as JSON when possible.
    fn compare<T>(
        &mut self,
        operator: Operator,
        passed: bool,
        actual: &T,
        expected: &T,
        description: Option<&str>,
    ) where
        T: Serialize + ?Sized,
    {
        let message = description.unwrap_or(operator.default_description());
        let actual = serde_json::to_value(actual).ok();
        let expected = serde_json::to_value(expected).ok();
        self.record(operator, passed, message, actual, expected);
    }

    /// Appends one record, updates counts, and emits the audit event.
    fn record(
        &mut self,
        operator: Operator,
        passed: bool,
        message: &str,
        actual: Option<Value>,
        expected: Option<Value>,
    ) {
        self.sequence += 1;
        let outcome = Outcome::from_condition(passed);
        let record = AssertionRecord {
            sequence: self.sequence,
            scope: self.scope(),
            operator,
            outcome,
            message: message.to_string(),
            actual,
            expected,
        };

        if self.sink.record(&AuditEvent::from(&record)).is_err() {
            self.report.audit_errors += 1;
        }

        if outcome.is_pass() {
            self.report.passed += 1;
            if !self.config.keep_passing {
                return;
            }
        } else {
            self.report.failed += 1;
        }
        self.report.records.push(record);
    }
}

// ============================================================================
// SECTION: Assertion Contract
// ============================================================================

impl Assertions for Recorder {
    fn ok(&mut self, condition: bool, message: &str) {
        self.record(Operator::Ok, condition, message, None, None);
    }

    fn fail(&mut self, message: &str) {
        self.record(Operator::Fail, false, message, None, None);
    }
}
