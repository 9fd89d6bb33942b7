// crates/variant-assert-testkit/src/record.rs
// ============================================================================
// Module: Assertion Records
// Description: Recorded outcomes and the aggregate report.
// Purpose: Give tests and audit logs a stable, serializable view of outcomes.
// Dependencies: crate::error, serde, serde_json
// ============================================================================

//! ## Overview
//! Every call into a [`crate::Recorder`] yields one [`AssertionRecord`]. The
//! [`Report`] aggregates them and converts into a `Result` for `?`-style tests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::error::HarnessError;

// ============================================================================
// SECTION: Labels
// ============================================================================

/// Assertion primitive that produced a record.
///
/// # Invariants
/// - Variants are stable for serialized audit records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Truthiness check (`ok`).
    Ok,
    /// Falsiness check (`not_ok`).
    NotOk,
    /// Unconditional failure.
    Fail,
    /// Structural equality.
    Equal,
    /// Structural inequality.
    NotEqual,
    /// Reference identity.
    Is,
    /// Reference non-identity.
    IsNot,
    /// Scope bookkeeping, such as a rejected nested test.
    Subtest,
}

impl Operator {
    /// Returns a stable label for the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NotOk => "not_ok",
            Self::Fail => "fail",
            Self::Equal => "equal",
            Self::NotEqual => "not_equal",
            Self::Is => "is",
            Self::IsNot => "is_not",
            Self::Subtest => "subtest",
        }
    }

    /// Description used when the caller does not supply one.
    #[must_use]
    pub const fn default_description(self) -> &'static str {
        match self {
            Self::Ok => "should be truthy",
            Self::NotOk => "should be falsy",
            Self::Fail => "fail called",
            Self::Equal => "should be equivalent",
            Self::NotEqual => "should not be equivalent",
            Self::Is => "should be the same",
            Self::IsNot => "should not be the same",
            Self::Subtest => "subtest",
        }
    }
}

/// Pass/fail outcome of a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The assertion held.
    Pass,
    /// The assertion did not hold.
    Fail,
}

impl Outcome {
    /// Returns `Pass` when `condition` is true.
    #[must_use]
    pub const fn from_condition(condition: bool) -> Self {
        if condition { Self::Pass } else { Self::Fail }
    }

    /// Returns true for `Pass`.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

// ============================================================================
// SECTION: Records
// ============================================================================

/// One recorded assertion.
///
/// # Invariants
/// - `scope` joins nested test descriptions with `" > "`; empty at the root.
/// - `actual`/`expected` are only set by comparison operators, and only when
///   the compared values serialize to JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssertionRecord {
    /// Position of the record in the recorder, starting at 1.
    pub sequence: u64,
    /// Nested test path the record was made under.
    pub scope: String,
    /// Primitive that produced the record.
    pub operator: Operator,
    /// Pass or fail.
    pub outcome: Outcome,
    /// Caller description or the operator default.
    pub message: String,
    /// Observed value for comparison operators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<Value>,
    /// Expected value for comparison operators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Aggregate outcome of a recorder.
///
/// # Invariants
/// - `passed + failed` counts every record, including passing records that
///   were dropped from `records` by `keep_passing = false`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Report {
    /// Number of passing assertions.
    pub passed: usize,
    /// Number of failing assertions.
    pub failed: usize,
    /// Number of audit events the sink failed to write.
    pub audit_errors: usize,
    /// Retained records in recording order.
    pub records: Vec<AssertionRecord>,
}

impl Report {
    /// Total number of assertions made.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Returns true when no assertion failed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Iterates over the failing records.
    pub fn failures(&self) -> impl Iterator<Item = &AssertionRecord> {
        self.records.iter().filter(|record| !record.outcome.is_pass())
    }

    /// Returns the messages of every retained record, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.message.as_str()).collect()
    }

    /// Converts the report into a `Result` for `?`-style tests.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::AssertionsFailed`] when any assertion failed.
    pub fn into_result(self) -> Result<Self, HarnessError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(HarnessError::AssertionsFailed {
                failed: self.failed,
                total: self.total(),
            })
        }
    }
}
