// crates/variant-assert/src/adapter.rs
// ============================================================================
// Module: Variant Adapters
// Description: Assertion helpers for `Option` and `Result` values.
// Purpose: Translate variant presence into a single pass/fail report.
// Dependencies: crate::{assertions, mismatch}
// ============================================================================

//! ## Overview
//! Every adapter records exactly one outcome: either a direct pass/fail, or
//! whatever the caller's check records for the unwrapped payload. The two
//! paths are exclusive, so a check is never invoked after a mismatch.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::assertions::Assertions;
use crate::mismatch::IGNORED_VALUE_MESSAGE;
use crate::mismatch::VariantMismatch;

// ============================================================================
// SECTION: Value Adapters
// ============================================================================

/// Records a passing assertion regardless of `value`.
///
/// Usable as a check function when only the variant matters:
/// `assert_result_error(t, result, ignore_value)`.
#[allow(clippy::needless_pass_by_value, reason = "Signature must match by-value check functions.")]
pub fn ignore_value<A, T>(assertions: &mut A, _value: T)
where
    A: Assertions + ?Sized,
{
    assertions.ok(true, IGNORED_VALUE_MESSAGE);
}

// ============================================================================
// SECTION: Option Adapters
// ============================================================================

/// Asserts that `actual` is `None`.
///
/// Falls back to [`VariantMismatch::ExpectedNone`]'s message when `message`
/// is not supplied. The message is attached to the pass as well as the fail.
pub fn assert_none<A, T>(assertions: &mut A, actual: &Option<T>, message: Option<&str>)
where
    A: Assertions + ?Sized,
{
    let message = message.unwrap_or(VariantMismatch::ExpectedNone.message());
    assertions.ok(actual.is_none(), message);
}

/// Hands the payload of `Some` to `check`, or fails once on `None`.
pub fn assert_some<A, T, F>(assertions: &mut A, actual: Option<T>, check: F)
where
    A: Assertions + ?Sized,
    F: FnOnce(&mut A, T),
{
    match actual {
        Some(value) => check(assertions, value),
        None => assertions.fail(VariantMismatch::ExpectedSome.message()),
    }
}

// ============================================================================
// SECTION: Result Adapters
// ============================================================================

/// Hands the error of `Err` to `check`, or fails once on `Ok`.
pub fn assert_result_error<A, T, E, F>(assertions: &mut A, actual: Result<T, E>, check: F)
where
    A: Assertions + ?Sized,
    F: FnOnce(&mut A, E),
{
    match actual {
        Err(error) => check(assertions, error),
        Ok(_) => assertions.fail(VariantMismatch::ExpectedErr.message()),
    }
}

/// Hands the value of `Ok` to `check`, or fails once on `Err`.
pub fn assert_result_ok<A, T, E, F>(assertions: &mut A, actual: Result<T, E>, check: F)
where
    A: Assertions + ?Sized,
    F: FnOnce(&mut A, T),
{
    match actual {
        Ok(value) => check(assertions, value),
        Err(_) => assertions.fail(VariantMismatch::ExpectedOk.message()),
    }
}
