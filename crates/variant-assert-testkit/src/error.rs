// crates/variant-assert-testkit/src/error.rs
// ============================================================================
// Module: Harness Errors
// Description: Top-level error type for the testkit.
// Purpose: Surface failed reports and setup failures through one enum.
// Dependencies: crate::{audit, config}, thiserror
// ============================================================================

//! ## Overview
//! Assertion failures are never errors while recording; they only become a
//! [`HarnessError`] when a finished report is converted with
//! [`crate::Report::into_result`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::audit::AuditError;
use crate::config::ConfigError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors emitted by the testkit.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A finished report contained failures.
    #[error("{failed} of {total} assertions failed")]
    AssertionsFailed {
        /// Number of failing assertions.
        failed: usize,
        /// Number of assertions made.
        total: usize,
    },
    /// Configuration could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The configured audit sink could not be opened.
    #[error(transparent)]
    Audit(#[from] AuditError),
}
