// crates/variant-assert/src/lib.rs
// ============================================================================
// Module: Variant Assert Root
// Description: Public API surface for the variant assertion adapter.
// Purpose: Wire together the assertion contract, adapters, and mismatch types.
// Dependencies: crate::{adapter, assertions, ext, mismatch}
// ============================================================================

//! ## Overview
//! Adapts any pass/fail assertion collector to `Option` and `Result` values.
//! Each adapter performs a single two-way match: the expected variant either
//! hands its payload to a caller-supplied check, or the mismatch is reported
//! once through [`Assertions::fail`]. Adapters never panic and never return
//! errors, so later assertions in the same test keep running.
//!
//! ```
//! use variant_assert::Assertions;
//! use variant_assert::assert_some;
//!
//! #[derive(Default)]
//! struct Tally {
//!     passed: usize,
//!     failed: usize,
//! }
//!
//! impl Assertions for Tally {
//!     fn ok(&mut self, condition: bool, _message: &str) {
//!         if condition { self.passed += 1 } else { self.failed += 1 }
//!     }
//!
//!     fn fail(&mut self, _message: &str) {
//!         self.failed += 1;
//!     }
//! }
//!
//! let mut tally = Tally::default();
//! assert_some(&mut tally, Some(42), |t, value| t.ok(value == 42, "answer"));
//! assert_eq!((tally.passed, tally.failed), (1, 0));
//! ```

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod adapter;
pub mod assertions;
pub mod ext;
pub mod mismatch;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use adapter::assert_none;
pub use adapter::assert_result_error;
pub use adapter::assert_result_ok;
pub use adapter::assert_some;
pub use adapter::ignore_value;
pub use assertions::Assertions;
pub use ext::VariantAssertExt;
pub use mismatch::IGNORED_VALUE_MESSAGE;
pub use mismatch::Variant;
pub use mismatch::VariantMismatch;
