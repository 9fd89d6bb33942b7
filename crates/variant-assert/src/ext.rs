// crates/variant-assert/src/ext.rs
// ============================================================================
// Module: Method-Style Adapters
// Description: Extension trait exposing the adapters as collector methods.
// Purpose: Let tests write `t.some(value, ..)` instead of free-function calls.
// Dependencies: crate::{adapter, assertions}
// ============================================================================

//! ## Overview
//! [`VariantAssertExt`] is blanket-implemented for every [`Assertions`]
//! collector. Each method forwards to the matching free function in
//! [`crate::adapter`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::adapter;
use crate::assertions::Assertions;

// ============================================================================
// SECTION: Extension Trait
// ============================================================================

/// Method-call sugar over the variant adapters.
pub trait VariantAssertExt: Assertions {
    /// See [`adapter::ignore_value`].
    fn ignore_value<T>(&mut self, value: T) {
        adapter::ignore_value(self, value);
    }

    /// See [`adapter::assert_none`].
    fn none<T>(&mut self, actual: &Option<T>, message: Option<&str>) {
        adapter::assert_none(self, actual, message);
    }

    /// See [`adapter::assert_some`].
    fn some<T, F>(&mut self, actual: Option<T>, check: F)
    where
        F: FnOnce(&mut Self, T),
    {
        adapter::assert_some(self, actual, check);
    }

    /// See [`adapter::assert_result_ok`].
    fn result_ok<T, E, F>(&mut self, actual: Result<T, E>, check: F)
    where
        F: FnOnce(&mut Self, T),
    {
        adapter::assert_result_ok(self, actual, check);
    }

    /// See [`adapter::assert_result_error`].
    fn result_err<T, E, F>(&mut self, actual: Result<T, E>, check: F)
    where
        F: FnOnce(&mut Self, E),
    {
        adapter::assert_result_error(self, actual, check);
    }
}

impl<A: Assertions + ?Sized> VariantAssertExt for A {}
