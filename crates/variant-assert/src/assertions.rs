// crates/variant-assert/src/assertions.rs
// ============================================================================
// Module: Assertion Contract
// Description: Minimal pass/fail interface consumed by the adapters.
// Purpose: Decouple adapters from any particular test harness.
// Dependencies: std
// ============================================================================

//! ## Overview
//! [`Assertions`] is the only capability the adapters need from a harness: a
//! way to record a boolean check and a way to record an unconditional failure.
//! Bookkeeping (counts, reporting, exit status) stays with the implementor.

// ============================================================================
// SECTION: Assertion Trait
// ============================================================================

/// Pass/fail collector supplied by the caller's test harness.
///
/// Implementations decide how outcomes are stored. Adapters borrow the
/// collector mutably for a single call and never retain it.
pub trait Assertions {
    /// Records a check that passes when `condition` is true.
    fn ok(&mut self, condition: bool, message: &str);

    /// Records an unconditional failure.
    fn fail(&mut self, message: &str);
}

impl<A: Assertions + ?Sized> Assertions for Box<A> {
    fn ok(&mut self, condition: bool, message: &str) {
        (**self).ok(condition, message);
    }

    fn fail(&mut self, message: &str) {
        (**self).fail(message);
    }
}
