// crates/variant-assert/tests/support/mocks.rs
// ============================================================================
// Module: Mock Assertions
// Description: In-memory assertion collector for adapter tests.
// ============================================================================
//! ## Overview
//! `MockAssertions` records every `ok`/`fail` call in order so tests can
//! count outcomes and compare messages.

#![allow(
    dead_code,
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Shared mocks are included by several test binaries."
)]

use variant_assert::Assertions;

// ========================================================================
// Mock Entries
// ========================================================================

/// One recorded outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A passing `ok` call.
    Pass(String),
    /// A failing `ok` call or an explicit `fail`.
    Fail(String),
}

// ========================================================================
// Mock Collector
// ========================================================================

/// Ordered collector of assertion outcomes.
#[derive(Debug, Default)]
pub struct MockAssertions {
    /// Outcomes in call order.
    pub entries: Vec<Entry>,
}

impl MockAssertions {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of passing entries.
    pub fn passes(&self) -> usize {
        self.entries.iter().filter(|entry| matches!(entry, Entry::Pass(_))).count()
    }

    /// Number of failing entries.
    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|entry| matches!(entry, Entry::Fail(_))).count()
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the only entry, if exactly one was recorded.
    pub fn single(&self) -> Option<&Entry> {
        match self.entries.as_slice() {
            [entry] => Some(entry),
            _ => None,
        }
    }
}

impl Assertions for MockAssertions {
    fn ok(&mut self, condition: bool, message: &str) {
        let message = message.to_string();
        self.entries.push(if condition { Entry::Pass(message) } else { Entry::Fail(message) });
    }

    fn fail(&mut self, message: &str) {
        self.entries.push(Entry::Fail(message.to_string()));
    }
}
