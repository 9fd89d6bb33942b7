// crates/variant-assert/src/mismatch.rs
// ============================================================================
// Module: Variant Mismatch
// Description: The single failure kind reported by the adapters.
// Purpose: Keep default failure messages stable and machine-readable.
// Dependencies: serde::{Deserialize, Serialize}, thiserror
// ============================================================================

//! ## Overview
//! A mismatch means the value held a different variant than the assertion
//! expected. The rendered messages are part of the public contract; harnesses
//! and snapshot tests match on them verbatim.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Message recorded by [`crate::ignore_value`].
pub const IGNORED_VALUE_MESSAGE: &str = "value is inconsequential";

// ============================================================================
// SECTION: Variants
// ============================================================================

/// Variants of the two supported sum types.
///
/// # Invariants
/// - Variants are stable for serialized audit records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// `Option::None`.
    None,
    /// `Option::Some`.
    Some,
    /// `Result::Ok`.
    Ok,
    /// `Result::Err`.
    Err,
}

impl Variant {
    /// Returns the variant held by an option.
    #[must_use]
    pub const fn of_option<T>(value: &Option<T>) -> Self {
        if value.is_some() { Self::Some } else { Self::None }
    }

    /// Returns the variant held by a result.
    #[must_use]
    pub const fn of_result<T, E>(value: &Result<T, E>) -> Self {
        if value.is_ok() { Self::Ok } else { Self::Err }
    }
}

// ============================================================================
// SECTION: Mismatch
// ============================================================================

/// Expected one variant, observed the other.
///
/// # Invariants
/// - `Display` output equals [`VariantMismatch::message`] for every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum VariantMismatch {
    /// Expected `None`, observed `Some`.
    #[error("Expected None value, got Some")]
    ExpectedNone,
    /// Expected `Some`, observed `None`.
    #[error("Expected Some value, got None")]
    ExpectedSome,
    /// Expected `Ok`, observed `Err`.
    #[error("Expected Ok value, got Error")]
    ExpectedOk,
    /// Expected `Err`, observed `Ok`.
    #[error("Expected Error value, got Ok")]
    ExpectedErr,
}

impl VariantMismatch {
    /// Returns the default failure message without allocating.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ExpectedNone => "Expected None value, got Some",
            Self::ExpectedSome => "Expected Some value, got None",
            Self::ExpectedOk => "Expected Ok value, got Error",
            Self::ExpectedErr => "Expected Error value, got Ok",
        }
    }

    /// Returns the variant the assertion required.
    #[must_use]
    pub const fn expected(self) -> Variant {
        match self {
            Self::ExpectedNone => Variant::None,
            Self::ExpectedSome => Variant::Some,
            Self::ExpectedOk => Variant::Ok,
            Self::ExpectedErr => Variant::Err,
        }
    }

    /// Returns the variant that was actually observed.
    #[must_use]
    pub const fn actual(self) -> Variant {
        match self {
            Self::ExpectedNone => Variant::Some,
            Self::ExpectedSome => Variant::None,
            Self::ExpectedOk => Variant::Err,
            Self::ExpectedErr => Variant::Ok,
        }
    }
}
