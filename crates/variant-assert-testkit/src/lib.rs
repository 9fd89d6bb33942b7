// crates/variant-assert-testkit/src/lib.rs
// ============================================================================
// Module: Variant Assert Testkit Root
// Description: Public API surface for the recording assertion harness.
// Purpose: Wire together configuration, audit sinks, records, and recorders.
// Dependencies: crate::{audit, config, error, harness, record, recorder}
// ============================================================================

//! ## Overview
//! A minimal [`variant_assert::Assertions`] implementation for exercising the
//! variant adapters: [`Recorder`] collects outcomes under nested scopes,
//! [`Harness`] builds recorders from [`HarnessConfig`], and every outcome is
//! mirrored to an [`AuditSink`]. This is test tooling, not a test runner.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod audit;
pub mod config;
pub mod error;
pub mod harness;
pub mod record;
pub mod recorder;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::AuditError;
pub use audit::AuditEvent;
pub use audit::AuditSink;
pub use audit::JsonlAuditSink;
pub use audit::MemoryAuditSink;
pub use audit::NoopAuditSink;
pub use config::AuditConfig;
pub use config::ConfigError;
pub use config::HarnessConfig;
pub use config::MAX_CONFIG_FILE_BYTES;
pub use config::RecorderConfig;
pub use error::HarnessError;
pub use harness::Harness;
pub use record::AssertionRecord;
pub use record::Operator;
pub use record::Outcome;
pub use record::Report;
pub use recorder::Recorder;
