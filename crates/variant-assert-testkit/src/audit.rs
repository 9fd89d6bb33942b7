// crates/variant-assert-testkit/src/audit.rs
// ============================================================================
// Module: Assertion Audit Sinks
// Description: Sink trait and reference implementations for assertion logs.
// Purpose: Mirror every recorded outcome to an external log without hard deps.
// Dependencies: crate::record, serde, serde_json, thiserror, std
// ============================================================================

//! ## Overview
//! Recorders emit one [`AuditEvent`] per assertion. Sinks are best-effort: a
//! failed write is counted by the recorder but never changes an outcome.
//! [`JsonlAuditSink`] writes one JSON object per line; [`MemoryAuditSink`]
//! keeps events for inspection in tests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::record::AssertionRecord;
use crate::record::Operator;
use crate::record::Outcome;

// ============================================================================
// SECTION: Audit Errors
// ============================================================================

/// Errors emitted by audit sinks.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The audit destination could not be opened.
    #[error("audit log open failed: {0}")]
    OpenFailed(String),
    /// An audit event could not be written.
    #[error("audit log write failed: {0}")]
    WriteFailed(String),
}

// ============================================================================
// SECTION: Audit Event
// ============================================================================

/// Audit payload for one recorded assertion.
///
/// # Invariants
/// - Mirrors the label fields of [`AssertionRecord`]; compared values are
///   omitted so logs stay small.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Position of the record in its recorder.
    pub sequence: u64,
    /// Nested test path.
    pub scope: String,
    /// Primitive that produced the record.
    pub operator: Operator,
    /// Pass or fail.
    pub outcome: Outcome,
    /// Assertion message.
    pub message: String,
}

impl From<&AssertionRecord> for AuditEvent {
    fn from(record: &AssertionRecord) -> Self {
        Self {
            sequence: record.sequence,
            scope: record.scope.clone(),
            operator: record.operator,
            outcome: record.outcome,
            message: record.message.clone(),
        }
    }
}

// ============================================================================
// SECTION: Sink Trait
// ============================================================================

/// Receives audit events from recorders.
pub trait AuditSink: Send + Sync {
    /// Records one audit event.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError`] when the event cannot be persisted.
    fn record(&self, event: &AuditEvent) -> Result<(), AuditError>;
}

// ============================================================================
// SECTION: Implementations
// ============================================================================

/// No-op audit sink.
///
/// # Invariants
/// - Events are intentionally discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &AuditEvent) -> Result<(), AuditError> {
        Ok(())
    }
}

/// JSON-lines audit sink over any writer.
pub struct JsonlAuditSink<W: Write + Send> {
    /// Output writer for audit lines.
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonlAuditSink<W> {
    /// Creates a sink writing to `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns its writer.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::WriteFailed`] when the writer mutex is poisoned.
    pub fn into_inner(self) -> Result<W, AuditError> {
        self.writer
            .into_inner()
            .map_err(|_| AuditError::WriteFailed("audit writer mutex poisoned".to_string()))
    }
}

impl<W: Write + Send> AuditSink for JsonlAuditSink<W> {
    fn record(&self, event: &AuditEvent) -> Result<(), AuditError> {
        let mut guard = self
            .writer
            .lock()
            .map_err(|_| AuditError::WriteFailed("audit writer mutex poisoned".to_string()))?;
        serde_json::to_writer(&mut *guard, event)
            .map_err(|err| AuditError::WriteFailed(err.to_string()))?;
        guard.write_all(b"\n").map_err(|err| AuditError::WriteFailed(err.to_string()))?;
        guard.flush().map_err(|err| AuditError::WriteFailed(err.to_string()))?;
        drop(guard);
        Ok(())
    }
}

/// In-memory audit sink for tests.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    /// Captured events in arrival order.
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the captured events.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events
            .lock()
            .map_or_else(|poisoned| poisoned.into_inner().to_vec(), |guard| guard.to_vec())
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, event: &AuditEvent) -> Result<(), AuditError> {
        self.events
            .lock()
            .map_err(|_| AuditError::WriteFailed("audit buffer mutex poisoned".to_string()))?
            .push(event.clone());
        Ok(())
    }
}
