// crates/variant-assert-testkit/src/harness.rs
// ============================================================================
// Module: Harness
// Description: Builds recorders from configuration and runs root scopes.
// Purpose: Give tests one entry point that wires config and audit sinks.
// Dependencies: crate::{audit, config, error, record, recorder}, std
// ============================================================================

//! ## Overview
//! A [`Harness`] owns validated configuration and a shared audit sink. Each
//! call to [`Harness::run`] creates a fresh [`Recorder`], so runs never share
//! outcomes even when they share a sink.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use crate::audit::AuditError;
use crate::audit::AuditSink;
use crate::audit::JsonlAuditSink;
use crate::audit::NoopAuditSink;
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::record::Report;
use crate::recorder::Recorder;

// ============================================================================
// SECTION: Harness
// ============================================================================

/// Factory for configured recorders.
pub struct Harness {
    /// Validated configuration.
    config: HarnessConfig,
    /// Sink shared by every recorder built from this harness.
    sink: Arc<dyn AuditSink>,
}

impl Harness {
    /// Builds a harness, opening the audit file when one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] when validation fails and
    /// [`HarnessError::Audit`] when the audit file cannot be opened.
    pub fn new(config: HarnessConfig) -> Result<Self, HarnessError> {
        config.validate()?;
        let sink: Arc<dyn AuditSink> = match &config.audit.path {
            Some(path) => Arc::new(open_audit_file(path)?),
            None => Arc::new(NoopAuditSink),
        };
        Ok(Self {
            config,
            sink,
        })
    }

    /// Loads configuration from a TOML file and builds a harness.
    ///
    /// # Errors
    ///
    /// Returns any error from [`HarnessConfig::load`] or [`Harness::new`].
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        Self::new(HarnessConfig::load(path)?)
    }

    /// Replaces the audit sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Returns the harness configuration.
    #[must_use]
    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Creates a fresh recorder sharing this harness's sink.
    #[must_use]
    pub fn recorder(&self) -> Recorder {
        Recorder::with_sink(self.config.recorder.clone(), Arc::clone(&self.sink))
    }

    /// Runs `body` under a root scope named `description` and returns its report.
    pub fn run<F>(&self, description: &str, body: F) -> Report
    where
        F: FnOnce(&mut Recorder),
    {
        let mut recorder = self.recorder();
        recorder.test(description, body);
        recorder.into_report()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Opens `path` for appending JSON-lines audit events.
fn open_audit_file(path: &Path) -> Result<JsonlAuditSink<std::fs::File>, AuditError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| AuditError::OpenFailed(format!("{}: {err}", path.display())))?;
    Ok(JsonlAuditSink::new(file))
}
