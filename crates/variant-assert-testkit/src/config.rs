// crates/variant-assert-testkit/src/config.rs
// ============================================================================
// Module: Harness Configuration
// Description: TOML-backed settings for recorders and audit logging.
// Purpose: Load, default, and validate harness settings with fail-closed parsing.
// Dependencies: serde, thiserror, toml, std
// ============================================================================

//! ## Overview
//! Configuration is optional: [`HarnessConfig::default`] is valid. When a file
//! is used, unknown keys are rejected and the file size is capped so a stray
//! path cannot pull an arbitrary file into memory.
//!
//! ```toml
//! [recorder]
//! max_depth = 8
//! keep_passing = false
//!
//! [audit]
//! path = "target/assertions.jsonl"
//! ```

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_BYTES: usize = 64 * 1024;

/// Upper bound accepted for `recorder.max_depth`.
pub const MAX_SCOPE_DEPTH_LIMIT: usize = 256;

/// Default nesting limit for recorder scopes.
const DEFAULT_MAX_DEPTH: usize = 32;

// ============================================================================
// SECTION: Config Errors
// ============================================================================

/// Errors raised while loading configuration.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("config read failed: {0}")]
    Io(String),
    /// The configuration file exceeded [`MAX_CONFIG_FILE_BYTES`].
    #[error("config file too large: {actual_bytes} bytes (max {max_bytes})")]
    TooLarge {
        /// Maximum allowed size.
        max_bytes: usize,
        /// Size encountered while reading.
        actual_bytes: usize,
    },
    /// The configuration was not valid TOML for this schema.
    #[error("config parse failed: {0}")]
    Parse(String),
    /// The configuration parsed but violates a constraint.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Top-level harness configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Recorder behavior.
    #[serde(default)]
    pub recorder: RecorderConfig,
    /// Audit log destination.
    #[serde(default)]
    pub audit: AuditConfig,
}

/// Recorder behavior settings.
///
/// # Invariants
/// - `1 <= max_depth <= MAX_SCOPE_DEPTH_LIMIT` after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecorderConfig {
    /// Maximum number of nested `test` scopes.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Keep passing records in the report (counts are always kept).
    #[serde(default = "default_keep_passing")]
    pub keep_passing: bool,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            keep_passing: true,
        }
    }
}

/// Audit log settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// JSON-lines file to append audit events to; disabled when absent.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Serde default for `recorder.max_depth`.
const fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Serde default for `recorder.keep_passing`.
const fn default_keep_passing() -> bool {
    true
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl HarnessConfig {
    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read,
    /// [`ConfigError::TooLarge`] when it exceeds [`MAX_CONFIG_FILE_BYTES`], and
    /// any error from [`HarnessConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = read_to_string_with_limit(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recorder.max_depth == 0 {
            return Err(ConfigError::Invalid("recorder.max_depth must be at least 1".to_string()));
        }
        if self.recorder.max_depth > MAX_SCOPE_DEPTH_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "recorder.max_depth must not exceed {MAX_SCOPE_DEPTH_LIMIT}"
            )));
        }
        if self.audit.path.as_ref().is_some_and(|path| path.as_os_str().is_empty()) {
            return Err(ConfigError::Invalid("audit.path must not be empty".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads a file into a string while enforcing [`MAX_CONFIG_FILE_BYTES`].
fn read_to_string_with_limit(path: &Path) -> Result<String, ConfigError> {
    let file = fs::File::open(path)
        .map_err(|err| ConfigError::Io(format!("{}: {err}", path.display())))?;
    let mut contents = String::new();
    let limit = u64::try_from(MAX_CONFIG_FILE_BYTES).unwrap_or(u64::MAX).saturating_add(1);
    file.take(limit)
        .read_to_string(&mut contents)
        .map_err(|err| ConfigError::Io(format!("{}: {err}", path.display())))?;

    if contents.len() > MAX_CONFIG_FILE_BYTES {
        return Err(ConfigError::TooLarge {
            max_bytes: MAX_CONFIG_FILE_BYTES,
            actual_bytes: contents.len(),
        });
    }

    Ok(contents)
}
