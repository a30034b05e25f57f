//! Cross-cutting error types for KAM reconciliation.
//!
//! The reconciliation engine itself is infallible. These errors cover the
//! surrounding layers (staging selection, actor names, boundary payloads).
//! Adapter-specific errors (`SourceError`, `ConfigError`) live in their own
//! crates and converge as `anyhow::Error` in `kam-cli`.

use thiserror::Error;

/// Errors that can be raised by any `kam` crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A staged row lookup by matching key returned nothing.
    #[error("No staged row with matching key '{key}'")]
    KeyNotStaged { key: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
