//! Data-source error types for kam-source.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from fetching rosters or reading/writing local state files.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file did not contain valid JSON of the expected shape.
    #[error("Failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// A roster document had an unusable top-level shape.
    #[error("Malformed roster document: {0}")]
    Malformed(String),

    /// Serializing state for writing failed.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl SourceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
