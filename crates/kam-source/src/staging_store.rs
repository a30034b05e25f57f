//! On-disk persistence of the staging buffer between CLI invocations.

use std::path::{Path, PathBuf};

use kam_reconcile::StagingBuffer;

use crate::error::SourceError;

/// File name of the staging buffer inside the state directory.
pub const STAGING_FILE: &str = "staging.json";

/// Loads and saves the staging buffer as `<state_dir>/staging.json`.
#[derive(Debug, Clone)]
pub struct StagingStore {
    path: PathBuf,
}

impl StagingStore {
    #[must_use]
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(STAGING_FILE),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the buffer. A missing file is an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if the file exists but cannot be read, or
    /// `SourceError::Parse` if it is not a staging buffer.
    pub fn load(&self) -> Result<StagingBuffer, SourceError> {
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StagingBuffer::default());
            }
            Err(e) => return Err(SourceError::io(&self.path, e)),
        };
        serde_json::from_slice(&raw).map_err(|e| SourceError::Parse {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Persist the buffer, creating the state directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if encoding or writing fails.
    pub fn save(&self, buffer: &StagingBuffer) -> Result<(), SourceError> {
        let body =
            serde_json::to_vec_pretty(buffer).map_err(|e| SourceError::Serialize(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SourceError::io(parent, e))?;
        }
        std::fs::write(&self.path, body).map_err(|e| SourceError::io(&self.path, e))
    }

    /// Remove the persisted buffer. Removing a missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), SourceError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SourceError::io(&self.path, e)),
        }
    }
}
