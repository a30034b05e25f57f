//! Append-only JSONL audit log.
//!
//! One `AuditEntry` per line. Entries are never rewritten; readers get the
//! newest first.

use std::path::{Path, PathBuf};

use kam_core::entities::AuditEntry;

use crate::error::SourceError;

pub struct AuditLog {
    path: PathBuf,
    enabled: bool,
}

impl AuditLog {
    /// Open the log at `path`, creating its parent directory.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if the directory cannot be created.
    pub fn new(path: PathBuf) -> Result<Self, SourceError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SourceError::io(parent, e))?;
        }
        Ok(Self {
            path,
            enabled: true,
        })
    }

    /// A log that drops every entry and reads back nothing.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            path: PathBuf::new(),
            enabled: false,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if the write fails.
    pub fn append(&self, entry: &AuditEntry) -> Result<(), SourceError> {
        if !self.enabled {
            return Ok(());
        }
        serde_jsonlines::append_json_lines(&self.path, [entry])
            .map_err(|e| SourceError::io(&self.path, e))?;
        tracing::debug!(action = %entry.action, count = entry.count, "Appended audit entry");
        Ok(())
    }

    /// Up to `limit` entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Parse` if a line is not an audit entry, or
    /// `SourceError::Io` if the file cannot be read.
    pub fn read_recent(&self, limit: usize) -> Result<Vec<AuditEntry>, SourceError> {
        if !self.enabled || !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut entries: Vec<AuditEntry> = serde_jsonlines::json_lines(&self.path)
            .map_err(|e| SourceError::io(&self.path, e))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SourceError::Parse {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        entries.reverse();
        entries.truncate(limit);
        Ok(entries)
    }
}
