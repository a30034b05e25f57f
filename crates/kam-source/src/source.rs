//! The roster-fetch seam and the config-driven source selector.

use std::future::Future;
use std::path::{Path, PathBuf};

use kam_core::entities::AccountManagerRecord;

use crate::error::SourceError;
use crate::file::JsonFileSource;
use crate::mock::MockSource;

/// Something that can produce a full roster snapshot.
///
/// Implementations must return every row they hold, in their natural order.
/// The reconciliation engine relies on source order for its output order.
pub trait RosterSource {
    /// Short human label used in logs and error messages.
    fn label(&self) -> &str;

    /// Fetch the current roster.
    fn fetch(
        &self,
    ) -> impl Future<Output = Result<Vec<AccountManagerRecord>, SourceError>> + Send;
}

/// A roster source picked from configuration: a JSON file when a path is
/// set, otherwise the built-in mock roster.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Mock(MockSource),
    File(JsonFileSource),
}

impl ConfiguredSource {
    /// Resolve `path` against `project_root`; a blank path selects `fallback`.
    #[must_use]
    pub fn from_path(path: &str, project_root: &Path, fallback: MockSource) -> Self {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Self::Mock(fallback);
        }
        let candidate = PathBuf::from(trimmed);
        let resolved = if candidate.is_absolute() {
            candidate
        } else {
            project_root.join(candidate)
        };
        Self::File(JsonFileSource::new(fallback.label(), resolved))
    }

    #[must_use]
    pub const fn is_file_backed(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// The backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Mock(_) => None,
            Self::File(file) => Some(file.path()),
        }
    }
}

impl RosterSource for ConfiguredSource {
    fn label(&self) -> &str {
        match self {
            Self::Mock(mock) => mock.label(),
            Self::File(file) => file.label(),
        }
    }

    async fn fetch(&self) -> Result<Vec<AccountManagerRecord>, SourceError> {
        match self {
            Self::Mock(mock) => mock.fetch().await,
            Self::File(file) => file.fetch().await,
        }
    }
}
