//! JSON-file roster source and the master roster write-back.

use std::path::{Path, PathBuf};

use kam_core::entities::AccountManagerRecord;

use crate::error::SourceError;
use crate::normalize::records_from_document;
use crate::source::RosterSource;

/// Roster read from a JSON document on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    label: String,
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterSource for JsonFileSource {
    fn label(&self) -> &str {
        &self.label
    }

    async fn fetch(&self) -> Result<Vec<AccountManagerRecord>, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SourceError::io(&self.path, e))?;
        let doc: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| SourceError::Parse {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        let records = records_from_document(&doc)?;
        tracing::debug!(
            source = %self.label,
            path = %self.path.display(),
            rows = records.len(),
            "Loaded roster file"
        );
        Ok(records)
    }
}

/// Writes the master roster back to its JSON file.
///
/// The document is a plain array using the snake_case boundary names, which
/// `JsonFileSource` reads back unchanged.
#[derive(Debug, Clone)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file contents with `records`.
    ///
    /// Writes a sibling temp file and renames it over the target so readers
    /// never observe a partial document.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Serialize` if encoding fails, or
    /// `SourceError::Io` if the write or rename fails.
    pub async fn save(&self, records: &[AccountManagerRecord]) -> Result<(), SourceError> {
        let body = serde_json::to_vec_pretty(records)
            .map_err(|e| SourceError::Serialize(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SourceError::io(parent, e))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body)
            .await
            .map_err(|e| SourceError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| SourceError::io(&self.path, e))?;
        tracing::info!(path = %self.path.display(), rows = records.len(), "Saved master roster");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn reads_uppercase_envelope_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ca.json");
        std::fs::write(
            &path,
            r#"{"data": [{"NIK_AM": 850001, "ID_SALES": "AM-1", "NAMA_AM": "Rina"}]}"#,
        )
        .unwrap();

        let rows = JsonFileSource::new("CA", &path).fetch().await.unwrap();
        assert_eq!(rows, vec![AccountManagerRecord::with_ids("850001", "AM-1").named("Rina")]);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileSource::new("ATM", dir.path().join("nope.json"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[tokio::test]
    async fn invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atm.json");
        std::fs::write(&path, "[{").unwrap();
        let err = JsonFileSource::new("ATM", &path).fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[tokio::test]
    async fn saved_roster_reads_back_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("master").join("atm.json");
        let records = vec![
            AccountManagerRecord::with_ids("850001", "AM-1")
                .named("Rina")
                .located("Regional 2", "Jakarta Selatan"),
            AccountManagerRecord::with_ids("", "AM-2"),
        ];

        RosterStore::new(&path).save(&records).await.unwrap();
        let loaded = JsonFileSource::new("ATM", &path).fetch().await.unwrap();

        assert_eq!(loaded, records);
        assert!(!path.with_extension("json.tmp").exists());
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"nama_am\""));
    }
}
