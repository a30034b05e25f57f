//! The staging buffer: invalid CA rows awaiting an operator decision.
//!
//! Selection is tracked as a set of matching keys rather than row positions,
//! so filtering or reordering the listing never invalidates it. Keyless rows
//! are listed but can never be selected.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kam_core::entities::{AccountManagerRecord, StagedRecord};
use kam_core::enums::WorkflowState;
use kam_core::errors::CoreError;
use kam_core::responses::StagedRow;

use crate::key::{MatchKeySet, match_key};
use crate::validation::ValidationRun;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingBuffer {
    rows: Vec<StagedRecord>,
    selected: BTreeSet<String>,
    staged_at: Option<DateTime<Utc>>,
}

impl StagingBuffer {
    /// Build a buffer holding the review rows of a validation run.
    #[must_use]
    pub fn from_run(run: &ValidationRun) -> Self {
        let mut buffer = Self::default();
        buffer.stage(run);
        buffer
    }

    /// Replace the buffer contents with the review rows of `run`.
    ///
    /// The previous rows and selection are discarded, never merged.
    pub fn stage(&mut self, run: &ValidationRun) {
        self.rows = run.review_rows().cloned().collect();
        self.selected.clear();
        self.staged_at = Some(run.log.timestamp);
    }

    #[must_use]
    pub fn rows(&self) -> &[StagedRecord] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub const fn staged_at(&self) -> Option<DateTime<Utc>> {
        self.staged_at
    }

    #[must_use]
    pub fn state(&self) -> WorkflowState {
        if self.rows.is_empty() {
            WorkflowState::Idle
        } else {
            WorkflowState::Staged
        }
    }

    /// Select every staged row with matching key `key`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::KeyNotStaged` if no staged row has that key.
    pub fn select(&mut self, key: &str) -> Result<(), CoreError> {
        let key = key.trim();
        if !self.has_key(key) {
            return Err(CoreError::KeyNotStaged {
                key: key.to_string(),
            });
        }
        self.selected.insert(key.to_string());
        Ok(())
    }

    /// Remove `key` from the selection. Returns whether it was selected.
    pub fn deselect(&mut self, key: &str) -> bool {
        self.selected.remove(key.trim())
    }

    /// Select every keyed row. Returns the number of selected keys.
    pub fn select_all(&mut self) -> usize {
        self.selected = self.rows.iter().filter_map(|row| match_key(&row.record)).collect();
        self.selected.len()
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn is_selected(&self, row: &StagedRecord) -> bool {
        match_key(&row.record).is_some_and(|key| self.selected.contains(&key))
    }

    /// Selected matching keys in sorted order.
    pub fn selected_keys(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    /// Selected rows in buffer order, ready to pass to `commit`.
    #[must_use]
    pub fn selected_records(&self) -> Vec<StagedRecord> {
        self.rows
            .iter()
            .filter(|row| self.is_selected(row))
            .cloned()
            .collect()
    }

    /// Rows whose NIK, sales ID, name, region, or witel contains `query`,
    /// ignoring case. A blank query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&StagedRecord> {
        let needle = query.trim().to_lowercase();
        self.rows
            .iter()
            .filter(|row| needle.is_empty() || row_matches(&row.record, &needle))
            .collect()
    }

    /// Listing rows with their key and selection flag.
    #[must_use]
    pub fn listing(&self, query: Option<&str>) -> Vec<StagedRow> {
        self.search(query.unwrap_or_default())
            .into_iter()
            .map(|row| StagedRow {
                key: match_key(&row.record),
                selected: self.is_selected(row),
                row: row.clone(),
            })
            .collect()
    }

    /// Drop rows whose key now exists in `master` and prune the selection to
    /// keys still staged. Returns the number of rows removed.
    pub fn retain_uncommitted(&mut self, master: &[AccountManagerRecord]) -> usize {
        let master_keys = MatchKeySet::from_records(master);
        let before = self.rows.len();
        self.rows.retain(|row| {
            match_key(&row.record).is_none_or(|key| !master_keys.contains(&key))
        });
        let staged: BTreeSet<String> =
            self.rows.iter().filter_map(|row| match_key(&row.record)).collect();
        self.selected.retain(|key| staged.contains(key));
        if self.rows.is_empty() {
            self.staged_at = None;
        }
        before - self.rows.len()
    }

    /// Discard every row and the selection. Returns the number of rows dropped.
    pub fn clear(&mut self) -> usize {
        let discarded = self.rows.len();
        self.rows.clear();
        self.selected.clear();
        self.staged_at = None;
        discarded
    }

    fn has_key(&self, key: &str) -> bool {
        self.rows
            .iter()
            .any(|row| match_key(&row.record).as_deref() == Some(key))
    }
}

fn row_matches(record: &AccountManagerRecord, needle: &str) -> bool {
    [
        record.nik_am.as_deref(),
        record.id_sales.as_deref(),
        record.name.as_deref(),
        record.region.as_deref(),
        record.witel.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}
