//! Matching-key derivation.
//!
//! A record's identity across rosters is `nik:<trimmed nik_am>` when the NIK is
//! non-blank, otherwise `id:<trimmed id_sales>`, otherwise nothing. Records
//! without a key never match anything, including other keyless records.

use std::collections::HashSet;

use kam_core::entities::AccountManagerRecord;

/// Derive the matching key for a record. Total and deterministic.
#[must_use]
pub fn match_key(record: &AccountManagerRecord) -> Option<String> {
    if let Some(nik) = record.trimmed_nik() {
        return Some(format!("nik:{nik}"));
    }
    record.trimmed_id_sales().map(|id| format!("id:{id}"))
}

/// Set of matching keys present in a roster. Keyless records are dropped.
#[derive(Debug, Clone, Default)]
pub struct MatchKeySet {
    keys: HashSet<String>,
}

impl MatchKeySet {
    /// Build the key set of a roster snapshot.
    #[must_use]
    pub fn from_records(records: &[AccountManagerRecord]) -> Self {
        Self {
            keys: records.iter().filter_map(match_key).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Add a key. Returns `false` if it was already present.
    pub fn insert(&mut self, key: String) -> bool {
        self.keys.insert(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
