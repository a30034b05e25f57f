//! Duplicate-safe commit of selected staged rows into the master roster.

use std::time::Instant;

use kam_core::entities::{AccountManagerRecord, AuditEntry, StagedRecord};
use kam_core::enums::AuditAction;

use crate::key::{MatchKeySet, match_key};
use crate::{count_u32, elapsed_ms};

/// Result of a commit. The input master roster is left untouched.
#[derive(Debug, Clone)]
pub struct CommitOutcome {
    /// Original master rows in order, followed by the newly accepted rows.
    pub updated_master: Vec<AccountManagerRecord>,
    pub inserted_count: u32,
    /// Selected rows that were not inserted (keyless, duplicate, or not a CA/invalid row).
    pub skipped_count: u32,
    pub log: AuditEntry,
}

impl CommitOutcome {
    /// Whether the commit inserted nothing.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.inserted_count == 0
    }
}

/// Append `selected` rows to `master`, skipping any row whose key is missing or
/// already present.
///
/// The master key set is rebuilt from `master` on every call, and keys accepted
/// earlier in the same batch count as present. Rows that are not invalid CA
/// rows are ignored. Committing the same selection twice inserts nothing the
/// second time.
#[must_use]
pub fn commit(
    actor: &str,
    selected: &[StagedRecord],
    master: &[AccountManagerRecord],
) -> CommitOutcome {
    let started = Instant::now();
    let mut keys = MatchKeySet::from_records(master);
    let mut updated_master = master.to_vec();
    let mut inserted = 0usize;

    for row in selected {
        if !row.is_commit_candidate() {
            tracing::debug!(source = %row.source, status = %row.status, "Ignoring non-candidate row");
            continue;
        }
        let Some(key) = match_key(&row.record) else {
            tracing::debug!("Skipping keyless row");
            continue;
        };
        if keys.contains(&key) {
            tracing::debug!(%key, "Skipping row already in master");
            continue;
        }
        keys.insert(key);
        updated_master.push(row.record.clone());
        inserted += 1;
    }

    let inserted_count = count_u32(inserted);
    let skipped_count = count_u32(selected.len() - inserted);
    let duration_ms = elapsed_ms(started);
    let log = AuditEntry::record(actor, AuditAction::Generate, inserted_count, duration_ms);

    tracing::info!(
        actor,
        selected = selected.len(),
        inserted = inserted_count,
        skipped = skipped_count,
        master_total = updated_master.len(),
        "Committed staged rows into master"
    );

    CommitOutcome {
        updated_master,
        inserted_count,
        skipped_count,
        log,
    }
}
