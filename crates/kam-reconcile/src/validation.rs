//! Timed validation run: diff plus summary and a `VALIDATE` audit entry.

use std::time::Instant;

use kam_core::entities::{AccountManagerRecord, AuditEntry, StagedRecord};
use kam_core::enums::AuditAction;
use kam_core::responses::ValidationSummary;

use crate::diff::diff;
use crate::elapsed_ms;

/// Result of validating the CA roster against the ATM roster.
#[derive(Debug, Clone)]
pub struct ValidationRun {
    /// Valid rows followed by invalid rows, each in source order.
    pub staged: Vec<StagedRecord>,
    pub summary: ValidationSummary,
    pub log: AuditEntry,
}

impl ValidationRun {
    /// Rows an operator can act on: CA rows missing from the master roster.
    pub fn review_rows(&self) -> impl Iterator<Item = &StagedRecord> {
        self.staged.iter().filter(|row| row.is_commit_candidate())
    }
}

/// Diff `source` against `master`, timing the run.
///
/// The log entry's `count` is the number of invalid rows.
#[must_use]
pub fn run_validation(
    actor: &str,
    source: &[AccountManagerRecord],
    master: &[AccountManagerRecord],
) -> ValidationRun {
    let started = Instant::now();
    let outcome = diff(source, master);
    let summary = outcome.summary();
    let staged = outcome.into_staged();
    let duration_ms = elapsed_ms(started);

    let log = AuditEntry::record(actor, AuditAction::Validate, summary.invalid, duration_ms);

    tracing::debug!(
        actor,
        total = summary.total,
        valid = summary.valid,
        invalid = summary.invalid,
        duration_ms,
        "Validation run complete"
    );

    ValidationRun {
        staged,
        summary,
        log,
    }
}
