//! Key-based classification of a source roster against the master roster.

use chrono::{DateTime, Utc};
use serde::Serialize;

use kam_core::entities::{AccountManagerRecord, StagedRecord};
use kam_core::enums::{RecordSource, RecordStatus};
use kam_core::responses::ValidationSummary;

use crate::count_u32;
use crate::key::{MatchKeySet, match_key};

/// Source rows split by whether their key exists in the master roster.
///
/// Both lists keep the relative order of the input, and together they contain
/// every input row exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffOutcome {
    pub valid: Vec<StagedRecord>,
    pub invalid: Vec<StagedRecord>,
}

impl DiffOutcome {
    #[must_use]
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            total: count_u32(self.valid.len() + self.invalid.len()),
            valid: count_u32(self.valid.len()),
            invalid: count_u32(self.invalid.len()),
        }
    }

    /// Valid rows followed by invalid rows.
    #[must_use]
    pub fn into_staged(self) -> Vec<StagedRecord> {
        let mut staged = self.valid;
        staged.extend(self.invalid);
        staged
    }
}

/// Classify CA rows against the ATM roster, stamped now.
#[must_use]
pub fn diff(source: &[AccountManagerRecord], master: &[AccountManagerRecord]) -> DiffOutcome {
    diff_tagged(RecordSource::Ca, source, master, Utc::now())
}

/// Classify employee-roster rows against the ATM roster. Reporting only.
#[must_use]
pub fn diff_karyawan_to_atm(
    karyawan: &[AccountManagerRecord],
    master: &[AccountManagerRecord],
) -> DiffOutcome {
    diff_tagged(RecordSource::Karyawan, karyawan, master, Utc::now())
}

/// Classify `source` against `master`, tagging every row with `tag` and `now`.
///
/// A row is valid iff it has a matching key and that key is in the master key
/// set. Keyless rows are always invalid.
#[must_use]
pub fn diff_tagged(
    tag: RecordSource,
    source: &[AccountManagerRecord],
    master: &[AccountManagerRecord],
    now: DateTime<Utc>,
) -> DiffOutcome {
    let master_keys = MatchKeySet::from_records(master);
    let mut outcome = DiffOutcome::default();

    for record in source {
        let status = match match_key(record) {
            Some(key) if master_keys.contains(&key) => RecordStatus::Valid,
            _ => RecordStatus::Invalid,
        };
        let staged = StagedRecord::new(record.clone(), tag, status, now);
        if status.is_valid() {
            outcome.valid.push(staged);
        } else {
            outcome.invalid.push(staged);
        }
    }

    tracing::debug!(
        source = %tag,
        total = source.len(),
        master_keys = master_keys.len(),
        valid = outcome.valid.len(),
        invalid = outcome.invalid.len(),
        "Classified roster against master"
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn empty_inputs_produce_empty_outcome() {
        let outcome = diff_tagged(RecordSource::Ca, &[], &[], ts());
        assert!(outcome.valid.is_empty());
        assert!(outcome.invalid.is_empty());
        assert_eq!(outcome.summary(), ValidationSummary::default());
    }

    #[test]
    fn everything_invalid_against_empty_master() {
        let source = vec![
            AccountManagerRecord::with_ids("1", "A"),
            AccountManagerRecord::with_ids("2", "B"),
        ];
        let outcome = diff_tagged(RecordSource::Ca, &source, &[], ts());
        assert_eq!(outcome.valid.len(), 0);
        assert_eq!(outcome.invalid.len(), 2);
    }

    #[test]
    fn rows_are_stamped_with_tag_and_time() {
        let source = vec![AccountManagerRecord::with_ids("1", "A")];
        let outcome = diff_tagged(RecordSource::Karyawan, &source, &source, ts());
        let row = &outcome.valid[0];
        assert_eq!(row.source, RecordSource::Karyawan);
        assert_eq!(row.status, RecordStatus::Valid);
        assert_eq!(row.timestamp, ts());
        assert_eq!(row.record, source[0]);
    }

    #[test]
    fn id_sales_match_when_nik_blank_on_both_sides() {
        let master = vec![AccountManagerRecord::with_ids("", "S-05")];
        let source = vec![AccountManagerRecord::with_ids("  ", " S-05 ")];
        let outcome = diff_tagged(RecordSource::Ca, &source, &master, ts());
        assert_eq!(outcome.valid.len(), 1);
    }

    #[test]
    fn nik_key_does_not_fall_back_to_id_sales() {
        // Source has a NIK the master lacks; the shared sales ID must not rescue it.
        let master = vec![AccountManagerRecord::with_ids("", "S-05")];
        let source = vec![AccountManagerRecord::with_ids("7777", "S-05")];
        let outcome = diff_tagged(RecordSource::Ca, &source, &master, ts());
        assert_eq!(outcome.invalid.len(), 1);
    }

    #[test]
    fn into_staged_puts_valid_first() {
        let master = vec![AccountManagerRecord::with_ids("2", "B")];
        let source = vec![
            AccountManagerRecord::with_ids("1", "A"),
            AccountManagerRecord::with_ids("2", "B"),
        ];
        let staged = diff_tagged(RecordSource::Ca, &source, &master, ts()).into_staged();
        let niks: Vec<_> = staged
            .iter()
            .map(|row| row.record.nik_am.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(niks, vec!["2", "1"]);
    }

    #[test]
    fn public_wrappers_tag_their_source() {
        let source = vec![AccountManagerRecord::with_ids("1", "A")];
        assert_eq!(diff(&source, &[]).invalid[0].source, RecordSource::Ca);
        assert_eq!(
            diff_karyawan_to_atm(&source, &[]).invalid[0].source,
            RecordSource::Karyawan
        );
    }
}
