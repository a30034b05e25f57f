//! End-to-end reconciliation scenarios on small hand-written rosters.

use kam_core::entities::AccountManagerRecord;
use kam_core::enums::{AuditAction, RecordSource, RecordStatus};
use kam_core::responses::ValidationSummary;
use kam_reconcile::{StagingBuffer, commit, diff, match_key, run_validation};
use pretty_assertions::assert_eq;

fn atm() -> Vec<AccountManagerRecord> {
    vec![AccountManagerRecord::with_ids("1001", "S-01")]
}

fn ca() -> Vec<AccountManagerRecord> {
    vec![
        AccountManagerRecord::with_ids("1001", "S-01"),
        AccountManagerRecord::with_ids("9999", "S-99"),
        AccountManagerRecord::with_ids("", "S-00"),
    ]
}

fn keys(records: &[AccountManagerRecord]) -> Vec<Option<String>> {
    records.iter().map(match_key).collect()
}

#[test]
fn classifies_ca_against_atm() {
    let outcome = diff(&ca(), &atm());

    let valid: Vec<_> = outcome.valid.iter().map(|r| r.record.clone()).collect();
    let invalid: Vec<_> = outcome.invalid.iter().map(|r| r.record.clone()).collect();
    assert_eq!(valid, vec![ca()[0].clone()]);
    assert_eq!(invalid, vec![ca()[1].clone(), ca()[2].clone()]);
    assert!(outcome.invalid.iter().all(|r| r.status == RecordStatus::Invalid));
    assert!(outcome.valid.iter().all(|r| r.source == RecordSource::Ca));

    let run = run_validation("admin", &ca(), &atm());
    assert_eq!(
        run.summary,
        ValidationSummary {
            total: 3,
            valid: 1,
            invalid: 2,
        }
    );
    assert_eq!(run.log.action, AuditAction::Validate);
    assert_eq!(run.log.count, 2);
}

#[test]
fn commits_selected_missing_row() {
    let run = run_validation("admin", &ca(), &atm());
    let mut buffer = StagingBuffer::from_run(&run);
    buffer.select("nik:9999").unwrap();

    let outcome = commit("admin", &buffer.selected_records(), &atm());

    assert_eq!(outcome.inserted_count, 1);
    assert_eq!(outcome.updated_master.len(), 2);
    assert_eq!(
        keys(&outcome.updated_master),
        vec![Some("nik:1001".to_string()), Some("nik:9999".to_string())]
    );
    assert_eq!(outcome.log.action, AuditAction::Generate);
    assert_eq!(outcome.log.count, 1);
}

#[test]
fn recommitting_same_row_inserts_nothing() {
    let run = run_validation("admin", &ca(), &atm());
    let mut buffer = StagingBuffer::from_run(&run);
    buffer.select("nik:9999").unwrap();
    let selected = buffer.selected_records();

    let first = commit("admin", &selected, &atm());
    let second = commit("admin", &selected, &first.updated_master);

    assert_eq!(second.inserted_count, 0);
    assert!(second.is_noop());
    assert_eq!(second.updated_master, first.updated_master);
}

#[test]
fn fully_blank_row_never_matches_blank_master_row() {
    let blank = AccountManagerRecord::with_ids("", "");
    let master = vec![blank.clone(), AccountManagerRecord::default()];

    let outcome = diff(std::slice::from_ref(&blank), &master);

    assert!(outcome.valid.is_empty());
    assert_eq!(outcome.invalid.len(), 1);
}

#[test]
fn full_workflow_prunes_committed_rows_from_buffer() {
    let run = run_validation("admin", &ca(), &atm());
    let mut buffer = StagingBuffer::from_run(&run);
    assert_eq!(buffer.len(), 2);
    buffer.select_all();

    let outcome = commit("admin", &buffer.selected_records(), &atm());
    assert_eq!(outcome.inserted_count, 2);

    buffer.retain_uncommitted(&outcome.updated_master);
    assert!(buffer.is_empty());

    let rerun = run_validation("admin", &ca(), &outcome.updated_master);
    assert_eq!(rerun.summary.invalid, 0);
    assert_eq!(kam_reconcile::reconciliation_progress(&ca(), &outcome.updated_master), 100);
}

#[test]
fn master_changed_between_diff_and_commit() {
    let run = run_validation("admin", &ca(), &atm());
    let mut buffer = StagingBuffer::from_run(&run);
    buffer.select("nik:9999").unwrap();

    // Another operator already added 9999 to the master roster.
    let mut current = atm();
    current.push(AccountManagerRecord::with_ids("9999", "S-99"));

    let outcome = commit("admin", &buffer.selected_records(), &current);
    assert_eq!(outcome.inserted_count, 0);
    assert_eq!(outcome.skipped_count, 1);
    assert_eq!(outcome.updated_master.len(), 2);
}
