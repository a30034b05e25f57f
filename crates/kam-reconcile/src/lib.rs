//! # kam-reconcile
//!
//! Reconciliation of a candidate account-manager roster (CA) against the
//! authoritative master roster (ATM).
//!
//! The workflow is compare → stage → select → commit:
//!
//! ```text
//! fetch ATM + CA ──► run_validation ──► StagingBuffer ──► select keys ──► commit
//!                        │                                                 │
//!                        └──► AuditEntry (VALIDATE)     AuditEntry (GENERATE) ◄┘
//! ```
//!
//! Every operation here is pure and infallible. Inputs are snapshots passed by
//! the caller and outputs are fresh collections; nothing is mutated in place
//! except a `StagingBuffer` the caller explicitly owns. Persisting the master
//! roster, the staging buffer, and the audit log is the caller's job.
//!
//! # Usage
//!
//! ```
//! use kam_core::entities::AccountManagerRecord;
//! use kam_reconcile::{StagingBuffer, commit, run_validation};
//!
//! let atm = vec![AccountManagerRecord::with_ids("1001", "S-01")];
//! let ca = vec![
//!     AccountManagerRecord::with_ids("1001", "S-01"),
//!     AccountManagerRecord::with_ids("9999", "S-99"),
//! ];
//!
//! let run = run_validation("admin", &ca, &atm);
//! assert_eq!(run.summary.invalid, 1);
//!
//! let mut buffer = StagingBuffer::from_run(&run);
//! buffer.select("nik:9999").expect("row is staged");
//!
//! let outcome = commit("admin", &buffer.selected_records(), &atm);
//! assert_eq!(outcome.inserted_count, 1);
//! assert_eq!(outcome.updated_master.len(), 2);
//! ```

pub mod actions;
pub mod commit;
pub mod diff;
pub mod key;
pub mod progress;
pub mod staging;
pub mod validation;

pub use actions::{cancel, record_sync};
pub use commit::{CommitOutcome, commit};
pub use diff::{DiffOutcome, diff, diff_karyawan_to_atm, diff_tagged};
pub use key::{MatchKeySet, match_key};
pub use progress::{reconciliation_progress, summary_progress};
pub use staging::StagingBuffer;
pub use validation::{ValidationRun, run_validation};

/// Saturating conversion for record counts reported in summaries and logs.
pub(crate) fn count_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Saturating milliseconds of an elapsed duration.
pub(crate) fn elapsed_ms(started: std::time::Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
