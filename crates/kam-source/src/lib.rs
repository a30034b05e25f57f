//! # kam-source
//!
//! Everything `kam` reads from or writes to outside the reconciliation
//! engine: roster sources (built-in mock rosters or JSON files), the field
//! normalization adapter, the concurrent roster fetch, the master roster
//! write-back, the persisted staging buffer, and the JSONL audit log.

pub mod audit_log;
pub mod error;
pub mod fetch;
pub mod file;
pub mod mock;
pub mod normalize;
pub mod source;
pub mod staging_store;

pub use audit_log::AuditLog;
pub use error::SourceError;
pub use fetch::{RosterPair, fetch_pair};
pub use file::{JsonFileSource, RosterStore};
pub use mock::MockSource;
pub use source::{ConfiguredSource, RosterSource};
pub use staging_store::StagingStore;
