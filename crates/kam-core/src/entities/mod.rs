//! Entity structs for the roster reconciliation domain.
//!
//! Field names on the wire follow the roster API (`nik_am`, `nama_am`,
//! `sumber`, `ts`, ...). All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON roundtrip and schema validation.

mod audit;
mod roster;
mod staged;

pub use audit::{AuditEntry, validate_actor};
pub use roster::AccountManagerRecord;
pub use staged::StagedRecord;
