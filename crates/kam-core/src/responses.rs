//! Response types returned as JSON by `kam` commands.
//!
//! These structs define the shape of JSON output for `kam validate`,
//! `kam commit`, `kam progress`, and the other workflow commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AuditEntry, StagedRecord};
use crate::enums::WorkflowState;

/// Counts produced by classifying a source roster.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationSummary {
    pub total: u32,
    pub valid: u32,
    pub invalid: u32,
}

/// Response from `kam validate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidateResponse {
    pub summary: ValidationSummary,
    /// Rows placed in the staging buffer (invalid CA rows).
    pub staged: Vec<StagedRecord>,
    pub log: AuditEntry,
}

/// A staging buffer row as listed by `kam staged list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StagedRow {
    /// Matching key, absent for rows with no usable identifier.
    pub key: Option<String>,
    pub selected: bool,
    #[serde(flatten)]
    pub row: StagedRecord,
}

/// Response from `kam staged select` / `kam staged deselect`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SelectionResponse {
    pub state: WorkflowState,
    pub staged: u32,
    pub selected: Vec<String>,
}

/// Response from `kam commit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommitResponse {
    pub inserted_count: u32,
    pub skipped_count: u32,
    pub master_total: u32,
    /// Whether the updated master roster was written back to its source.
    pub persisted: bool,
    pub remaining_staged: u32,
    pub log: AuditEntry,
}

/// Response from `kam cancel`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CancelResponse {
    pub discarded: u32,
    pub log: AuditEntry,
}

/// Response from `kam sync`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SyncResponse {
    pub atm_count: u32,
    pub ca_count: u32,
    pub log: AuditEntry,
}

/// Response from `kam progress`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgressResponse {
    pub percentage: u8,
    pub summary: ValidationSummary,
}

/// Response from `kam compare-karyawan`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompareResponse {
    pub summary: ValidationSummary,
    /// Employee rows with no counterpart in the master roster.
    pub missing: Vec<StagedRecord>,
}
