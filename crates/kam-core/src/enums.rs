//! Source tags, classification status, audit actions, and workflow state.
//!
//! Wire values follow the roster API shape: source tags and audit actions are
//! upper-case (`"CA"`, `"VALIDATE"`), the invalid status is `"tidak valid"`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RecordSource
// ---------------------------------------------------------------------------

/// Which roster a record was fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordSource {
    /// Candidate roster being validated.
    Ca,
    /// Authoritative master roster.
    Atm,
    /// Employee roster, compared for reporting only.
    Karyawan,
}

impl RecordSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ca => "CA",
            Self::Atm => "ATM",
            Self::Karyawan => "KARYAWAN",
        }
    }

    /// Whether rows from this source may be committed into the master roster.
    #[must_use]
    pub const fn is_committable(self) -> bool {
        matches!(self, Self::Ca)
    }
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RecordStatus
// ---------------------------------------------------------------------------

/// Classification of a source record against the master key set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RecordStatus {
    /// The record's matching key is present in the master roster.
    #[serde(rename = "valid")]
    Valid,
    /// The key is absent from the master roster, or the record has no key.
    #[serde(rename = "tidak valid")]
    Invalid,
}

impl RecordStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "tidak valid",
        }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// State-changing operation recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    /// A diff of the candidate roster against the master roster.
    Validate,
    /// A commit of selected staged rows into the master roster.
    Generate,
    /// A refetch of both rosters.
    Sync,
    /// The staging buffer was discarded.
    Cancel,
}

impl AuditAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validate => "VALIDATE",
            Self::Generate => "GENERATE",
            Self::Sync => "SYNC",
            Self::Cancel => "CANCEL",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WorkflowState
// ---------------------------------------------------------------------------

/// Whether the staging buffer currently holds rows. Derived from the buffer,
/// never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    Idle,
    Staged,
}

impl WorkflowState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Staged => "staged",
        }
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
