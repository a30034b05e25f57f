use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::AccountManagerRecord;
use crate::enums::{RecordSource, RecordStatus};

/// A roster row after classification, held in the staging buffer for review.
///
/// Serializes flat: the roster fields plus `sumber`, `status`, and `ts`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StagedRecord {
    #[serde(flatten)]
    pub record: AccountManagerRecord,
    #[serde(rename = "sumber")]
    pub source: RecordSource,
    pub status: RecordStatus,
    /// When the classification was computed.
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
}

impl StagedRecord {
    #[must_use]
    pub const fn new(
        record: AccountManagerRecord,
        source: RecordSource,
        status: RecordStatus,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            record,
            source,
            status,
            timestamp,
        }
    }

    /// Whether this row may be committed into the master roster.
    #[must_use]
    pub const fn is_commit_candidate(&self) -> bool {
        self.source.is_committable() && !self.status.is_valid()
    }

    /// Drop the staging metadata, keeping the master's canonical field shape.
    #[must_use]
    pub fn into_record(self) -> AccountManagerRecord {
        self.record
    }
}
