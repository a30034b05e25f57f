use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AuditAction;
use crate::errors::CoreError;
use crate::ids::{PREFIX_AUDIT, generate_id};

/// An append-only audit log entry recording one state-changing operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: String,
    /// Who triggered the operation.
    pub actor: String,
    pub action: AuditAction,
    /// Records affected: invalid rows for `VALIDATE`, inserted rows for `GENERATE`.
    pub count: u32,
    /// Wall-clock duration of the operation.
    pub duration_ms: u64,
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    /// Create an entry with a fresh ID, stamped now.
    #[must_use]
    pub fn record(actor: &str, action: AuditAction, count: u32, duration_ms: u64) -> Self {
        Self {
            id: generate_id(PREFIX_AUDIT),
            actor: actor.to_string(),
            action,
            count,
            duration_ms,
            timestamp: Utc::now(),
        }
    }
}

/// Normalize an actor name for audit entries.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the name is blank.
pub fn validate_actor(actor: &str) -> Result<String, CoreError> {
    let trimmed = actor.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("actor must not be blank".to_string()));
    }
    Ok(trimmed.to_string())
}
