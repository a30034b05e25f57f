//! Audit entries for the workflow actions that do not classify or commit.

use std::time::Duration;

use kam_core::entities::AuditEntry;
use kam_core::enums::AuditAction;

use crate::count_u32;
use crate::staging::StagingBuffer;

/// Discard the staging buffer. The `CANCEL` entry counts the dropped rows.
pub fn cancel(actor: &str, buffer: &mut StagingBuffer) -> AuditEntry {
    let discarded = buffer.clear();
    tracing::info!(actor, discarded, "Discarded staging buffer");
    AuditEntry::record(actor, AuditAction::Cancel, count_u32(discarded), 0)
}

/// `SYNC` entry for a refetch of both rosters that returned `fetched` rows.
#[must_use]
pub fn record_sync(actor: &str, fetched: usize, duration: Duration) -> AuditEntry {
    let duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    AuditEntry::record(actor, AuditAction::Sync, count_u32(fetched), duration_ms)
}
