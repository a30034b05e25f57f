//! Reconciliation progress percentage for display.

use kam_core::entities::AccountManagerRecord;
use kam_core::responses::ValidationSummary;

use crate::diff::diff;

/// Share of `source` rows whose key exists in `master`, rounded half-up to a
/// whole percent. An empty source yields 0.
#[must_use]
pub fn reconciliation_progress(
    source: &[AccountManagerRecord],
    master: &[AccountManagerRecord],
) -> u8 {
    summary_progress(&diff(source, master).summary())
}

/// Progress for a summary the caller already computed.
#[must_use]
pub fn summary_progress(summary: &ValidationSummary) -> u8 {
    percentage(summary.valid, summary.total)
}

fn percentage(part: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let part = u64::from(part);
    let total = u64::from(total);
    let rounded = (part * 200 + total) / (total * 2);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}
