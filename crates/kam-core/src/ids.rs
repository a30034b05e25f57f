//! Prefixed ID generation.
//!
//! IDs look like `log-a3f8b2c1`: a short entity prefix and 8 lowercase hex
//! characters drawn from the OS random source.

use std::sync::atomic::{AtomicU32, Ordering};

/// Prefix for audit log entries.
pub const PREFIX_AUDIT: &str = "log";

static FALLBACK_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Generate a prefixed ID, e.g. `"log-a3f8b2c1"`.
///
/// Never fails: if the OS random source is unavailable the suffix is derived
/// from the clock and a process-wide counter instead.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    let mut bytes = [0u8; 4];
    let suffix = match getrandom::fill(&mut bytes) {
        Ok(()) => u32::from_be_bytes(bytes),
        Err(_) => fallback_suffix(),
    };
    format!("{prefix}-{suffix:08x}")
}

fn fallback_suffix() -> u32 {
    let nanos = chrono::Utc::now().timestamp_subsec_nanos();
    let count = FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed);
    nanos.rotate_left(7) ^ count.wrapping_mul(0x9E37_79B9)
}

/// Whether `id` has the `{prefix}-{8 hex}` shape.
#[cfg(test)]
pub(crate) fn is_prefixed_id(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|hex| {
            hex.len() == 8 && hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        })
}
