//! Concurrent fetch of the two rosters a reconciliation compares.

use kam_core::entities::AccountManagerRecord;

use crate::error::SourceError;
use crate::source::RosterSource;

/// Both snapshots of one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterPair {
    pub master: Vec<AccountManagerRecord>,
    pub source: Vec<AccountManagerRecord>,
}

impl RosterPair {
    /// Rows fetched across both rosters.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.master.len() + self.source.len()
    }
}

/// Fetch `master` and `source` concurrently. Fails if either fetch fails;
/// a partial pair is never returned.
///
/// # Errors
///
/// Returns the first `SourceError` from either fetch.
pub async fn fetch_pair<M, S>(master: &M, source: &S) -> Result<RosterPair, SourceError>
where
    M: RosterSource,
    S: RosterSource,
{
    let (master_rows, source_rows) = tokio::try_join!(master.fetch(), source.fetch())?;
    tracing::debug!(
        master = master.label(),
        master_rows = master_rows.len(),
        source = source.label(),
        source_rows = source_rows.len(),
        "Fetched roster pair"
    );
    Ok(RosterPair {
        master: master_rows,
        source: source_rows,
    })
}
