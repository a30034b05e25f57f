use anyhow::Context;
use kam_core::responses::CompareResponse;
use kam_reconcile::diff_karyawan_to_atm;
use kam_source::fetch_pair;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Report employee-roster rows missing from ATM. Nothing is staged or logged.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pair = fetch_pair(&ctx.atm, &ctx.karyawan)
        .await
        .context("failed to load roster data")?;

    let outcome = diff_karyawan_to_atm(&pair.source, &pair.master);
    let summary = outcome.summary();
    let mut missing = outcome.invalid;
    missing.truncate(flags.row_limit(ctx.config.general.default_limit));

    output(&CompareResponse { summary, missing }, flags.format)
}
