use anyhow::Context;
use kam_core::responses::ProgressResponse;
use kam_reconcile::{diff, summary_progress};
use kam_source::fetch_pair;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pair = fetch_pair(&ctx.atm, &ctx.ca)
        .await
        .context("failed to load roster data")?;

    let summary = diff(&pair.source, &pair.master).summary();
    let response = ProgressResponse {
        percentage: summary_progress(&summary),
        summary,
    };
    output(&response, flags.format)
}
