use anyhow::Context;
use kam_core::responses::ValidateResponse;
use kam_reconcile::{StagingBuffer, run_validation};
use kam_source::fetch_pair;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ActorArgs;
use crate::context::AppContext;
use crate::output::output;

/// Diff CA against ATM, replace the staging buffer, and log a `VALIDATE` entry.
pub async fn handle(args: &ActorArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = ctx.actor(args.actor.as_deref())?;
    let pair = fetch_pair(&ctx.atm, &ctx.ca)
        .await
        .context("failed to load roster data")?;

    let run = run_validation(&actor, &pair.source, &pair.master);
    let buffer = StagingBuffer::from_run(&run);
    ctx.staging.save(&buffer).context("failed to save staging buffer")?;
    ctx.audit.append(&run.log).context("failed to write audit log")?;

    tracing::info!(
        actor = %actor,
        total = run.summary.total,
        invalid = run.summary.invalid,
        staged = buffer.len(),
        "Validation complete"
    );

    let response = ValidateResponse {
        summary: run.summary,
        staged: buffer.rows().to_vec(),
        log: run.log,
    };
    output(&response, flags.format)
}
