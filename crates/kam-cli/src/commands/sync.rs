use std::time::Instant;

use anyhow::Context;
use kam_core::responses::SyncResponse;
use kam_reconcile::record_sync;
use kam_source::fetch_pair;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ActorArgs;
use crate::context::AppContext;
use crate::output::output;

/// Refetch both rosters and record a `SYNC` entry. The staging buffer is untouched.
pub async fn handle(args: &ActorArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = ctx.actor(args.actor.as_deref())?;
    let started = Instant::now();
    let pair = fetch_pair(&ctx.atm, &ctx.ca)
        .await
        .context("failed to load roster data")?;

    let log = record_sync(&actor, pair.total_rows(), started.elapsed());
    ctx.audit.append(&log).context("failed to write audit log")?;

    let response = SyncResponse {
        atm_count: u32::try_from(pair.master.len()).unwrap_or(u32::MAX),
        ca_count: u32::try_from(pair.source.len()).unwrap_or(u32::MAX),
        log,
    };
    output(&response, flags.format)
}
