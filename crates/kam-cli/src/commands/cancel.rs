use anyhow::Context;
use kam_core::responses::CancelResponse;
use kam_reconcile::cancel;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ActorArgs;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(args: &ActorArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = ctx.actor(args.actor.as_deref())?;
    let mut buffer = ctx.staging.load().context("failed to load staging buffer")?;

    let log = cancel(&actor, &mut buffer);
    ctx.staging.clear().context("failed to clear staging buffer")?;
    ctx.audit.append(&log).context("failed to write audit log")?;

    output(
        &CancelResponse {
            discarded: log.count,
            log,
        },
        flags.format,
    )
}
