use anyhow::Context;
use kam_core::responses::CommitResponse;
use kam_reconcile::commit;
use kam_source::{RosterSource, RosterStore};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ActorArgs;
use crate::context::AppContext;
use crate::output::output;

/// Commit the selected staged rows against a fresh read of the ATM roster.
pub async fn handle(args: &ActorArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = ctx.actor(args.actor.as_deref())?;
    let mut buffer = ctx.staging.load().context("failed to load staging buffer")?;
    let selected = buffer.selected_records();
    if selected.is_empty() {
        anyhow::bail!("no staged rows selected; run 'kam staged select <key>' first");
    }

    let Some(atm_path) = ctx.atm.path() else {
        anyhow::bail!("ATM roster is built-in; set sources.atm_path to commit");
    };

    let master = ctx.atm.fetch().await.context("failed to load roster data")?;
    let outcome = commit(&actor, &selected, &master);

    // GENERATE is logged before the master file changes.
    ctx.audit.append(&outcome.log).context("failed to write audit log")?;

    let persisted = if outcome.is_noop() {
        tracing::warn!(
            skipped = outcome.skipped_count,
            "Every selected row is already in the ATM roster; nothing inserted"
        );
        false
    } else {
        RosterStore::new(atm_path)
            .save(&outcome.updated_master)
            .await
            .with_context(|| {
                format!(
                    "audit entry {} was recorded but the ATM roster could not be saved",
                    outcome.log.id
                )
            })?;
        true
    };

    buffer.retain_uncommitted(&outcome.updated_master);
    ctx.staging.save(&buffer).context("failed to save staging buffer")?;

    let response = CommitResponse {
        inserted_count: outcome.inserted_count,
        skipped_count: outcome.skipped_count,
        master_total: u32::try_from(outcome.updated_master.len()).unwrap_or(u32::MAX),
        persisted,
        remaining_staged: u32::try_from(buffer.len()).unwrap_or(u32::MAX),
        log: outcome.log,
    };
    output(&response, flags.format)
}
