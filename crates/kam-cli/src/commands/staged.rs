use anyhow::Context;
use kam_core::responses::SelectionResponse;
use kam_reconcile::StagingBuffer;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StagedCommands;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(action: &StagedCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut buffer = ctx.staging.load().context("failed to load staging buffer")?;

    match action {
        StagedCommands::List { search } => {
            let mut rows = buffer.listing(search.as_deref());
            rows.truncate(flags.row_limit(ctx.config.general.default_limit));
            output(&rows, flags.format)
        }
        StagedCommands::Select { keys, all } => {
            if *all {
                let selected = buffer.select_all();
                tracing::debug!(selected, "Selected every keyed row");
            } else {
                apply_selection(&mut buffer, keys)?;
            }
            ctx.staging.save(&buffer).context("failed to save staging buffer")?;
            output(&selection_response(&buffer), flags.format)
        }
        StagedCommands::Deselect { keys, all } => {
            if *all {
                buffer.clear_selection();
            } else {
                for key in keys {
                    if !buffer.deselect(key) {
                        tracing::warn!(%key, "Key was not selected");
                    }
                }
            }
            ctx.staging.save(&buffer).context("failed to save staging buffer")?;
            output(&selection_response(&buffer), flags.format)
        }
    }
}

/// Select every key or none: an unknown key leaves the selection untouched.
fn apply_selection(buffer: &mut StagingBuffer, keys: &[String]) -> anyhow::Result<()> {
    let mut next = buffer.clone();
    for key in keys {
        next.select(key)?;
    }
    *buffer = next;
    Ok(())
}

fn selection_response(buffer: &StagingBuffer) -> SelectionResponse {
    SelectionResponse {
        state: buffer.state(),
        staged: u32::try_from(buffer.len()).unwrap_or(u32::MAX),
        selected: buffer.selected_keys().map(str::to_string).collect(),
    }
}
