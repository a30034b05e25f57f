use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Validate(args) => commands::validate::handle(&args, ctx, flags).await,
        Commands::Staged { action } => commands::staged::handle(&action, ctx, flags),
        Commands::Commit(args) => commands::commit::handle(&args, ctx, flags).await,
        Commands::Cancel(args) => commands::cancel::handle(&args, ctx, flags),
        Commands::Sync(args) => commands::sync::handle(&args, ctx, flags).await,
        Commands::Progress => commands::progress::handle(ctx, flags).await,
        Commands::CompareKaryawan => commands::compare::handle(ctx, flags).await,
        Commands::Log(args) => commands::log::handle(&args, ctx, flags),
    }
}
