use clap::{Args, Subcommand};

use crate::cli::subcommands::StagedCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Diff the CA roster against ATM and stage the missing rows.
    Validate(ActorArgs),
    /// Review and select staged rows.
    Staged {
        #[command(subcommand)]
        action: StagedCommands,
    },
    /// Append the selected staged rows to the ATM roster.
    Commit(ActorArgs),
    /// Discard the staging buffer.
    Cancel(ActorArgs),
    /// Refetch both rosters and record a sync.
    Sync(ActorArgs),
    /// Share of CA rows already present in ATM.
    Progress,
    /// Report employee-roster rows missing from ATM (read-only).
    CompareKaryawan,
    /// Show audit log entries, newest first.
    Log(LogArgs),
}

/// Actor override for commands that write an audit entry.
#[derive(Clone, Debug, Default, Args)]
pub struct ActorArgs {
    /// Name recorded in the audit log (defaults to general.actor)
    #[arg(long)]
    pub actor: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct LogArgs {
    /// Only entries with this action (validate, generate, sync, cancel)
    #[arg(long)]
    pub action: Option<String>,

    /// Only entries by this actor
    #[arg(long)]
    pub actor: Option<String>,
}
