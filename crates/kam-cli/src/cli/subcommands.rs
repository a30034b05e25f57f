use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum StagedCommands {
    /// List staged rows with their key and selection flag.
    List {
        /// Case-insensitive filter over NIK, sales ID, name, region, witel
        #[arg(long)]
        search: Option<String>,
    },
    /// Add rows to the commit selection by matching key (e.g. nik:850004).
    Select {
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        keys: Vec<String>,
        /// Select every keyed row
        #[arg(long)]
        all: bool,
    },
    /// Remove rows from the commit selection.
    Deselect {
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        keys: Vec<String>,
        /// Clear the whole selection
        #[arg(long)]
        all: bool,
    },
}
