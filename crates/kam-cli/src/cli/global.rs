use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Aligned text tables
    Table,
    /// Single-line JSON
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    pub project: Option<String>,
}

impl GlobalFlags {
    /// Rows to show in listings: `--limit` when given, else `fallback`.
    /// A zero limit is treated as unset.
    #[must_use]
    pub fn row_limit(&self, fallback: u32) -> usize {
        let limit = self.limit.filter(|limit| *limit > 0).unwrap_or(fallback);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::{GlobalFlags, OutputFormat};

    fn flags(limit: Option<u32>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit,
            quiet: false,
            verbose: false,
            project: None,
        }
    }

    #[test]
    fn flag_overrides_fallback() {
        assert_eq!(flags(Some(5)).row_limit(20), 5);
    }

    #[test]
    fn fallback_used_when_unset_or_zero() {
        assert_eq!(flags(None).row_limit(20), 20);
        assert_eq!(flags(Some(0)).row_limit(20), 20);
    }
}
