use anyhow::Context;
use kam_core::entities::AuditEntry;
use kam_core::enums::AuditAction;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LogArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(args: &LogArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let action = args
        .action
        .as_deref()
        .map(|value| parse_enum::<AuditAction>(value, "action"))
        .transpose()?;

    let entries = ctx
        .audit
        .read_recent(usize::MAX)
        .context("failed to read audit log")?;
    let limit = flags.row_limit(ctx.config.general.default_limit);
    let filtered = filter_entries(entries, action, args.actor.as_deref(), limit);
    output(&filtered, flags.format)
}

fn filter_entries(
    entries: Vec<AuditEntry>,
    action: Option<AuditAction>,
    actor: Option<&str>,
    limit: usize,
) -> Vec<AuditEntry> {
    entries
        .into_iter()
        .filter(|entry| action.is_none_or(|action| entry.action == action))
        .filter(|entry| actor.is_none_or(|actor| entry.actor == actor.trim()))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use kam_core::entities::AuditEntry;
    use kam_core::enums::AuditAction;

    use super::filter_entries;

    fn entries() -> Vec<AuditEntry> {
        vec![
            AuditEntry::record("rina", AuditAction::Generate, 1, 4),
            AuditEntry::record("budi", AuditAction::Validate, 3, 9),
            AuditEntry::record("rina", AuditAction::Validate, 2, 7),
        ]
    }

    #[test]
    fn filters_by_action_and_actor() {
        let filtered = filter_entries(entries(), Some(AuditAction::Validate), Some("rina"), 10);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].count, 2);
    }

    #[test]
    fn limit_keeps_newest() {
        let filtered = filter_entries(entries(), None, None, 2);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].action, AuditAction::Generate);
    }
}
