use std::path::Path;

use anyhow::Context;
use kam_config::KamConfig;
use kam_core::entities::validate_actor;
use kam_source::{AuditLog, ConfiguredSource, MockSource, StagingStore};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: KamConfig,
    pub atm: ConfiguredSource,
    pub ca: ConfiguredSource,
    pub karyawan: ConfiguredSource,
    pub staging: StagingStore,
    pub audit: AuditLog,
}

impl AppContext {
    /// Resolve sources and state files against the project root.
    pub fn init(project_root: &Path, config: KamConfig) -> anyhow::Result<Self> {
        let sources = &config.sources;
        let atm = ConfiguredSource::from_path(&sources.atm_path, project_root, MockSource::atm());
        let ca = ConfiguredSource::from_path(&sources.ca_path, project_root, MockSource::ca());
        let karyawan = ConfiguredSource::from_path(
            &sources.karyawan_path,
            project_root,
            MockSource::karyawan(),
        );

        tracing::debug!(
            atm_file = sources.atm_is_file_backed(),
            ca_file = sources.ca_is_file_backed(),
            karyawan_file = sources.karyawan_is_file_backed(),
            root = %project_root.display(),
            "Resolved roster sources"
        );

        let staging = StagingStore::new(&config.state_dir(project_root));
        let audit = if config.audit.enabled {
            AuditLog::new(config.audit_log_path(project_root))
                .context("failed to open audit log")?
        } else {
            AuditLog::disabled()
        };

        Ok(Self {
            config,
            atm,
            ca,
            karyawan,
            staging,
            audit,
        })
    }

    /// The actor for audit entries: the `--actor` override, else `general.actor`.
    pub fn actor(&self, override_actor: Option<&str>) -> anyhow::Result<String> {
        let raw = override_actor.unwrap_or(&self.config.general.actor);
        validate_actor(raw).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::AppContext;
    use kam_config::KamConfig;

    #[test]
    fn defaults_use_built_in_rosters() {
        let temp = TempDir::new().expect("tempdir should create");
        let ctx = AppContext::init(temp.path(), KamConfig::default())
            .expect("context should init");

        assert!(!ctx.atm.is_file_backed());
        assert!(ctx.audit.is_enabled());
        assert_eq!(ctx.staging.path(), temp.path().join(".kam/staging.json"));
        assert_eq!(ctx.audit.path(), temp.path().join(".kam/audit.jsonl"));
    }

    #[test]
    fn actor_override_wins_and_is_trimmed() {
        let temp = TempDir::new().expect("tempdir should create");
        let ctx = AppContext::init(temp.path(), KamConfig::default())
            .expect("context should init");

        assert_eq!(ctx.actor(None).expect("default actor"), "system");
        assert_eq!(ctx.actor(Some("  rina ")).expect("override"), "rina");
        assert!(ctx.actor(Some("   ")).is_err());
    }

    #[test]
    fn disabled_audit_skips_log_file() {
        let temp = TempDir::new().expect("tempdir should create");
        let mut config = KamConfig::default();
        config.audit.enabled = false;
        let ctx = AppContext::init(temp.path(), config).expect("context should init");
        assert!(!ctx.audit.is_enabled());
    }
}
