//! # kam-config
//!
//! Layered configuration loading for `kam` using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KAM_*` prefix, `__` as separator)
//! 2. Project-level `.kam/config.toml`
//! 3. User-level `~/.config/kam/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KAM_SOURCES__ATM_PATH` -> `sources.atm_path`,
//! `KAM_GENERAL__ACTOR` -> `general.actor`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use kam_config::KamConfig;
//!
//! let config = KamConfig::load_with_dotenv(Path::new(".")).expect("config");
//!
//! if config.sources.atm_is_file_backed() {
//!     println!("ATM roster: {}", config.sources.atm_path);
//! }
//! ```

mod audit;
mod error;
mod general;
mod sources;

pub use audit::AuditConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use sources::SourcesConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the project root.
pub const PROJECT_CONFIG_FILE: &str = ".kam/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KamConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl KamConfig {
    /// Load configuration for the project rooted at `project_root`.
    ///
    /// Does NOT read `.env` -- use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_for(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after exporting `<project_root>/.env`, if present.
    ///
    /// Variables already set in the process environment are not overridden.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        let _ = dotenvy::from_path(project_root.join(".env"));
        Self::load_for(project_root)
    }

    /// Build the figment provider chain for the project at `project_root`.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("KAM_").split("__"))
    }

    /// Reject values that would make the workflow misbehave.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.actor.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.actor".to_string(),
                reason: "must not be blank".to_string(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.general.state_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.state_dir".to_string(),
                reason: "must not be blank".to_string(),
            });
        }
        if self.audit.enabled && self.audit.log_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "audit.log_file".to_string(),
                reason: "must not be blank while the audit log is enabled".to_string(),
            });
        }
        Ok(())
    }

    /// State directory resolved against `project_root`.
    pub fn state_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.general.state_dir)
    }

    /// Audit log path resolved against `project_root`.
    pub fn audit_log_path(&self, project_root: &Path) -> PathBuf {
        self.state_dir(project_root).join(&self.audit.log_file)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kam").join("config.toml"))
    }
}
