//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default actor recorded in audit entries.
fn default_actor() -> String {
    "system".to_string()
}

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

/// Default state directory, relative to the project root.
fn default_state_dir() -> String {
    ".kam".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Actor name used when `--actor` is not given.
    #[serde(default = "default_actor")]
    pub actor: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Directory holding the staging buffer and the audit log.
    #[serde(default = "default_state_dir")]
    pub state_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            actor: default_actor(),
            default_limit: default_limit(),
            state_dir: default_state_dir(),
        }
    }
}
