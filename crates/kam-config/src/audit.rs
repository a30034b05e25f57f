//! Audit log configuration.

use serde::{Deserialize, Serialize};

const fn default_enabled() -> bool {
    true
}

fn default_log_file() -> String {
    "audit.jsonl".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditConfig {
    /// Whether state-changing commands append to the audit log.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Log file name, relative to the state directory.
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            log_file: default_log_file(),
        }
    }
}
