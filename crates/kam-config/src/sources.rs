//! Roster data-source locations.
//!
//! An empty path means the built-in mock roster is used for that source.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// JSON file holding the ATM master roster.
    #[serde(default)]
    pub atm_path: String,

    /// JSON file holding the CA candidate roster.
    #[serde(default)]
    pub ca_path: String,

    /// JSON file holding the employee roster used for comparison reports.
    #[serde(default)]
    pub karyawan_path: String,
}

impl SourcesConfig {
    /// Whether the master roster is file-backed, and so can be written back on commit.
    pub fn atm_is_file_backed(&self) -> bool {
        !self.atm_path.trim().is_empty()
    }

    pub fn ca_is_file_backed(&self) -> bool {
        !self.ca_path.trim().is_empty()
    }

    pub fn karyawan_is_file_backed(&self) -> bool {
        !self.karyawan_path.trim().is_empty()
    }

    /// Whether every roster comes from a file rather than mock data.
    pub fn is_configured(&self) -> bool {
        self.atm_is_file_backed() && self.ca_is_file_backed()
    }
}
