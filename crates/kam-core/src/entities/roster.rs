use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One account-manager roster row, from either the CA or the ATM roster.
///
/// Every attribute is optional: rows arrive from loosely-typed upstream
/// systems and blank identifiers are data, not errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AccountManagerRecord {
    /// Employee identifier (NIK).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nik_am: Option<String>,
    /// Sales identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_sales: Option<String>,
    #[serde(rename = "nama_am", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Sub-region (witel).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub witel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl AccountManagerRecord {
    /// Build a record carrying only its two identifiers.
    #[must_use]
    pub fn with_ids(nik_am: impl Into<String>, id_sales: impl Into<String>) -> Self {
        Self {
            nik_am: Some(nik_am.into()),
            id_sales: Some(id_sales.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn located(mut self, region: impl Into<String>, witel: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self.witel = Some(witel.into());
        self
    }

    /// Trimmed NIK, `None` when absent or blank.
    #[must_use]
    pub fn trimmed_nik(&self) -> Option<&str> {
        non_blank(self.nik_am.as_deref())
    }

    /// Trimmed sales ID, `None` when absent or blank.
    #[must_use]
    pub fn trimmed_id_sales(&self) -> Option<&str> {
        non_blank(self.id_sales.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
