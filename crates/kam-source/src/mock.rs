//! Built-in rosters used when no file source is configured.

use chrono::{DateTime, TimeZone, Utc};

use kam_core::entities::AccountManagerRecord;

use crate::error::SourceError;
use crate::source::RosterSource;

/// In-memory roster. Every fetch returns a clone of the same rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSource {
    label: String,
    rows: Vec<AccountManagerRecord>,
}

impl MockSource {
    #[must_use]
    pub fn new(label: impl Into<String>, rows: Vec<AccountManagerRecord>) -> Self {
        Self {
            label: label.into(),
            rows,
        }
    }

    /// The master roster. One row is known only by its sales ID.
    #[must_use]
    pub fn atm() -> Self {
        Self::new(
            "ATM",
            vec![
                am("850001", "AM-JKT-001", "Rina Wulandari", "Regional 2", "Jakarta Selatan"),
                am("", "AM-JKT-002", "Budi Santoso", "Regional 2", "Jakarta Barat"),
                am("850003", "AM-BDG-001", "Sari Lestari", "Regional 3", "Bandung"),
            ],
        )
    }

    /// The candidate roster. Contains a matched row, a row matched only by
    /// sales ID, two missing rows, and a row without identifiers.
    #[must_use]
    pub fn ca() -> Self {
        Self::new(
            "CA",
            vec![
                am("850001", "AM-JKT-001", "Rina Wulandari", "Regional 2", "Jakarta Selatan"),
                am("", "AM-JKT-002", "Budi Santoso", "Regional 2", "Jakarta Barat"),
                am("850004", "AM-SBY-001", "Dewi Anggraini", "Regional 5", "Surabaya"),
                am("850005", "AM-MDN-001", "Andi Pratama", "Regional 1", "Medan"),
                am("", "", "Tanpa Identitas", "Regional 4", "Semarang"),
            ],
        )
    }

    /// The employee roster compared read-only against the master.
    #[must_use]
    pub fn karyawan() -> Self {
        Self::new(
            "KARYAWAN",
            vec![
                am("", "AM-JKT-002", "Budi Santoso", "Regional 2", "Jakarta Barat"),
                am("850003", "", "Sari Lestari", "Regional 3", "Bandung"),
                am("850010", "", "Yusuf Hidayat", "Regional 6", "Balikpapan"),
                am("", "", "Karyawan Baru", "Regional 7", "Makassar"),
            ],
        )
    }

    #[must_use]
    pub fn rows(&self) -> &[AccountManagerRecord] {
        &self.rows
    }
}

impl RosterSource for MockSource {
    fn label(&self) -> &str {
        &self.label
    }

    async fn fetch(&self) -> Result<Vec<AccountManagerRecord>, SourceError> {
        tracing::debug!(source = %self.label, rows = self.rows.len(), "Serving built-in roster");
        Ok(self.rows.clone())
    }
}

fn am(nik: &str, id_sales: &str, name: &str, region: &str, witel: &str) -> AccountManagerRecord {
    let mut record = AccountManagerRecord::with_ids(nik, id_sales)
        .named(name)
        .located(region, witel);
    record.updated_at = seeded_at();
    record
}

fn seeded_at() -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).single()
}
