//! Boundary adapter from loosely-typed roster JSON to `AccountManagerRecord`.
//!
//! Upstream systems disagree on field casing (`NIK_AM`, `nik_am`, `nikAm`).
//! Keys are compared after lowercasing and dropping `_`/`-`, so every variant
//! maps onto the one canonical shape the engine works with.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use kam_core::entities::AccountManagerRecord;

use crate::error::SourceError;

/// Extract roster rows from a document that is either a top-level array or an
/// object with a `data` array.
///
/// Rows that are not JSON objects are skipped with a warning.
///
/// # Errors
///
/// Returns `SourceError::Malformed` if the document has neither shape.
pub fn records_from_document(doc: &Value) -> Result<Vec<AccountManagerRecord>, SourceError> {
    let rows = match doc {
        Value::Array(rows) => rows,
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(rows)) => rows,
            _ => {
                return Err(SourceError::Malformed(
                    "expected an array or an object with a `data` array".to_string(),
                ));
            }
        },
        other => {
            return Err(SourceError::Malformed(format!(
                "expected an array, got {}",
                json_kind(other)
            )));
        }
    };

    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match row {
            Value::Object(fields) => records.push(record_from_fields(fields)),
            other => tracing::warn!(index, kind = json_kind(other), "Skipping non-object roster row"),
        }
    }
    Ok(records)
}

/// Map one JSON object onto the canonical record. Unknown fields are ignored.
///
/// When several aliases of one field are present, a non-blank value beats a
/// blank one, then the alias listed first in `field_alias` wins.
#[must_use]
pub fn record_from_fields(fields: &Map<String, Value>) -> AccountManagerRecord {
    let mut chosen: [Option<Candidate>; FIELD_COUNT] = Default::default();
    for (key, value) in fields {
        let Some((field, rank)) = field_alias(&canonical_key(key)) else {
            continue;
        };
        let Some(text) = scalar_text(value) else {
            continue;
        };
        let candidate = Candidate {
            blank: text.trim().is_empty(),
            rank,
            text,
        };
        let slot = &mut chosen[field as usize];
        if slot.as_ref().is_none_or(|current| candidate.beats(current)) {
            *slot = Some(candidate);
        }
    }

    let [nik_am, id_sales, name, region, witel, updated_at] = chosen.map(|c| c.map(|c| c.text));
    AccountManagerRecord {
        nik_am,
        id_sales,
        name,
        region,
        witel,
        updated_at: updated_at.and_then(|raw| parse_timestamp(&raw)),
    }
}

#[derive(Clone, Copy)]
enum Field {
    Nik,
    IdSales,
    Name,
    Region,
    Witel,
    UpdatedAt,
}

const FIELD_COUNT: usize = 6;

/// Canonical field and alias rank for a normalized key. Lower rank wins.
fn field_alias(canonical: &str) -> Option<(Field, u8)> {
    let alias = match canonical {
        "nikam" => (Field::Nik, 0),
        "nik" => (Field::Nik, 1),
        "idsales" => (Field::IdSales, 0),
        "namaam" => (Field::Name, 0),
        "nama" => (Field::Name, 1),
        "name" => (Field::Name, 2),
        "region" => (Field::Region, 0),
        "regional" => (Field::Region, 1),
        "witel" => (Field::Witel, 0),
        "updatedat" => (Field::UpdatedAt, 0),
        _ => return None,
    };
    Some(alias)
}

struct Candidate {
    blank: bool,
    rank: u8,
    text: String,
}

impl Candidate {
    fn beats(&self, current: &Self) -> bool {
        (self.blank, self.rank) < (current.blank, current.rank)
    }
}

fn canonical_key(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Strings pass through; numbers and booleans are stringified; anything else is absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parse RFC 3339, `YYYY-MM-DD HH:MM:SS`, or a bare date. Unparseable values
/// are dropped with a warning rather than rejecting the row.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Some(midnight.and_utc());
    }
    tracing::warn!(value = raw, "Dropping unparseable updated_at");
    None
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
