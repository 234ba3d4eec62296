use crate::relation_trimming::domain::CanonicalRecord;
use crate::shared::error::TrimError;
use crate::shared::Result;
use serde_json::Value;
use std::cmp::Ordering;

/// Direction of the priority sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    /// Highest value first (default)
    #[default]
    Descending,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(format!(
                "Invalid sort order: {}. Please specify 'asc' or 'desc'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

/// RowPriority policy deciding which rows are evaluated first
///
/// The redundancy filter lets the earliest row represent a lineage pair,
/// so the row order is the priority. This policy makes that order explicit:
/// rows are stably sorted on one passthrough column.
///
/// Comparison rules:
/// 1. numbers compare numerically, strings lexically, booleans false < true
/// 2. rows without a comparable value (missing, null, arrays, objects, or a
///    type different from the first comparable value) go last, in input order
/// 3. ties keep input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPriority {
    key: String,
    order: SortOrder,
}

impl RowPriority {
    pub fn new(key: impl Into<String>, order: SortOrder) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(TrimError::Validation {
                message: "Priority column name must not be empty".to_string(),
            }
            .into());
        }
        Ok(Self { key, order })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Stably reorders `rows` by priority
    ///
    /// Runs on canonical rows, after directions have been validated, so
    /// errors always name the row's position in the input table.
    pub fn apply(&self, rows: &mut [CanonicalRecord]) {
        let kind = rows
            .iter()
            .find_map(|row| SortKey::of(row.extras.get(&self.key)))
            .map(|key| key.kind());

        rows.sort_by(|a, b| {
            let a = SortKey::of(a.extras.get(&self.key)).filter(|k| Some(k.kind()) == kind);
            let b = SortKey::of(b.extras.get(&self.key)).filter(|k| Some(k.kind()) == kind);
            match (a, b) {
                (Some(a), Some(b)) => match self.order {
                    SortOrder::Ascending => a.compare(&b),
                    SortOrder::Descending => b.compare(&a),
                },
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
    }
}

/// A comparable view of one passthrough value
#[derive(Debug, Clone, PartialEq)]
enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
    Flag(bool),
}

impl<'a> SortKey<'a> {
    fn of(value: Option<&'a Value>) -> Option<Self> {
        match value? {
            Value::Number(n) => n.as_f64().filter(|f| !f.is_nan()).map(SortKey::Number),
            Value::String(s) => Some(SortKey::Text(s)),
            Value::Bool(b) => Some(SortKey::Flag(*b)),
            _ => None,
        }
    }

    fn kind(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Text(_) => 1,
            SortKey::Flag(_) => 2,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Flag(a), SortKey::Flag(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}
