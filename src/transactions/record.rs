use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::time::parse_calendar_date;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Snapshot of a transaction as received from the server.
///
/// Fields the dashboard does not interpret (such as `goal_id`) are kept in
/// `extra` so re-serializing yields the original object. Only `id` and
/// `date` are required; the server stores the other columns as nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<TransactionKind>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    /// Raw ISO-8601 date string; may be malformed.
    pub date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TransactionRecord {
    pub fn new(
        id: i64,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind: Some(kind),
            category: Some(category.into()),
            amount: Some(amount),
            date: date.into(),
            extra: Map::new(),
        }
    }

    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }

    pub fn is_income(&self) -> bool {
        self.kind == Some(TransactionKind::Income)
    }
}

/// A record tagged with the bucket it falls into.
///
/// Serializes flat: the record's own fields plus `periodKey`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketedRecord {
    #[serde(flatten)]
    pub record: TransactionRecord,
    #[serde(
        rename = "periodKey",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub period_key: Option<String>,
}

impl BucketedRecord {
    pub fn id(&self) -> i64 {
        self.record.id
    }
}
