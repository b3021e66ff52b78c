use std::collections::{hash_map::Entry, HashMap};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{BucketedRecord, DateRange, Period, TransactionRecord};
use crate::time::parse_calendar_date;

/// Which records survive the range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Window {
    All,
    Range(DateRange),
    /// A bound was supplied but could not be read; nothing can match it.
    Nothing,
}

/// Range-filters, tags and deduplicates transaction records.
///
/// Output holds one entry per id. The first occurrence fixes the position,
/// the last occurrence supplies the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucketer {
    period: Option<Period>,
    window: Window,
}

impl Bucketer {
    pub fn new(period: Period) -> Self {
        Self {
            period: Some(period),
            window: Window::All,
        }
    }

    /// Resolves a wire period name. Unknown names leave every record untagged.
    pub fn for_period_name(name: &str) -> Self {
        let period = Period::parse(name);
        if period.is_none() {
            warn!(period = name, "unknown period; records will carry no periodKey");
        }
        Self {
            period,
            window: Window::All,
        }
    }

    pub fn period(&self) -> Option<Period> {
        self.period
    }

    /// Restricts output to records dated inside `range`, inclusive.
    pub fn with_range(mut self, range: Option<DateRange>) -> Self {
        self.window = range.map_or(Window::All, Window::Range);
        self
    }

    /// Applies raw filter-form bounds.
    ///
    /// Filtering only happens when both bounds are non-blank. A bound that
    /// does not parse matches nothing, and an inverted pair matches nothing.
    pub fn with_bounds(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        let start = start.map(str::trim).filter(|s| !s.is_empty());
        let end = end.map(str::trim).filter(|s| !s.is_empty());
        self.window = match (start, end) {
            (Some(start_raw), Some(end_raw)) => {
                match (parse_calendar_date(start_raw), parse_calendar_date(end_raw)) {
                    (Some(start), Some(end)) => Window::Range(DateRange { start, end }),
                    _ => {
                        warn!(
                            start = start_raw,
                            end = end_raw,
                            "unreadable range bound; no record can match"
                        );
                        Window::Nothing
                    }
                }
            }
            (None, None) => Window::All,
            _ => {
                debug!("only one range bound supplied; range filter skipped");
                Window::All
            }
        };
        self
    }

    pub fn bucket(&self, records: &[TransactionRecord]) -> Vec<BucketedRecord> {
        self.collect(records.iter().cloned())
    }

    /// Buckets a raw JSON body. Anything other than an array yields nothing;
    /// array entries that are not transaction objects are skipped.
    pub fn bucket_value(&self, value: &Value) -> Vec<BucketedRecord> {
        let Some(items) = value.as_array() else {
            warn!("transactions payload is not a list; nothing to bucket");
            return Vec::new();
        };
        let records = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match TransactionRecord::deserialize(item) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(index, error = %err, "skipping malformed transaction entry");
                    None
                }
            });
        self.collect(records)
    }

    fn collect<I>(&self, records: I) -> Vec<BucketedRecord>
    where
        I: IntoIterator<Item = TransactionRecord>,
    {
        let mut slots: HashMap<i64, usize> = HashMap::new();
        let mut out: Vec<BucketedRecord> = Vec::new();
        let mut dropped = 0usize;

        for record in records {
            let Some(date) = record.calendar_date() else {
                warn!(id = record.id, date = %record.date, "invalid date for transaction; dropped");
                dropped += 1;
                continue;
            };
            if !self.admits(date) {
                continue;
            }
            let tagged = BucketedRecord {
                period_key: self.period.map(|period| period.key_for(date)),
                record,
            };
            match slots.entry(tagged.record.id) {
                Entry::Occupied(slot) => out[*slot.get()] = tagged,
                Entry::Vacant(slot) => {
                    slot.insert(out.len());
                    out.push(tagged);
                }
            }
        }

        debug!(
            period = self.period.map(Period::as_str).unwrap_or("none"),
            kept = out.len(),
            dropped,
            "bucketed transactions"
        );
        out
    }

    fn admits(&self, date: chrono::NaiveDate) -> bool {
        match &self.window {
            Window::All => true,
            Window::Range(range) => range.contains(date),
            Window::Nothing => false,
        }
    }
}

/// Tags each record with its `period` bucket, optionally restricted to `range`.
pub fn bucket(
    records: &[TransactionRecord],
    period: Period,
    range: Option<DateRange>,
) -> Vec<BucketedRecord> {
    Bucketer::new(period).with_range(range).bucket(records)
}

/// Raw-input form of [`bucket`] taking the API body and filter-form strings.
pub fn bucket_value(
    value: &Value,
    period: &str,
    start: Option<&str>,
    end: Option<&str>,
) -> Vec<BucketedRecord> {
    Bucketer::for_period_name(period)
        .with_bounds(start, end)
        .bucket_value(value)
}
