use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{DashboardError, Result};
use crate::time::parse_calendar_date;

/// Inclusive calendar-date window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(DashboardError::InvalidRange(
                "start date cannot be after end date".into(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Validates the pair of optional date inputs from a filter form.
    ///
    /// Both blank means "no range". Supplying only one side is rejected.
    pub fn from_inputs(start: Option<&str>, end: Option<&str>) -> Result<Option<Self>> {
        let start = start.map(str::trim).filter(|s| !s.is_empty());
        let end = end.map(str::trim).filter(|s| !s.is_empty());
        match (start, end) {
            (None, None) => Ok(None),
            (Some(start), Some(end)) => {
                let start = parse_bound(start)?;
                let end = parse_bound(end)?;
                Self::new(start, end).map(Some)
            }
            _ => Err(DashboardError::InvalidRange(
                "provide both start and end dates or leave both empty".into(),
            )),
        }
    }

    /// First through last day of the month containing `today`.
    pub fn current_month(today: NaiveDate) -> Self {
        let start = today.with_day(1).unwrap_or(today);
        let next_month = if start.month() == 12 {
            NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
        };
        let end = next_month
            .map(|first| first - Duration::days(1))
            .unwrap_or(today);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

fn parse_bound(raw: &str) -> Result<NaiveDate> {
    parse_calendar_date(raw)
        .ok_or_else(|| DashboardError::InvalidRange(format!("`{raw}` is not a valid date")))
}
