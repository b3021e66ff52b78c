use std::{fmt, str::FromStr};

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;

/// Bucket granularity for transaction lists and trend views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Daily, Period::Weekly, Period::Monthly];

    /// Case-sensitive match against the wire names used by the API.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(Period::Daily),
            "weekly" => Some(Period::Weekly),
            "monthly" => Some(Period::Monthly),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }

    /// First day of the bucket containing `date`. Weeks start on Sunday.
    pub fn bucket_start(self, date: NaiveDate) -> NaiveDate {
        match self {
            Period::Daily => date,
            Period::Weekly => {
                let delta = date.weekday().num_days_from_sunday() as i64;
                date - Duration::days(delta)
            }
            Period::Monthly => date.with_day(1).unwrap_or(date),
        }
    }

    /// `YYYY-MM-DD` for daily and weekly buckets, `YYYY-MM` for monthly ones.
    pub fn key_for(self, date: NaiveDate) -> String {
        match self {
            Period::Daily | Period::Weekly => {
                self.bucket_start(date).format("%Y-%m-%d").to_string()
            }
            Period::Monthly => date.format("%Y-%m").to_string(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = DashboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Period::parse(value.trim()).ok_or_else(|| {
            DashboardError::InvalidInput(format!(
                "unknown period `{value}` (expected daily, weekly or monthly)"
            ))
        })
    }
}
