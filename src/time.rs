//! Clock abstraction and lenient date parsing for server-provided strings.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Clock abstracts access to the current timestamp so views remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Midnight UTC on `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses the calendar date out of an ISO-8601 style string.
///
/// Accepts bare dates, RFC 3339 timestamps and naive date-times. The date is
/// taken as written; offsets never move a timestamp onto another day.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.naive_local().date());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|stamp| stamp.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_supported_syntaxes() {
        assert_eq!(parse_calendar_date("2024-03-15"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_calendar_date(" 2024-03-15 "), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_calendar_date("2024-03-15 10:30:00"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_calendar_date("2024-03-15T10:30:00.250"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_calendar_date("2024-03-15T10:30"), Some(ymd(2024, 3, 15)));
    }

    #[test]
    fn offset_does_not_shift_the_written_date() {
        assert_eq!(
            parse_calendar_date("2024-03-15T23:30:00-05:00"),
            Some(ymd(2024, 3, 15))
        );
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert_eq!(parse_calendar_date("not-a-date"), None);
        assert_eq!(parse_calendar_date("2024-02-30"), None);
        assert_eq!(parse_calendar_date(""), None);
    }

    #[test]
    fn fixed_clock_reports_its_day() {
        let clock = FixedClock::on(ymd(2025, 6, 1));
        assert_eq!(clock.today(), ymd(2025, 6, 1));
    }
}
