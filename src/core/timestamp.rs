//! Timestamp formatting for log records
//!
//! Records are stamped with local wall-clock time in the form
//! `2025-01-08T10:30:45:123+0900`: ISO date, colon separated time including
//! milliseconds, and a signed four digit UTC offset.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// strftime pattern used for every record timestamp
pub const TIMESTAMP_PATTERN: &str = "%Y-%m-%dT%H:%M:%S:%3f%z";

/// Current local time in the record timestamp format
#[must_use]
pub fn now() -> String {
    format_timestamp(&Local::now())
}

/// Format any datetime in the record timestamp format
///
/// # Examples
///
/// ```
/// use bitnacle::core::timestamp::format_timestamp;
/// use chrono::{FixedOffset, TimeZone};
///
/// let tz = FixedOffset::east_opt(9 * 3600).unwrap();
/// let dt = tz.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(format_timestamp(&dt), "2025-01-08T10:30:45:000+0900");
/// ```
#[must_use]
pub fn format_timestamp<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    datetime.format(TIMESTAMP_PATTERN).to_string()
}

/// Source of record timestamps
pub trait TimeSource: Send + Sync {
    fn now(&self) -> String;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> String {
        now()
    }
}

/// Always returns the same timestamp
#[derive(Debug, Clone)]
pub struct FixedClock {
    timestamp: String,
}

impl FixedClock {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
        }
    }

    /// Fix the clock at the given datetime, rendered in the record format
    pub fn at<Tz>(datetime: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self::new(format_timestamp(datetime))
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> String {
        self.timestamp.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use regex::Regex;

    fn timestamp_regex() -> Regex {
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}:\d{3}[+-]\d{4}$").unwrap()
    }

    #[test]
    fn test_now_matches_pattern() {
        let ts = now();
        assert!(timestamp_regex().is_match(&ts), "unexpected timestamp: {}", ts);
    }

    #[test]
    fn test_format_with_positive_offset() {
        let tz = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let dt = tz.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap()
            + chrono::Duration::milliseconds(123);
        assert_eq!(format_timestamp(&dt), "2025-01-08T10:30:45:123+0530");
    }

    #[test]
    fn test_format_with_negative_offset() {
        let tz = FixedOffset::west_opt(3 * 3600).unwrap();
        let dt = tz.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap()
            + chrono::Duration::milliseconds(7);
        assert_eq!(format_timestamp(&dt), "2024-12-31T23:59:59:007-0300");
    }

    #[test]
    fn test_format_utc() {
        let dt = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(&dt), "2025-06-01T00:00:00:000+0000");
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new("2025-01-08T10:30:45:123+0000");
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), "2025-01-08T10:30:45:123+0000");
    }

    #[test]
    fn test_fixed_clock_at_datetime() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
        assert_eq!(FixedClock::at(&dt).now(), "2025-01-08T10:30:45:000+0000");
    }

    #[test]
    fn test_system_clock_matches_pattern() {
        assert!(timestamp_regex().is_match(&SystemClock.now()));
    }
}
