//! Time utilities: lenient parsing of clock times and timestamps, hour-of-day conversion.

use chrono::{DateTime, Local, NaiveDateTime, NaiveTime, Timelike};

const NAIVE_DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const TIME_FORMATS: [&str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

/// Parse a full timestamp into a local date-time.
///
/// Accepts RFC 3339 (converted from its offset to local time) and naive
/// `YYYY-MM-DD[T ]HH:MM[:SS]` values, which are taken as already local.
pub fn parse_local_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parse a local time of day from either a bare clock time or a full timestamp.
pub fn parse_local_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
        .or_else(|| parse_local_datetime(s).map(|dt| dt.time()))
}

/// Fractional hour of day: 09:30 → 9.5
pub fn hour_of_day(t: NaiveTime) -> f64 {
    t.hour() as f64 + t.minute() as f64 / 60.0 + t.second() as f64 / 3600.0
}

/// Parse an hour-of-day value. Besides clock times and timestamps, a plain
/// number in `[0, 24)` is read as a fractional hour.
pub fn parse_hour(s: &str) -> Option<f64> {
    if let Ok(h) = s.trim().parse::<f64>() {
        return (h.is_finite() && (0.0..24.0).contains(&h)).then_some(h);
    }
    parse_local_time(s).map(hour_of_day)
}

/// `HH:MM` in 24-hour format.
pub fn format_hm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Renders a fractional hour back to `HH:MM` (used by the day layout view).
pub fn format_hour(hour: f64) -> String {
    let total_minutes = (hour * 60.0).round().max(0.0) as i64;
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}
