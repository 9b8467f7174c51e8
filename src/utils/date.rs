use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_local_datetime;
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Calendar day of a bare `YYYY-MM-DD` date or of a full timestamp.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_local_datetime(s).map(|dt| dt.date()))
}

/// Strict `YYYY-MM-DD` parsing for user input.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Optional filter bound: an empty string means "no bound".
pub fn parse_optional_date(s: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_date(v).map(Some),
    }
}
