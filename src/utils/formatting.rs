//! Cell formatting shared by the terminal table and every export format.

use crate::models::CellValue;
use crate::utils::time::{format_hm, parse_local_time};

/// Placeholder for missing or unreadable values.
pub const MISSING: &str = "-";

/// Renders a present value with its unit suffix, or `-`.
pub fn display_value(value: Option<&CellValue>, suffix: &str) -> String {
    match value {
        Some(v) if v.is_present() => format!("{v}{suffix}"),
        _ => MISSING.to_string(),
    }
}

/// Local `HH:MM` (24-hour) extracted from a timestamp, or `-`.
pub fn time_only(value: Option<&CellValue>) -> String {
    match value {
        Some(CellValue::Text(s)) => parse_local_time(s)
            .map(format_hm)
            .unwrap_or_else(|| MISSING.to_string()),
        _ => MISSING.to_string(),
    }
}
