use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw cell coming from the attendance API: the backend sends durations
/// either as numbers or as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl CellValue {
    /// Present = not null (handled by `Option`) and not the empty string.
    pub fn is_present(&self) -> bool {
        !matches!(self, CellValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n.into())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n)
            .map(CellValue::Number)
            .unwrap_or_else(|| CellValue::Text(String::new()))
    }
}

/// One attendance-log row as returned by `/api/timesheets/attendencelogs/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default)]
    pub date: Option<CellValue>,
    #[serde(default)]
    pub entry_time: Option<CellValue>,
    #[serde(default)]
    pub exit_time: Option<CellValue>,
    #[serde(default)]
    pub total_hour: Option<CellValue>,
    #[serde(default)]
    pub over_time: Option<CellValue>,
    #[serde(default)]
    pub break_time: Option<CellValue>,
}

impl AttendanceRecord {
    /// Field lookup by column id.
    pub fn get(&self, field: &str) -> Option<&CellValue> {
        match field {
            "date" => self.date.as_ref(),
            "entry_time" => self.entry_time.as_ref(),
            "exit_time" => self.exit_time.as_ref(),
            "total_hour" => self.total_hour.as_ref(),
            "over_time" => self.over_time.as_ref(),
            "break_time" => self.break_time.as_ref(),
            _ => None,
        }
    }
}
