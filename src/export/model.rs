// src/export/model.rs

use crate::models::AttendanceRecord;
use crate::utils::formatting::{display_value, time_only};

/// How a column's raw value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Printed as-is.
    Text,
    /// Local `HH:MM` taken from a timestamp.
    Time,
    /// Printed with a unit suffix.
    Duration(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
}

/// Timesheet columns, in display and export order.
pub const COLUMNS: [Column; 6] = [
    Column {
        id: "date",
        label: "Date",
        kind: ColumnKind::Text,
    },
    Column {
        id: "entry_time",
        label: "Entry Time",
        kind: ColumnKind::Time,
    },
    Column {
        id: "exit_time",
        label: "Exit Time",
        kind: ColumnKind::Time,
    },
    Column {
        id: "total_hour",
        label: "Total Hours",
        kind: ColumnKind::Duration("h"),
    },
    Column {
        id: "over_time",
        label: "Overtime",
        kind: ColumnKind::Duration("h"),
    },
    Column {
        id: "break_time",
        label: "Break Time",
        kind: ColumnKind::Duration("m"),
    },
];

impl Column {
    /// Export header: id upper-cased, `_` replaced by a space.
    pub fn export_header(&self) -> String {
        self.id.replace('_', " ").to_uppercase()
    }

    pub fn format(&self, record: &AttendanceRecord) -> String {
        let value = record.get(self.id);
        match self.kind {
            ColumnKind::Text => display_value(value, ""),
            ColumnKind::Time => time_only(value),
            ColumnKind::Duration(suffix) => display_value(value, suffix),
        }
    }
}

/// Header row shared by CSV / XLSX / PDF / print.
pub fn export_headers() -> Vec<String> {
    COLUMNS.iter().map(Column::export_header).collect()
}

/// Labels for the on-screen table.
pub fn display_headers() -> Vec<&'static str> {
    COLUMNS.iter().map(|c| c.label).collect()
}

/// One record projected through the column set.
pub fn record_to_row(record: &AttendanceRecord) -> Vec<String> {
    COLUMNS.iter().map(|c| c.format(record)).collect()
}

pub fn records_to_table(records: &[AttendanceRecord]) -> Vec<Vec<String>> {
    records.iter().map(record_to_row).collect()
}
