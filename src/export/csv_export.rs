// src/export/csv_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{export_headers, records_to_table};
use crate::export::notify_export_success;
use crate::models::AttendanceRecord;
use crate::ui::messages::info;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs;
use std::path::Path;

/// CSV text for the loaded page: a bare header line, then one line per row
/// with every field quoted.
pub fn render_csv(records: &[AttendanceRecord]) -> AppResult<String> {
    if records.is_empty() {
        return Err(AppError::NothingToExport);
    }

    let mut buf = export_headers().join(",").into_bytes();
    buf.push(b'\n');

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buf);

    for row in records_to_table(records) {
        wtr.write_record(&row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    let mut text = String::from_utf8(bytes)
        .map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))?;
    // One line per row, no trailing newline after the last.
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

pub(crate) fn export_csv(records: &[AttendanceRecord], path: &Path) -> AppResult<()> {
    let content = render_csv(records)?;

    info(format!("Exporting to CSV: {}", path.display()));
    fs::write(path, content)?;

    notify_export_success("CSV", path);
    Ok(())
}
