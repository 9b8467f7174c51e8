// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{export_headers, records_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::TableDocument;
use crate::models::AttendanceRecord;
use crate::ui::messages::info;
use std::path::Path;

pub const PDF_TITLE: &str = "Timesheets Report";

/// Render the loaded page as a PDF table document.
pub fn render_pdf(records: &[AttendanceRecord], subtitle: &str) -> AppResult<Vec<u8>> {
    if records.is_empty() {
        return Err(AppError::NothingToExport);
    }

    let mut doc = TableDocument::new();
    doc.write_table(PDF_TITLE, subtitle, &export_headers(), &records_to_table(records));
    Ok(doc.finish())
}

pub(crate) fn export_pdf(records: &[AttendanceRecord], path: &Path, subtitle: &str) -> AppResult<()> {
    let bytes = render_pdf(records, subtitle)?;

    info(format!("Exporting to PDF: {}", path.display()));
    std::fs::write(path, bytes)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
