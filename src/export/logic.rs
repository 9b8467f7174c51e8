// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv_export::export_csv;
use crate::export::fs_utils::prepare_output;
use crate::export::pdf_export::export_pdf;
use crate::export::print::{FilePrintSpooler, PrintSpooler, print_records};
use crate::export::xlsx::export_xlsx;
use crate::models::AttendanceRecord;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

pub const FILE_PREFIX: &str = "timesheets";

/// `timesheets_<date>.csv`; the other formats carry a full timestamp.
pub fn export_file_name(format: ExportFormat, now: NaiveDateTime) -> String {
    match format {
        ExportFormat::Csv => format!("{FILE_PREFIX}_{}.csv", now.format("%Y-%m-%d")),
        other => format!(
            "{FILE_PREFIX}_{}.{}",
            now.format("%Y-%m-%dT%H-%M-%S"),
            other.extension()
        ),
    }
}

/// Where the export goes and how.
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub format: ExportFormat,
    pub dir: &'a Path,
    pub now: NaiveDateTime,
    pub force: bool,
    /// Hand the print document to a viewer (print format only).
    pub launch_viewer: bool,
    /// Describes the loaded page, e.g. "Page 1 of 3 | 2025-09-01 to 2025-09-30".
    pub context: String,
}

/// High-level export of the currently loaded page.
pub struct ExportLogic;

impl ExportLogic {
    /// Export `records` (the loaded page only) and return the written file.
    /// An empty page is refused with `AppError::NothingToExport` for every
    /// format, before any file is created.
    pub fn export(records: &[AttendanceRecord], req: &ExportRequest<'_>) -> AppResult<PathBuf> {
        if records.is_empty() {
            return Err(AppError::NothingToExport);
        }

        let path = prepare_output(req.dir, &export_file_name(req.format, req.now), req.force)?;

        match req.format {
            ExportFormat::Csv => export_csv(records, &path)?,
            ExportFormat::Xlsx => export_xlsx(records, &path)?,
            ExportFormat::Pdf => export_pdf(records, &path, &req.context)?,
            ExportFormat::Print => {
                let spooler = FilePrintSpooler::new(&path);
                let spooler = if req.launch_viewer {
                    spooler
                } else {
                    spooler.without_launch()
                };
                Self::print(records, &spooler)?
            }
        }

        Ok(path)
    }

    /// Print through an arbitrary spooler.
    pub fn print(records: &[AttendanceRecord], spooler: &dyn PrintSpooler) -> AppResult<()> {
        print_records(records, spooler)
    }
}
