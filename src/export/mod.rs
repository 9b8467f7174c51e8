// src/export/mod.rs

mod csv_export;
mod fs_utils;
pub mod logic;
pub mod model;
mod pdf;
mod pdf_export;
pub mod print;
mod xlsx;

pub use csv_export::render_csv;
pub use logic::{ExportLogic, ExportRequest, export_file_name};
pub use pdf_export::render_pdf;
pub use print::{FilePrintSpooler, PrintContext, PrintSpooler, render_html};
pub use xlsx::SHEET_NAME;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    #[value(alias = "excel")]
    Xlsx,
    Pdf,
    Print,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Print => "html",
        }
    }
}
