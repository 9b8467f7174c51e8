// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{export_headers, records_to_table};
use crate::export::notify_export_success;
use crate::models::AttendanceRecord;
use crate::ui::messages::info;
use chrono::{NaiveDate, NaiveTime, Timelike};
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub const SHEET_NAME: &str = "Timesheets";

/// XLSX export: one styled sheet, frozen header, banded rows, fitted widths.
pub(crate) fn export_xlsx(records: &[AttendanceRecord], path: &Path) -> AppResult<()> {
    if records.is_empty() {
        return Err(AppError::NothingToExport);
    }

    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    let headers = export_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x0F766E))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    let band1 = Color::RGB(0xE6F4F1);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, values) in records_to_table(records).iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate() {
            write_cell(worksheet, row, col as u16, value, band)?;
            col_widths[col] = col_widths[col].max(value.width());
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Dates and clock times become real Excel values; everything else
/// (`8h`, `-`, ...) stays text.
fn write_cell(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Some((num_format, serial)) = excel_serial(s) {
        ws.write_with_format(row, col, serial, &base.set_num_format(num_format))
            .map_err(to_export_error)?;
        return Ok(());
    }

    ws.write_with_format(row, col, s, &base)
        .map_err(to_export_error)?;
    Ok(())
}

/// Excel serial for `YYYY-MM-DD` (days since 1899-12-30) or `HH:MM` (day fraction).
fn excel_serial(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
        return Some(("yyyy-mm-dd", (d - epoch).num_days() as f64));
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        return Some(("hh:mm", t.num_seconds_from_midnight() as f64 / 86400.0));
    }

    None
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}
