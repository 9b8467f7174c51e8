// src/export/print.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{export_headers, records_to_table};
use crate::models::AttendanceRecord;
use crate::ui::messages::{info, warning};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const PRINT_STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; }
table { width: 100%; border-collapse: collapse; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #f2f2f2; }";

/// A viewing context the print document is written into.
pub trait PrintContext {
    fn write(&mut self, html: &str) -> AppResult<()>;
    fn print(&mut self) -> AppResult<()>;
    /// Dispose of the context.
    fn close(self: Box<Self>) -> AppResult<()>;
}

/// Opens viewing contexts for print jobs.
pub trait PrintSpooler {
    fn open(&self, title: &str) -> AppResult<Box<dyn PrintContext>>;
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Print-ready HTML for the loaded page. Opening it in a browser starts the
/// print dialog.
pub fn render_html(records: &[AttendanceRecord]) -> AppResult<String> {
    if records.is_empty() {
        return Err(AppError::NothingToExport);
    }

    let head: String = export_headers()
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect();

    let body: String = records_to_table(records)
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|c| format!("<td>{}</td>", escape_html(c)))
                .collect();
            format!("      <tr>{cells}</tr>\n")
        })
        .collect();

    Ok(format!(
        "<!DOCTYPE html>
<html>
  <head>
    <meta charset=\"utf-8\">
    <title>Timesheets</title>
    <style>
{PRINT_STYLE}
    </style>
    <script>window.onload = () => window.print();</script>
  </head>
  <body>
    <h1>Timesheets Report</h1>
    <table>
      <thead>
        <tr>{head}</tr>
      </thead>
      <tbody>
{body}      </tbody>
    </table>
  </body>
</html>
"
    ))
}

/// Open a context, write the document, print, and always dispose of the
/// context, even when printing fails.
pub fn print_records(records: &[AttendanceRecord], spooler: &dyn PrintSpooler) -> AppResult<()> {
    let html = render_html(records)?;

    let mut ctx = spooler.open("Timesheets")?;
    let printed = ctx.write(&html).and_then(|_| ctx.print());
    let closed = ctx.close();

    printed.and(closed)
}

/// Writes the document to an HTML file and hands it to the platform viewer,
/// whose print dialog takes over from there.
#[derive(Debug, Clone)]
pub struct FilePrintSpooler {
    path: PathBuf,
    launch: bool,
}

impl FilePrintSpooler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            launch: true,
        }
    }

    /// Only write the file, without starting a viewer.
    pub fn without_launch(mut self) -> Self {
        self.launch = false;
        self
    }
}

struct FileContext {
    path: PathBuf,
    launch: bool,
}

impl PrintSpooler for FilePrintSpooler {
    fn open(&self, title: &str) -> AppResult<Box<dyn PrintContext>> {
        info(format!("Preparing print view '{title}': {}", self.path.display()));
        Ok(Box::new(FileContext {
            path: self.path.clone(),
            launch: self.launch,
        }))
    }
}

impl PrintContext for FileContext {
    fn write(&mut self, html: &str) -> AppResult<()> {
        fs::write(&self.path, html)?;
        Ok(())
    }

    fn print(&mut self) -> AppResult<()> {
        if !self.launch {
            return Ok(());
        }
        if let Err(e) = open_viewer(&self.path) {
            warning(format!(
                "Could not open a viewer ({e}); print {} manually.",
                self.path.display()
            ));
        }
        Ok(())
    }

    fn close(self: Box<Self>) -> AppResult<()> {
        Ok(())
    }
}

fn open_viewer(path: &Path) -> std::io::Result<()> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };

    cmd.arg(path).spawn().map(|_| ())
}
