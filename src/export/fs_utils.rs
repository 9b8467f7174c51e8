// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Resolve `dir/file_name`, creating `dir` if needed.
///
/// An existing file is replaced when `force` is set; otherwise the user is
/// asked on stdin and anything but `y`/`yes` cancels the export.
pub(crate) fn prepare_output(dir: &Path, file_name: &str, force: bool) -> AppResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);

    if !path.exists() || force {
        return Ok(path);
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        info("Existing file will be overwritten.");
        Ok(path)
    } else {
        Err(AppError::Export(
            "Export cancelled: existing file not overwritten".into(),
        ))
    }
}
