//! Error type shared by the API client, the page loader, the exporters and
//! the command handlers.

use std::io;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Remote API
    // ---------------------------
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No active session: run `rstaffdesk login` first")]
    NoSession,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("No data available to export")]
    NothingToExport,

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Reminder errors
    // ---------------------------
    #[error("Invalid reminder: {0}")]
    InvalidReminder(String),

    #[error("Reminder {0} not found")]
    ReminderNotFound(i64),
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::InvalidResponse(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
