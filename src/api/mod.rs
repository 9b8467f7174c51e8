//! Remote API access: the record-source traits and their HTTP implementation.

mod client;

pub use client::{ApiClient, page_params};

use crate::core::pagination::{PageQuery, PageResult};
use crate::errors::AppResult;
use crate::models::{Reminder, ReminderDraft};
use async_trait::async_trait;

/// Paginated attendance-log source.
#[async_trait]
pub trait AttendanceSource: Send + Sync {
    async fn fetch_page(&self, query: &PageQuery) -> AppResult<PageResult>;
}

/// Reminder endpoints used by the calendar, the reminder commands and the
/// expiry sweep.
#[async_trait]
pub trait ReminderSource: Send + Sync {
    async fn list_reminders(&self) -> AppResult<Vec<Reminder>>;
    /// Returns the reminder as stored by the server, id included.
    async fn create_reminder(&self, draft: &ReminderDraft) -> AppResult<Reminder>;
    async fn update_reminder(&self, id: i64, draft: &ReminderDraft) -> AppResult<Reminder>;
    async fn delete_reminder(&self, id: i64) -> AppResult<()>;
}
