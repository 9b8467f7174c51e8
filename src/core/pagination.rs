//! Filter and pagination state for the timesheet table.

use crate::errors::{AppError, AppResult};
use crate::models::AttendanceRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Filter + pagination tuple identifying one request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PageQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page_index: usize,
    pub page_size: usize,
}

impl PageQuery {
    pub fn new(page_size: usize) -> AppResult<Self> {
        if page_size == 0 {
            return Err(AppError::InvalidPageSize(page_size));
        }
        Ok(Self {
            start_date: None,
            end_date: None,
            page_index: 0,
            page_size,
        })
    }

    /// 1-based page number expected by the API.
    pub fn api_page(&self) -> usize {
        self.page_index + 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageResult {
    pub rows: Vec<AttendanceRecord>,
    pub total: usize,
}

impl PageResult {
    /// `total` falls back to the row count when the server omits it.
    pub fn new(rows: Vec<AttendanceRecord>, total: Option<usize>) -> Self {
        let total = total.unwrap_or(rows.len());
        Self { rows, total }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// `ceil(total / page_size)`, never less than 1.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Owns the current query. Every filter or size change restarts from the
/// first page; navigation never leaves `[0, total_pages)`.
#[derive(Debug, Clone)]
pub struct TablePager {
    query: PageQuery,
    total: usize,
}

impl TablePager {
    pub fn new(page_size: usize) -> AppResult<Self> {
        Ok(Self {
            query: PageQuery::new(page_size)?,
            total: 0,
        })
    }

    pub fn query(&self) -> PageQuery {
        self.query.clone()
    }

    pub fn page_index(&self) -> usize {
        self.query.page_index
    }

    pub fn page_size(&self) -> usize {
        self.query.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.query.page_size)
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.query.start_date = date;
        self.query.page_index = 0;
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.query.end_date = date;
        self.query.page_index = 0;
    }

    /// Re-applies the current filters (back to the first page).
    pub fn apply_filters(&mut self) {
        self.query.page_index = 0;
    }

    pub fn clear_filters(&mut self) {
        self.query.start_date = None;
        self.query.end_date = None;
        self.query.page_index = 0;
    }

    pub fn set_page_size(&mut self, page_size: usize) -> AppResult<()> {
        if page_size == 0 {
            return Err(AppError::InvalidPageSize(page_size));
        }
        self.query.page_size = page_size;
        self.query.page_index = 0;
        Ok(())
    }

    pub fn can_previous(&self) -> bool {
        self.query.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.query.page_index + 1 < self.total_pages()
    }

    /// Returns whether the page changed.
    pub fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.query.page_index -= 1;
        true
    }

    /// Returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.query.page_index += 1;
        true
    }

    /// Jump to a page, clamped into range.
    pub fn go_to(&mut self, page_index: usize) {
        self.query.page_index = page_index.min(self.total_pages() - 1);
    }

    /// Records the server-reported total. A shrinking total pulls the page
    /// index back onto the last existing page.
    pub fn record_total(&mut self, total: usize) {
        self.total = total;
        let last = self.total_pages() - 1;
        if self.query.page_index > last {
            self.query.page_index = last;
        }
    }

    /// "Page X of Y | Total: N records"
    pub fn summary(&self) -> String {
        format!(
            "Page {} of {} | Total: {} records",
            self.query.page_index + 1,
            self.total_pages(),
            self.total
        )
    }
}
