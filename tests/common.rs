#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use async_trait::async_trait;
use rstaffdesk::api::{AttendanceSource, ReminderSource};
use rstaffdesk::core::pagination::{PageQuery, PageResult};
use rstaffdesk::errors::{AppError, AppResult};
use rstaffdesk::models::{AttendanceRecord, CellValue, Reminder, ReminderDraft};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tempfile::TempDir;
use tokio::sync::Notify;

pub fn rsd() -> Command {
    let mut cmd = cargo_bin_cmd!("rstaffdesk");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Fresh temp dir plus the config path inside it (file not created).
pub fn temp_config() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("rstaffdesk.conf");
    (dir, path)
}

pub fn record(date: &str, entry: Option<&str>, exit: Option<&str>, total: Option<i64>) -> AttendanceRecord {
    AttendanceRecord {
        date: Some(CellValue::from(date)),
        entry_time: entry.map(CellValue::from),
        exit_time: exit.map(CellValue::from),
        total_hour: total.map(CellValue::from),
        over_time: None,
        break_time: Some(CellValue::from(30_i64)),
    }
}

/// `n` consecutive days of September records, ordered by date.
pub fn september(n: usize) -> Vec<AttendanceRecord> {
    (0..n)
        .map(|i| {
            let day = format!("2025-09-{:02}", i + 1);
            let entry = format!("{day}T09:00:00");
            let exit = format!("{day}T17:00:00");
            record(&day, Some(&entry), Some(&exit), Some(8))
        })
        .collect()
}

pub fn reminder(id: i64, title: &str, start: &str, end: Option<&str>) -> Reminder {
    Reminder {
        id,
        profile: Some(1),
        title: title.to_string(),
        remarks: None,
        start_date: start.to_string(),
        end_date: end.map(str::to_string),
    }
}

/// Attendance source over an in-memory dataset, with optional per-page gates
/// that hold a request until released.
#[derive(Default)]
pub struct FakeSource {
    pub records: Vec<AttendanceRecord>,
    pub gates: Mutex<HashMap<usize, std::sync::Arc<Notify>>>,
    pub calls: AtomicUsize,
    pub failing: AtomicBool,
    pub report_count: bool,
}

impl FakeSource {
    pub fn new(records: Vec<AttendanceRecord>) -> Self {
        Self {
            records,
            report_count: true,
            ..Default::default()
        }
    }

    /// Requests for `page_index` wait until the returned `Notify` fires.
    pub fn gate(&self, page_index: usize) -> std::sync::Arc<Notify> {
        let notify = std::sync::Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(page_index, notify.clone());
        notify
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl AttendanceSource for FakeSource {
    async fn fetch_page(&self, query: &PageQuery) -> AppResult<PageResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.gates.lock().unwrap().get(&query.page_index).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Api {
                status: 500,
                message: "boom".into(),
            });
        }

        let start = (query.page_index * query.page_size).min(self.records.len());
        let end = (start + query.page_size).min(self.records.len());
        let rows = self.records[start..end].to_vec();
        let total = self.report_count.then_some(self.records.len());
        Ok(PageResult::new(rows, total))
    }
}

/// Reminder source recording writes and deletions; ids in `fail_ids` refuse
/// updates and deletion.
#[derive(Default)]
pub struct FakeReminders {
    pub reminders: Vec<Reminder>,
    pub deleted: Mutex<Vec<i64>>,
    pub fail_ids: Vec<i64>,
    /// Every create (`None`) or update (`Some(id)`) body received.
    pub writes: Mutex<Vec<(Option<i64>, ReminderDraft)>>,
}

impl FakeReminders {
    pub fn deleted(&self) -> Vec<i64> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<(Option<i64>, ReminderDraft)> {
        self.writes.lock().unwrap().clone()
    }

    fn refuse(&self, id: i64) -> AppResult<()> {
        if self.fail_ids.contains(&id) {
            return Err(AppError::Api {
                status: 403,
                message: "forbidden".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ReminderSource for FakeReminders {
    async fn list_reminders(&self) -> AppResult<Vec<Reminder>> {
        Ok(self.reminders.clone())
    }

    async fn create_reminder(&self, draft: &ReminderDraft) -> AppResult<Reminder> {
        let mut writes = self.writes.lock().unwrap();
        writes.push((None, draft.clone()));
        Ok(draft.clone().into_reminder(100 + writes.len() as i64))
    }

    async fn update_reminder(&self, id: i64, draft: &ReminderDraft) -> AppResult<Reminder> {
        self.refuse(id)?;
        self.writes.lock().unwrap().push((Some(id), draft.clone()));
        Ok(draft.clone().into_reminder(id))
    }

    async fn delete_reminder(&self, id: i64) -> AppResult<()> {
        self.refuse(id)?;
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }
}
