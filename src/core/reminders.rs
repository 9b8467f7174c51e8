//! Reminder store, create/edit through the remote source, and the periodic
//! expiry sweep.

use crate::api::ReminderSource;
use crate::errors::{AppError, AppResult};
use crate::models::{Reminder, ReminderDraft, ReminderPatch};
use crate::utils::date::today;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Owned reminder list. Every operation hands back an immutable snapshot;
/// earlier snapshots never change.
#[derive(Debug, Default)]
pub struct ReminderStore {
    items: Mutex<Arc<[Reminder]>>,
}

impl ReminderStore {
    pub fn new(reminders: Vec<Reminder>) -> Self {
        Self {
            items: Mutex::new(reminders.into()),
        }
    }

    fn update(&self, f: impl FnOnce(&mut Vec<Reminder>)) -> Arc<[Reminder]> {
        let mut guard = self
            .items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut next = guard.to_vec();
        f(&mut next);
        *guard = next.into();
        Arc::clone(&guard)
    }

    pub fn list(&self) -> Arc<[Reminder]> {
        Arc::clone(
            &self
                .items
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }

    /// Appends, or replaces the reminder with the same id.
    pub fn add(&self, reminder: Reminder) -> Arc<[Reminder]> {
        self.update(|items| match items.iter_mut().find(|r| r.id == reminder.id) {
            Some(existing) => *existing = reminder,
            None => items.push(reminder),
        })
    }

    pub fn remove(&self, id: i64) -> Arc<[Reminder]> {
        self.update(|items| items.retain(|r| r.id != id))
    }

    pub fn replace_all(&self, reminders: Vec<Reminder>) -> Arc<[Reminder]> {
        self.update(|items| *items = reminders)
    }

    pub fn get(&self, id: i64) -> Option<Reminder> {
        self.list().iter().find(|r| r.id == id).cloned()
    }

    pub fn expired(&self, today: NaiveDate) -> Vec<Reminder> {
        self.list()
            .iter()
            .filter(|r| r.is_expired(today))
            .cloned()
            .collect()
    }
}

/// Validates `draft`, creates it remotely and adds the server's copy to
/// `store`.
pub async fn create_reminder<R: ReminderSource + ?Sized>(
    source: &R,
    store: &ReminderStore,
    draft: &ReminderDraft,
) -> AppResult<Reminder> {
    draft.validate()?;
    let created = source.create_reminder(draft).await?;
    tracing::info!(id = created.id, "reminder created");
    store.add(created.clone());
    Ok(created)
}

/// Applies `patch` to the stored reminder `id`, sends the full result and
/// replaces the local copy. The store is left untouched on any failure.
pub async fn edit_reminder<R: ReminderSource + ?Sized>(
    source: &R,
    store: &ReminderStore,
    id: i64,
    patch: &ReminderPatch,
) -> AppResult<Reminder> {
    let current = store.get(id).ok_or(AppError::ReminderNotFound(id))?;
    let draft = patch.apply(&current);
    draft.validate()?;

    let updated = source.update_reminder(id, &draft).await?;
    tracing::info!(id, "reminder updated");
    store.add(updated.clone());
    Ok(updated)
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        today()
    }
}

/// Manually driven clock for simulations and tests.
#[derive(Debug)]
pub struct FixedClock {
    day: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(day: NaiveDate) -> Self {
        Self {
            day: Mutex::new(day),
        }
    }

    pub fn set(&self, day: NaiveDate) {
        *self.day.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = day;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.day.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Deletes reminders whose end day has passed, on a fixed interval.
pub struct ExpirySweeper<R: ?Sized> {
    source: Arc<R>,
    store: Arc<ReminderStore>,
    clock: Arc<dyn Clock>,
    interval: Duration,
}

impl<R: ReminderSource + ?Sized> ExpirySweeper<R> {
    pub fn new(
        source: Arc<R>,
        store: Arc<ReminderStore>,
        clock: Arc<dyn Clock>,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            store,
            clock,
            interval,
        }
    }

    /// Reload the store from the remote list.
    pub async fn refresh(&self) -> AppResult<Arc<[Reminder]>> {
        let reminders = self.source.list_reminders().await?;
        Ok(self.store.replace_all(reminders))
    }

    /// One pass: delete every expired reminder remotely, then locally.
    /// A failed deletion keeps the reminder for the next pass.
    pub async fn sweep_once(&self) -> Vec<i64> {
        let today = self.clock.today();
        let mut removed = Vec::new();

        for r in self.store.expired(today) {
            match self.source.delete_reminder(r.id).await {
                Ok(()) => {
                    self.store.remove(r.id);
                    removed.push(r.id);
                }
                Err(e) => tracing::warn!(id = r.id, error = %e, "failed to delete expired reminder"),
            }
        }

        if !removed.is_empty() {
            tracing::info!(count = removed.len(), %today, "expired reminders removed");
        }
        removed
    }

    /// Sweep every `interval` (first pass after one full interval) until
    /// `shutdown` fires.
    pub async fn run(&self, shutdown: CancellationToken) {
        let start = tokio::time::Instant::now() + self.interval;
        let mut ticker = tokio::time::interval_at(start, self.interval);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {
                    self.sweep_once().await;
                }
            }
        }
    }
}
