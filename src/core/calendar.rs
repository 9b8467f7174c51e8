//! Day bucketing of reminders, feeding the lane engine one day at a time.
//!
//! A reminder belongs to the calendar day of its `start_date`; that single
//! field decides both the bucket and whether a day "has events".

use crate::core::lanes::assign_lanes;
use crate::models::{PlacedEvent, Reminder};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub fn bucket_by_day(reminders: &[Reminder]) -> BTreeMap<NaiveDate, Vec<Reminder>> {
    let mut days: BTreeMap<NaiveDate, Vec<Reminder>> = BTreeMap::new();

    for r in reminders {
        match r.start_day() {
            Some(day) => days.entry(day).or_default().push(r.clone()),
            None => tracing::warn!(id = r.id, start_date = %r.start_date, "skipping reminder with unreadable start date"),
        }
    }

    days
}

pub fn has_events_on(reminders: &[Reminder], day: NaiveDate) -> bool {
    reminders.iter().any(|r| r.start_day() == Some(day))
}

/// Lane layout of the reminders starting on `day`.
pub fn day_layout(reminders: &[Reminder], day: NaiveDate) -> Vec<PlacedEvent<Reminder>> {
    let events = reminders
        .iter()
        .filter(|r| r.start_day() == Some(day))
        .map(Reminder::to_timed_event)
        .collect();

    assign_lanes(events)
}

/// Reminders whose day range covers `day` (the reminder list filter).
pub fn active_on(reminders: &[Reminder], day: NaiveDate) -> Vec<Reminder> {
    reminders
        .iter()
        .filter(|r| r.is_active_on(day))
        .cloned()
        .collect()
}
