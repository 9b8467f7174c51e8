use crate::errors::{AppError, AppResult};
use crate::models::timed_event::TimedEvent;
use crate::utils::date::parse_day;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Shown for reminders whose title is missing or blank.
pub const UNTITLED: &str = "Untitled";

/// A reminder from `/api/policies/reminder/`.
///
/// `start_date` is the field that places a reminder on the calendar; it may be
/// a bare date or a full timestamp carrying the time of day. A null or missing
/// `title`/`start_date` decodes as an empty string: such a reminder is kept in
/// the list but has no calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: i64,
    #[serde(default)]
    pub profile: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

impl Reminder {
    pub fn display_title(&self) -> &str {
        match self.title.trim() {
            "" => UNTITLED,
            t => t,
        }
    }

    pub fn start_day(&self) -> Option<NaiveDate> {
        parse_day(&self.start_date)
    }

    /// Last day of the reminder; falls back to the start day.
    pub fn end_day(&self) -> Option<NaiveDate> {
        self.end_date
            .as_deref()
            .and_then(parse_day)
            .or_else(|| self.start_day())
    }

    /// True when `day` falls inside `[start day, end day]`.
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        match (self.start_day(), self.end_day()) {
            (Some(start), Some(end)) => start <= day && day <= end,
            _ => false,
        }
    }

    /// Expired once its end day is strictly before `today`.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.end_day().is_some_and(|end| end < today)
    }

    /// Timed view of the reminder for the day layout. Bare dates carry no
    /// time, so they land on the default start hour; an end on a later day
    /// is ignored.
    pub fn to_timed_event(&self) -> TimedEvent<Reminder> {
        let end = self
            .end_date
            .as_deref()
            .filter(|e| parse_day(e) == self.start_day());

        TimedEvent::from_times(
            self.id.to_string(),
            Some(self.start_date.as_str()),
            end,
            self.clone(),
        )
    }
}

/// Body sent when creating or replacing a reminder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReminderDraft {
    pub profile: Option<i64>,
    pub title: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub remarks: Option<String>,
}

impl ReminderDraft {
    /// Title must be non-blank, the start a readable day and the end (when
    /// given) not before the start.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidReminder("title cannot be empty".into()));
        }

        let start = parse_day(&self.start_date)
            .ok_or_else(|| AppError::InvalidDate(self.start_date.clone()))?;

        if let Some(end) = &self.end_date {
            let end = parse_day(end).ok_or_else(|| AppError::InvalidDate(end.clone()))?;
            if end < start {
                return Err(AppError::InvalidReminder(format!(
                    "end date {end} is before start date {start}"
                )));
            }
        }
        Ok(())
    }

    /// The reminder the server is expected to hold after a successful update.
    pub fn into_reminder(self, id: i64) -> Reminder {
        Reminder {
            id,
            profile: self.profile,
            title: self.title,
            remarks: self.remarks,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

impl From<&Reminder> for ReminderDraft {
    fn from(r: &Reminder) -> Self {
        Self {
            profile: r.profile,
            title: r.title.clone(),
            start_date: r.start_date.clone(),
            end_date: r.end_date.clone(),
            remarks: r.remarks.clone(),
        }
    }
}

/// Field changes for an edit; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderPatch {
    pub profile: Option<i64>,
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub remarks: Option<String>,
}

impl ReminderPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, current: &Reminder) -> ReminderDraft {
        let mut draft = ReminderDraft::from(current);
        if let Some(p) = self.profile {
            draft.profile = Some(p);
        }
        if let Some(t) = &self.title {
            draft.title = t.clone();
        }
        if let Some(s) = &self.start_date {
            draft.start_date = s.clone();
        }
        if let Some(e) = &self.end_date {
            draft.end_date = Some(e.clone());
        }
        if let Some(r) = &self.remarks {
            draft.remarks = Some(r.clone());
        }
        draft
    }
}
