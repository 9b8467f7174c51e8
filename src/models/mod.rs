pub mod attendance;
pub mod reminder;
pub mod session;
pub mod timed_event;

pub use attendance::{AttendanceRecord, CellValue};
pub use reminder::{Reminder, ReminderDraft, ReminderPatch};
pub use session::Session;
pub use timed_event::{LaneAssignment, PlacedEvent, TimedEvent};
