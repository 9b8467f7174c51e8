use crate::utils::time::parse_hour;
use serde::Serialize;

/// Start hour used when an event's start time cannot be read.
pub const DEFAULT_START_HOUR: f64 = 9.0;

/// Length given to events with no usable end time.
pub const DEFAULT_DURATION_HOURS: f64 = 1.0;

/// A same-day event positioned by hour of day. The payload is carried through
/// lane assignment untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedEvent<P = ()> {
    pub id: String,
    pub start_hour: f64,
    pub end_hour: f64,
    pub payload: P,
}

impl<P> TimedEvent<P> {
    /// Build an event from already-known hours.
    ///
    /// A missing end, or one not after the start, becomes `start + 1`.
    pub fn new(id: impl Into<String>, start_hour: f64, end_hour: Option<f64>, payload: P) -> Self {
        let start_hour = if start_hour.is_finite() {
            start_hour
        } else {
            DEFAULT_START_HOUR
        };

        let end_hour = match end_hour {
            Some(end) if end.is_finite() && end > start_hour => end,
            _ => start_hour + DEFAULT_DURATION_HOURS,
        };

        Self {
            id: id.into(),
            start_hour,
            end_hour,
            payload,
        }
    }

    /// Build an event from raw time strings (`HH:MM`, `HH:MM:SS`, RFC 3339 or
    /// naive ISO timestamps). Never fails: an unreadable start falls back to
    /// 09:00 and an unreadable end to one hour after the start.
    pub fn from_times(
        id: impl Into<String>,
        start: Option<&str>,
        end: Option<&str>,
        payload: P,
    ) -> Self {
        let start_hour = start.and_then(parse_hour).unwrap_or(DEFAULT_START_HOUR);
        let end_hour = end.and_then(parse_hour);
        Self::new(id, start_hour, end_hour, payload)
    }

    /// Half-open overlap test on `[start, end)`.
    pub fn overlaps<Q>(&self, other: &TimedEvent<Q>) -> bool {
        self.start_hour < other.end_hour && other.start_hour < self.end_hour
    }
}

/// Where an event sits in its day's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaneAssignment {
    pub lane: usize,
    pub total_lanes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedEvent<P = ()> {
    pub event: TimedEvent<P>,
    pub assignment: LaneAssignment,
}
