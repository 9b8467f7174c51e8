//! First-fit lane assignment for one day's timed events.
//!
//! Events are sorted by start hour (stable, so ties keep their input order)
//! and each one goes into the first lane whose last event has already ended.
//! This is greedy and not guaranteed minimal, but it is deterministic for a
//! given input order. Intervals are half-open: an event starting exactly when
//! another ends may share its lane.

use crate::models::{LaneAssignment, PlacedEvent, TimedEvent};

pub fn assign_lanes<P>(events: Vec<TimedEvent<P>>) -> Vec<PlacedEvent<P>> {
    let mut sorted = events;
    sorted.sort_by(|a, b| a.start_hour.total_cmp(&b.start_hour));

    // End hour of the event most recently placed in each lane.
    let mut lane_ends: Vec<f64> = Vec::new();
    let mut lanes_of: Vec<usize> = Vec::with_capacity(sorted.len());

    for ev in &sorted {
        let lane = match lane_ends.iter().position(|end| *end <= ev.start_hour) {
            Some(lane) => {
                lane_ends[lane] = ev.end_hour;
                lane
            }
            None => {
                lane_ends.push(ev.end_hour);
                lane_ends.len() - 1
            }
        };
        lanes_of.push(lane);
    }

    // Only known once every event is placed.
    let total_lanes = lane_ends.len();

    sorted
        .into_iter()
        .zip(lanes_of)
        .map(|(event, lane)| PlacedEvent {
            event,
            assignment: LaneAssignment { lane, total_lanes },
        })
        .collect()
}

/// Horizontal share of the day column taken by one event: `(offset, width)`
/// as fractions of the full width.
pub fn lane_span(assignment: LaneAssignment) -> (f64, f64) {
    let total = assignment.total_lanes.max(1) as f64;
    let width = 1.0 / total;
    (assignment.lane as f64 * width, width)
}
