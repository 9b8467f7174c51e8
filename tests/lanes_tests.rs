use rstaffdesk::core::lanes::{assign_lanes, lane_span};
use rstaffdesk::models::timed_event::{DEFAULT_DURATION_HOURS, DEFAULT_START_HOUR};
use rstaffdesk::models::{LaneAssignment, PlacedEvent, TimedEvent};
use std::collections::BTreeSet;

fn ev(id: &str, start: f64, end: f64) -> TimedEvent {
    TimedEvent::new(id, start, Some(end), ())
}

fn lane_of(placed: &[PlacedEvent], id: &str) -> usize {
    placed
        .iter()
        .find(|p| p.event.id == id)
        .map(|p| p.assignment.lane)
        .expect("event placed")
}

/// Deterministic pseudo-random day of events (LCG, no extra deps).
fn scattered_events(n: usize, mut seed: u64) -> Vec<TimedEvent> {
    let mut next = || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) as f64 / (1u64 << 31) as f64
    };

    (0..n)
        .map(|i| {
            let start = (next() * 20.0 * 4.0).floor() / 4.0;
            let len = 0.25 + (next() * 3.0 * 4.0).floor() / 4.0;
            ev(&format!("e{i}"), start, start + len)
        })
        .collect()
}

#[test]
fn test_overlapping_morning_uses_two_lanes() {
    let placed = assign_lanes(vec![
        ev("A", 9.0, 10.0),
        ev("B", 9.5, 10.5),
        ev("C", 10.0, 11.0),
    ]);

    assert_eq!(placed.len(), 3);
    assert!(placed.iter().all(|p| p.assignment.total_lanes == 2));
    assert_ne!(lane_of(&placed, "A"), lane_of(&placed, "B"));
    // C starts exactly when A ends and reuses its lane.
    assert_eq!(lane_of(&placed, "C"), lane_of(&placed, "A"));
}

#[test]
fn test_empty_day_has_no_lanes() {
    let placed: Vec<PlacedEvent> = assign_lanes(Vec::new());
    assert!(placed.is_empty());
}

#[test]
fn test_single_event_fills_the_column() {
    let placed = assign_lanes(vec![ev("solo", 14.0, 15.5)]);
    assert_eq!(
        placed[0].assignment,
        LaneAssignment {
            lane: 0,
            total_lanes: 1
        }
    );
    assert_eq!(lane_span(placed[0].assignment), (0.0, 1.0));
}

#[test]
fn test_touching_events_share_a_lane() {
    let placed = assign_lanes(vec![ev("a", 8.0, 9.0), ev("b", 9.0, 10.0), ev("c", 10.0, 11.0)]);
    assert!(placed.iter().all(|p| p.assignment.lane == 0));
    assert!(placed.iter().all(|p| p.assignment.total_lanes == 1));
}

#[test]
fn test_same_lane_events_never_overlap() {
    let placed = assign_lanes(scattered_events(60, 42));

    for (i, a) in placed.iter().enumerate() {
        for b in placed.iter().skip(i + 1) {
            if a.assignment.lane == b.assignment.lane {
                assert!(
                    !a.event.overlaps(&b.event),
                    "{} and {} overlap in lane {}",
                    a.event.id,
                    b.event.id,
                    a.assignment.lane
                );
            }
        }
    }
}

#[test]
fn test_total_lanes_matches_distinct_lanes() {
    let placed = assign_lanes(scattered_events(40, 7));
    let distinct: BTreeSet<usize> = placed.iter().map(|p| p.assignment.lane).collect();

    for p in &placed {
        assert_eq!(p.assignment.total_lanes, distinct.len());
        assert!(p.assignment.lane < p.assignment.total_lanes);
    }
    // Lanes are numbered densely from zero.
    assert_eq!(distinct, (0..distinct.len()).collect());
}

#[test]
fn test_assignment_is_deterministic() {
    let first = assign_lanes(scattered_events(30, 99));
    let second = assign_lanes(scattered_events(30, 99));
    assert_eq!(first, second);
}

#[test]
fn test_output_sorted_by_start_with_stable_ties() {
    let placed = assign_lanes(vec![
        ev("late", 15.0, 16.0),
        ev("tie-1", 9.0, 10.0),
        ev("early", 7.0, 8.0),
        ev("tie-2", 9.0, 9.5),
    ]);

    let order: Vec<&str> = placed.iter().map(|p| p.event.id.as_str()).collect();
    assert_eq!(order, ["early", "tie-1", "tie-2", "late"]);
    assert_eq!(lane_of(&placed, "tie-1"), 0);
    assert_eq!(lane_of(&placed, "tie-2"), 1);
}

#[test]
fn test_unreadable_start_defaults_to_nine() {
    let e: TimedEvent = TimedEvent::from_times("x", Some("not a time"), None, ());
    assert_eq!(e.start_hour, DEFAULT_START_HOUR);
    assert_eq!(e.end_hour, DEFAULT_START_HOUR + DEFAULT_DURATION_HOURS);

    let e: TimedEvent = TimedEvent::new("nan", f64::NAN, None, ());
    assert_eq!(e.start_hour, 9.0);
}

#[test]
fn test_missing_or_inverted_end_gets_one_hour() {
    let e: TimedEvent = TimedEvent::from_times("x", Some("13:30"), None, ());
    assert_eq!((e.start_hour, e.end_hour), (13.5, 14.5));

    let e: TimedEvent = TimedEvent::new("x", 11.0, Some(10.0), ());
    assert_eq!(e.end_hour, 12.0);

    let e: TimedEvent = TimedEvent::new("x", 11.0, Some(11.0), ());
    assert_eq!(e.end_hour, 12.0);
}

#[test]
fn test_from_times_reads_timestamps_and_plain_hours() {
    let e: TimedEvent =
        TimedEvent::from_times("x", Some("2025-10-02T08:15:00"), Some("2025-10-02T09:45"), ());
    assert_eq!((e.start_hour, e.end_hour), (8.25, 9.75));

    let e: TimedEvent = TimedEvent::from_times("x", Some("14.5"), Some("16"), ());
    assert_eq!((e.start_hour, e.end_hour), (14.5, 16.0));
}

#[test]
fn test_payload_travels_through_layout() {
    let placed = assign_lanes(vec![
        TimedEvent::new("b", 10.0, Some(11.0), "second"),
        TimedEvent::new("a", 8.0, Some(9.0), "first"),
    ]);
    let payloads: Vec<&str> = placed.iter().map(|p| p.event.payload).collect();
    assert_eq!(payloads, ["first", "second"]);
}

#[test]
fn test_lane_span_splits_width_evenly() {
    let (offset, width) = lane_span(LaneAssignment {
        lane: 2,
        total_lanes: 4,
    });
    assert_eq!(width, 0.25);
    assert_eq!(offset, 0.5);
}
