mod common;

use chrono::NaiveDate;
use common::reminder;
use rstaffdesk::core::calendar::{active_on, bucket_by_day, day_layout, has_events_on};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_bucket_by_start_day() {
    let reminders = vec![
        reminder(1, "Standup", "2025-10-02T09:00:00", None),
        reminder(2, "Review", "2025-10-02", Some("2025-10-04")),
        reminder(3, "Retro", "2025-10-03T15:00:00", None),
        reminder(4, "Broken", "soon", None),
    ];

    let days = bucket_by_day(&reminders);

    assert_eq!(days.len(), 2);
    let ids: Vec<i64> = days[&day("2025-10-02")].iter().map(|r| r.id).collect();
    assert_eq!(ids, [1, 2]);
    assert_eq!(days[&day("2025-10-03")][0].id, 3);
}

#[test]
fn test_has_events_uses_start_day_only() {
    let reminders = vec![reminder(1, "Trip", "2025-10-02", Some("2025-10-05"))];

    assert!(has_events_on(&reminders, day("2025-10-02")));
    assert!(!has_events_on(&reminders, day("2025-10-03")));
}

#[test]
fn test_active_on_covers_the_whole_range() {
    let reminders = vec![
        reminder(1, "Trip", "2025-10-02", Some("2025-10-05")),
        reminder(2, "Call", "2025-10-06", None),
    ];

    let ids = |d: &str| -> Vec<i64> { active_on(&reminders, day(d)).iter().map(|r| r.id).collect() };
    assert_eq!(ids("2025-10-04"), [1]);
    assert_eq!(ids("2025-10-05"), [1]);
    assert_eq!(ids("2025-10-06"), [2]);
    assert!(ids("2025-10-01").is_empty());
}

#[test]
fn test_day_layout_places_timed_and_bare_reminders() {
    let reminders = vec![
        reminder(1, "Standup", "2025-10-02T09:30:00", Some("2025-10-02T10:30:00")),
        // Bare date: default 09:00-10:00, overlapping the standup.
        reminder(2, "Payroll", "2025-10-02", None),
        // Ends on a later day: the end is ignored.
        reminder(3, "Offsite", "2025-10-02T13:00:00", Some("2025-10-03T13:00:00")),
        reminder(4, "Other day", "2025-10-03T09:00:00", None),
    ];

    let placed = day_layout(&reminders, day("2025-10-02"));
    let ids: Vec<i64> = placed.iter().map(|p| p.event.payload.id).collect();
    assert_eq!(ids, [2, 1, 3]);

    assert_eq!((placed[0].event.start_hour, placed[0].event.end_hour), (9.0, 10.0));
    assert_eq!((placed[1].event.start_hour, placed[1].event.end_hour), (9.5, 10.5));
    assert_eq!((placed[2].event.start_hour, placed[2].event.end_hour), (13.0, 14.0));

    assert_ne!(placed[0].assignment.lane, placed[1].assignment.lane);
    assert_eq!(placed[2].assignment.lane, 0);
    assert!(placed.iter().all(|p| p.assignment.total_lanes == 2));
}

#[test]
fn test_day_layout_of_empty_day() {
    let reminders = vec![reminder(1, "Standup", "2025-10-02T09:30:00", None)];
    assert!(day_layout(&reminders, day("2025-10-09")).is_empty());
}
