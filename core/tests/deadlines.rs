//! Deadline classification and date arithmetic tests.

use chrono::{Duration, NaiveDate};
use supportly_core::deadline::{days_since, DeadlineStatus};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// One day past the deadline is overdue.
#[test]
fn past_deadline_is_overdue() {
    let deadline = day(2024, 1, 25);
    let today = deadline + Duration::days(1);
    assert_eq!(DeadlineStatus::classify(deadline, today), DeadlineStatus::Overdue);
}

/// A deadline tomorrow (or today) is urgent, not overdue.
#[test]
fn imminent_deadline_is_urgent() {
    let today = day(2024, 1, 24);
    assert_eq!(
        DeadlineStatus::classify(today + Duration::days(1), today),
        DeadlineStatus::Urgent
    );
    assert_eq!(
        DeadlineStatus::classify(today, today),
        DeadlineStatus::Urgent,
        "due today still counts as urgent, not overdue"
    );
}

/// A deadline three days out is on track.
#[test]
fn distant_deadline_is_normal() {
    let today = day(2024, 1, 24);
    assert_eq!(
        DeadlineStatus::classify(today + Duration::days(3), today),
        DeadlineStatus::Normal
    );
}

/// Badge text and color tokens are stable per classification.
#[test]
fn badge_tokens_are_stable() {
    assert_eq!(DeadlineStatus::Overdue.label(), "Overdue");
    assert_eq!(DeadlineStatus::Urgent.label(), "Due Soon");
    assert_eq!(DeadlineStatus::Normal.label(), "On Track");
    assert_eq!(DeadlineStatus::Overdue.color(), "red");
    assert_eq!(DeadlineStatus::Urgent.color(), "orange");
    assert_eq!(DeadlineStatus::Normal.color(), "blue");
}

/// days_since counts whole days and ignores direction.
#[test]
fn days_since_is_absolute() {
    let today = day(2024, 2, 1);
    assert_eq!(days_since(day(2024, 1, 22), today), 10);
    assert_eq!(days_since(today, today), 0);
    assert_eq!(days_since(day(2024, 2, 4), today), 3);
}
