//! Deadline classification and date arithmetic for the resolver queue.
//!
//! Pure derivations over dates. Nothing here is stored; views compute
//! these per render.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Urgency of an assigned case relative to its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineStatus {
    Overdue,
    Urgent,
    Normal,
}

impl DeadlineStatus {
    /// Classify a deadline against today. Only assigned complaints carry
    /// a deadline, so callers take it straight off the assignment block.
    pub fn classify(deadline: NaiveDate, today: NaiveDate) -> Self {
        if today > deadline {
            Self::Overdue
        } else if (deadline - today).num_days() <= 1 {
            Self::Urgent
        } else {
            Self::Normal
        }
    }

    /// Badge text for the resolver queue.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overdue => "Overdue",
            Self::Urgent => "Due Soon",
            Self::Normal => "On Track",
        }
    }

    /// Badge color token.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Overdue => "red",
            Self::Urgent => "orange",
            Self::Normal => "blue",
        }
    }
}

/// Whole days between two dates, ignoring direction. Drives the
/// "assigned N days ago" counter.
pub fn days_since(date: NaiveDate, today: NaiveDate) -> i64 {
    (today - date).num_days().abs()
}
