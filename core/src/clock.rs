//! Desk clock: the single source of "today" and "now".
//!
//! Transition functions never read the system time themselves. The clock
//! is handed into every time-dependent operation, so a pinned clock
//! replays the exact same transitions in tests and demo runs.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DeskClock {
    /// Wall-clock time. What the runner uses by default.
    System,
    /// A pinned calendar date. Used by tests and reproducible demos.
    Fixed { today: NaiveDate },
}

impl DeskClock {
    pub fn system() -> Self {
        Self::System
    }

    pub fn fixed(today: NaiveDate) -> Self {
        Self::Fixed { today }
    }

    /// The current calendar date (UTC).
    pub fn today(&self) -> NaiveDate {
        match self {
            Self::System => Utc::now().date_naive(),
            Self::Fixed { today } => *today,
        }
    }

    /// The current instant. A fixed clock pins it to midnight of `today`.
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed { today } => Utc.from_utc_datetime(&today.and_time(NaiveTime::MIN)),
        }
    }
}
