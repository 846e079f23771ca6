// Test fixtures - reusable test data
// Provides consistent dates and drafts across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use rust_calendar_widget::models::event::{EventColor, EventDraft};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday June 10, 2024
    pub fn june_10_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    /// Friday May 31, 2024 (last day before June)
    pub fn may_31_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    pub fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample event drafts for testing
pub mod drafts {
    use super::*;

    /// 09:00-10:00 stand-up on June 10, 2024
    pub fn standup() -> EventDraft {
        EventDraft::new(
            "Team sync",
            dates::june_10_2024(),
            dates::time(9, 0),
            dates::time(10, 0),
        )
        .with_description("Daily stand-up")
        .with_color(EventColor::Blue)
    }

    /// 12:00-13:00 lunch on June 10, 2024
    pub fn lunch() -> EventDraft {
        EventDraft::new(
            "Lunch",
            dates::june_10_2024(),
            dates::time(12, 0),
            dates::time(13, 0),
        )
        .with_color(EventColor::Green)
    }

    /// Month-end review on May 31, 2024
    pub fn may_review() -> EventDraft {
        EventDraft::new(
            "Month-end review",
            dates::may_31_2024(),
            dates::time(16, 0),
            dates::time(17, 0),
        )
        .with_color(EventColor::Purple)
    }
}
