use chrono::{NaiveDate, NaiveTime};

use crate::models::event::{intervals_overlap, Event};

/// First event on `date` whose interval intersects `[start, end)`.
///
/// The event with id `exclude_id` is skipped so an edited event never
/// conflicts with its own stored version.
pub fn find_conflict<'a>(
    events: &'a [Event],
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    exclude_id: Option<i64>,
) -> Option<&'a Event> {
    events.iter().find(|existing| {
        Some(existing.id) != exclude_id
            && existing.date == date
            && intervals_overlap((start, end), (existing.start_time, existing.end_time))
    })
}

pub fn has_overlap(
    events: &[Event],
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    exclude_id: Option<i64>,
) -> bool {
    find_conflict(events, date, start, end, exclude_id).is_some()
}
