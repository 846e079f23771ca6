//! Month grid computation and per-day event binning.
//!
//! Everything here is a pure function of its inputs: the caller passes the
//! reference date, "today", the selection and the keyword explicitly so a
//! render can be reproduced exactly in tests.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

use crate::models::calendar_cell::CalendarCell;
use crate::models::event::Event;
use crate::utils::date::{first_day_of_month, is_same_month, is_weekend, last_day_of_month};

/// Previous/next month navigation.
pub use crate::utils::date::shift_month;

/// Every date of the calendar month containing `reference`, ascending.
pub fn compute_month_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = first_day_of_month(reference);
    let last = last_day_of_month(reference);
    first.iter_days().take_while(|day| *day <= last).collect()
}

/// The month grid extended to whole weeks.
///
/// Leading and trailing days come from the adjacent months so the grid starts
/// on `first_day_of_week` (0 = Sunday ... 6 = Saturday) and its length is a
/// multiple of seven.
pub fn compute_padded_grid(reference: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    let first = first_day_of_month(reference);
    let last = last_day_of_month(reference);
    let week_start = u32::from(first_day_of_week % 7);

    let leading = (first.weekday().num_days_from_sunday() + 7 - week_start) % 7;
    let trailing = (week_start + 6 - last.weekday().num_days_from_sunday()) % 7;

    let start = first - Duration::days(i64::from(leading));
    let end = last + Duration::days(i64::from(trailing));
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Group events by date for every day of `grid`.
///
/// Every grid date is a key, empty days included. Same-day events keep the
/// order they have in `events`.
pub fn bin_events_by_day(events: &[Event], grid: &[NaiveDate]) -> BTreeMap<NaiveDate, Vec<Event>> {
    let mut bins: BTreeMap<NaiveDate, Vec<Event>> =
        grid.iter().map(|day| (*day, Vec::new())).collect();

    for event in events {
        if let Some(bin) = bins.get_mut(&event.date) {
            bin.push(event.clone());
        }
    }

    bins
}

/// Case-insensitive substring match on name or description.
/// No keyword, or an empty one, keeps every event.
pub fn filter_by_keyword(events: &[Event], keyword: Option<&str>) -> Vec<Event> {
    match active_keyword(keyword) {
        None => events.to_vec(),
        Some(keyword) => {
            let needle = keyword.to_lowercase();
            events
                .iter()
                .filter(|event| event.matches_lowercase(&needle))
                .cloned()
                .collect()
        }
    }
}

/// A day is shown when it has events, or when no keyword filter is active.
pub fn cell_visibility(_day: NaiveDate, bound_events: &[Event], keyword: Option<&str>) -> bool {
    !bound_events.is_empty() || active_keyword(keyword).is_none()
}

fn active_keyword(keyword: Option<&str>) -> Option<&str> {
    keyword.filter(|k| !k.is_empty())
}

/// Inputs for a single month render.
#[derive(Debug, Clone)]
pub struct MonthViewOptions<'a> {
    pub reference: NaiveDate,
    pub today: NaiveDate,
    pub selected: Option<NaiveDate>,
    pub keyword: Option<&'a str>,
    /// `Some(first_day_of_week)` pads the grid to whole weeks.
    pub pad_to_weeks: Option<u8>,
}

impl<'a> MonthViewOptions<'a> {
    pub fn new(reference: NaiveDate, today: NaiveDate) -> Self {
        Self {
            reference,
            today,
            selected: None,
            keyword: None,
            pad_to_weeks: None,
        }
    }

    pub fn selected(mut self, date: NaiveDate) -> Self {
        self.selected = Some(date);
        self
    }

    pub fn keyword(mut self, keyword: &'a str) -> Self {
        self.keyword = Some(keyword);
        self
    }

    pub fn padded(mut self, first_day_of_week: u8) -> Self {
        self.pad_to_weeks = Some(first_day_of_week);
        self
    }
}

/// Filter, bin and flag every day of the displayed month.
pub fn build_cells(options: &MonthViewOptions<'_>, events: &[Event]) -> Vec<CalendarCell> {
    let grid = match options.pad_to_weeks {
        Some(first_day_of_week) => compute_padded_grid(options.reference, first_day_of_week),
        None => compute_month_grid(options.reference),
    };
    let filtered = filter_by_keyword(events, options.keyword);
    let mut bins = bin_events_by_day(&filtered, &grid);

    grid.into_iter()
        .map(|date| {
            let events = bins.remove(&date).unwrap_or_default();
            let visible = cell_visibility(date, &events, options.keyword);
            CalendarCell {
                date,
                in_current_month: is_same_month(date, options.reference),
                is_today: date == options.today,
                is_selected: options.selected == Some(date),
                is_weekend: is_weekend(date),
                events,
                visible,
            }
        })
        .collect()
}
