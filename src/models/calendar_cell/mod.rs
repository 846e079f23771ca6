// Calendar cell module
// Derived per-day view state for the month grid. Never persisted.

use chrono::NaiveDate;

use crate::models::event::Event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_weekend: bool,
    /// Events bound to this date after keyword filtering, in store order.
    pub events: Vec<Event>,
    /// Hidden cells are empty days while a keyword filter is active.
    pub visible: bool,
}

impl CalendarCell {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}
