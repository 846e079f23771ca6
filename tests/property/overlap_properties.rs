// Property-based tests for overlap detection, store writes and month grids
// Checks the scheduling invariants against random inputs

use chrono::{Datelike, NaiveDate, NaiveTime};
use proptest::prelude::*;
use std::collections::HashSet;

use rust_calendar_widget::models::event::{intervals_overlap, EventDraft};
use rust_calendar_widget::services::event::{EventError, EventStore};
use rust_calendar_widget::services::month_view::{compute_month_grid, compute_padded_grid};
use rust_calendar_widget::services::storage::MemoryStorage;
use rust_calendar_widget::utils::date::days_in_month;

fn minutes_to_time(minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap()
}

/// A valid `[start, end)` interval within one day, at minute precision.
fn interval() -> impl Strategy<Value = (u32, u32)> {
    (0u32..1439).prop_flat_map(|start| (Just(start), (start + 1)..=1439))
}

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

proptest! {
    /// Property: overlap is exactly half-open interval intersection
    #[test]
    fn prop_overlap_matches_half_open_rule(a in interval(), b in interval()) {
        let ta = (minutes_to_time(a.0), minutes_to_time(a.1));
        let tb = (minutes_to_time(b.0), minutes_to_time(b.1));

        let expected = a.0 < b.1 && b.0 < a.1;
        prop_assert_eq!(intervals_overlap(ta, tb), expected);
        prop_assert_eq!(intervals_overlap(tb, ta), expected);
    }

    /// Property: a backwards or empty range never mutates the store
    #[test]
    fn prop_invalid_range_never_mutates(start in 0u32..1440, len in 0u32..600) {
        let end = start.saturating_sub(len);
        let mut store: EventStore<MemoryStorage> = EventStore::default();
        store
            .create(EventDraft::new("Seed", june(10), minutes_to_time(0), minutes_to_time(1)))
            .unwrap();

        let draft = EventDraft::new("Bad", june(10), minutes_to_time(start), minutes_to_time(end));
        let result = store.create(draft);

        let is_invalid_range = matches!(result, Err(EventError::InvalidTimeRange { .. }));
        prop_assert!(is_invalid_range);
        prop_assert_eq!(store.len(), 1);
    }

    /// Property: the store never holds two overlapping events on one day,
    /// and every accepted create adds exactly one event with a fresh id
    #[test]
    fn prop_store_keeps_days_conflict_free(
        requests in proptest::collection::vec((1u32..=3, interval()), 1..40)
    ) {
        let mut store: EventStore<MemoryStorage> = EventStore::default();
        let mut ids = HashSet::new();

        for (day, (start, end)) in requests {
            let before = store.len();
            let draft = EventDraft::new("Slot", june(day), minutes_to_time(start), minutes_to_time(end));
            match store.create(draft) {
                Ok(event) => {
                    prop_assert_eq!(store.len(), before + 1);
                    prop_assert!(ids.insert(event.id));
                }
                Err(err) => {
                    let is_overlap = matches!(err, EventError::Overlap { .. });
                    prop_assert!(is_overlap);
                    prop_assert_eq!(store.len(), before);
                }
            }
        }

        let events = store.list();
        for (i, a) in events.iter().enumerate() {
            for b in &events[i + 1..] {
                prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    /// Property: editing an event's own time range never conflicts with itself
    #[test]
    fn prop_update_never_self_conflicts(first in interval(), second in interval()) {
        let mut store: EventStore<MemoryStorage> = EventStore::default();
        let event = store
            .create(EventDraft::new("Solo", june(10), minutes_to_time(first.0), minutes_to_time(first.1)))
            .unwrap();

        let mut edited = event.clone();
        edited.start_time = minutes_to_time(second.0);
        edited.end_time = minutes_to_time(second.1);

        prop_assert_eq!(store.update(edited.clone()).unwrap(), Some(edited));
    }

    /// Property: the month grid is contiguous and as long as the month
    #[test]
    fn prop_month_grid_is_contiguous(
        year in 1900..2200i32,
        month in 1..=12u32,
        day in 1..=28u32,
    ) {
        let reference = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let grid = compute_month_grid(reference);

        prop_assert_eq!(grid.len() as u32, days_in_month(year, month));
        prop_assert_eq!(grid[0].day(), 1);
        for pair in grid.windows(2) {
            prop_assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
        prop_assert!(grid.iter().all(|d| d.month() == month && d.year() == year));
    }

    /// Property: padded grids cover whole weeks starting on the chosen weekday
    #[test]
    fn prop_padded_grid_covers_whole_weeks(
        year in 1900..2200i32,
        month in 1..=12u32,
        first_day_of_week in 0u8..7,
    ) {
        let reference = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let grid = compute_padded_grid(reference, first_day_of_week);

        prop_assert_eq!(grid.len() % 7, 0);
        prop_assert!(grid.len() >= 28 && grid.len() <= 42);
        prop_assert_eq!(grid[0].weekday().num_days_from_sunday(), u32::from(first_day_of_week));
        for day in compute_month_grid(reference) {
            prop_assert!(grid.contains(&day));
        }
    }
}
