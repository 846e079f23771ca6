use super::EventStore;
use crate::models::event::Event;
use crate::services::storage::KeyValueStorage;
use chrono::NaiveDate;

impl<S: KeyValueStorage> EventStore<S> {
    /// Every event in insertion order.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events on a single date, in insertion order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|event| event.date == date).collect()
    }
}
