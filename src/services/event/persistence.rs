use super::error::{EventError, EventResult};
use super::EventStore;
use crate::models::event::Event;
use crate::services::storage::KeyValueStorage;

pub(crate) fn decode_events(raw: &str) -> EventResult<Vec<Event>> {
    serde_json::from_str(raw).map_err(EventError::MalformedPersistedData)
}

pub(crate) fn encode_events(events: &[Event]) -> EventResult<String> {
    serde_json::to_string(events).map_err(|err| EventError::Storage(err.into()))
}

impl<S: KeyValueStorage> EventStore<S> {
    /// Read the persisted event set.
    ///
    /// A missing slot, an unreadable slot and a malformed blob all yield an
    /// empty set.
    /// Read the slot. A missing slot or a malformed blob loads as an empty
    /// set; a failed read is an error.
    pub fn load(&self) -> EventResult<Vec<Event>> {
        let raw = match self.storage.get_item(&self.key)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match decode_events(&raw) {
            Ok(events) => Ok(events),
            Err(err) => {
                log::warn!("Ignoring stored events in '{}': {}", self.key, err);
                Ok(Vec::new())
            }
        }
    }

    pub fn save(&mut self, events: &[Event]) -> EventResult<()> {
        if events.is_empty() {
            log::debug!("Skipping persist of empty event set to '{}'", self.key);
            return Ok(());
        }

        let json = encode_events(events)?;
        self.storage.set_item(&self.key, &json)?;
        log::debug!("Persisted {} events to '{}'", events.len(), self.key);
        Ok(())
    }

    /// Persist `next` and only then make it the in-memory set.
    pub(super) fn commit(&mut self, next: Vec<Event>) -> EventResult<()> {
        self.save(&next)?;
        self.events = next;
        Ok(())
    }
}
