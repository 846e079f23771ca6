use super::error::{EventError, EventResult};
use super::overlap::has_overlap;
use super::EventStore;
use crate::models::event::{Event, EventDraft};
use crate::models::settings::MovePolicy;
use crate::services::storage::KeyValueStorage;
use chrono::{Local, NaiveDate, NaiveTime};

impl<S: KeyValueStorage> EventStore<S> {
    /// Validate and append a new event, assigning it a fresh id.
    pub fn create(&mut self, draft: EventDraft) -> EventResult<Event> {
        draft.validate()?;
        self.ensure_free(draft.date, draft.start_time, draft.end_time, None)?;

        let id = self.next_id()?;
        let event = draft.into_event(id);

        let mut next = self.events.clone();
        next.push(event.clone());
        self.commit(next)?;
        self.last_id = id;

        Ok(event)
    }

    /// Replace the event with the same id, keeping its position.
    ///
    /// Returns `Ok(None)` without touching storage when no event has that id.
    pub fn update(&mut self, event: Event) -> EventResult<Option<Event>> {
        event.validate()?;
        self.ensure_free(event.date, event.start_time, event.end_time, Some(event.id))?;

        let Some(index) = self.position(event.id) else {
            return Ok(None);
        };

        let mut next = self.events.clone();
        next[index] = event.clone();
        self.commit(next)?;

        Ok(Some(event))
    }

    /// Remove the event with `id`, returning it. Absent ids are a no-op.
    pub fn delete(&mut self, id: i64) -> EventResult<Option<Event>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let mut next = self.events.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        Ok(Some(removed))
    }

    /// Reschedule an event to `new_date`, keeping its times and details.
    ///
    /// Under [`MovePolicy::Validate`] a move onto a conflicting slot fails
    /// with [`EventError::Overlap`]; the permissive policy moves regardless.
    pub fn move_to_date(&mut self, id: i64, new_date: NaiveDate) -> EventResult<Option<Event>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let mut moved = self.events[index].clone();
        moved.date = new_date;

        if self.move_policy == MovePolicy::Validate {
            self.ensure_free(new_date, moved.start_time, moved.end_time, Some(id))?;
        }

        let mut next = self.events.clone();
        next[index] = moved.clone();
        self.commit(next)?;

        Ok(Some(moved))
    }

    fn ensure_free(
        &self,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        exclude_id: Option<i64>,
    ) -> EventResult<()> {
        if has_overlap(&self.events, date, start, end, exclude_id) {
            return Err(EventError::Overlap { date });
        }
        Ok(())
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }

    /// Millisecond timestamp, bumped past every id issued or loaded so far.
    fn next_id(&self) -> EventResult<i64> {
        let now = Local::now().timestamp_millis();
        let floor = self
            .events
            .iter()
            .map(|event| event.id)
            .max()
            .unwrap_or(0)
            .max(self.last_id);
        let bumped = floor.checked_add(1).ok_or(EventError::IdsExhausted)?;
        Ok(now.max(bumped))
    }
}
