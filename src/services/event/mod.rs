//! Event store entry point.
//! Owns the full event set and keeps it in sync with a key-value slot.
//! Operations are organized across focused submodules.

use crate::models::event::Event;
use crate::models::settings::{MovePolicy, Settings, DEFAULT_STORAGE_KEY};
use crate::services::storage::{KeyValueStorage, MemoryStorage};

pub mod crud;
pub mod error;
pub mod overlap;
mod persistence;
pub mod queries;

pub use error::{EventError, EventResult};

/// Owned, validated event set backed by one storage slot.
pub struct EventStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    move_policy: MovePolicy,
    events: Vec<Event>,
    last_id: i64,
}

impl<S: KeyValueStorage> EventStore<S> {
    /// Open a store on `storage` using the slot and move policy from `settings`,
    /// hydrating it from whatever the slot currently holds.
    pub fn open(storage: S, settings: &Settings) -> EventResult<Self> {
        Ok(Self::with_key(storage, settings.storage_key.clone())?
            .with_move_policy(settings.move_policy))
    }

    /// Open a store on the given slot with the permissive move policy.
    ///
    /// Fails when the slot cannot be read, so a later write never replaces
    /// events that were only temporarily unreachable.
    pub fn with_key(storage: S, key: impl Into<String>) -> EventResult<Self> {
        let mut store = Self::empty(storage, key);
        store.reload()?;
        Ok(store)
    }

    fn empty(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            move_policy: MovePolicy::default(),
            events: Vec::new(),
            last_id: 0,
        }
    }

    pub fn with_move_policy(mut self, move_policy: MovePolicy) -> Self {
        self.move_policy = move_policy;
        self
    }

    /// Discard the in-memory set and rehydrate it from storage.
    /// On a read error the current set is kept.
    pub fn reload(&mut self) -> EventResult<()> {
        self.events = self.load()?;
        self.last_id = self.events.iter().map(|e| e.id).max().unwrap_or(0);
        log::info!(
            "Loaded {} events from slot '{}'",
            self.events.len(),
            self.key
        );
        Ok(())
    }

    pub fn move_policy(&self) -> MovePolicy {
        self.move_policy
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl Default for EventStore<MemoryStorage> {
    fn default() -> Self {
        Self::empty(MemoryStorage::new(), DEFAULT_STORAGE_KEY)
    }
}
