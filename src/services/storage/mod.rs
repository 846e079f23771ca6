//! Key-value slot storage used to persist the event set.
//!
//! A slot is a named string value, the same model as browser `localStorage`.
//! [`MemoryStorage`] keeps slots in a map; [`SqliteStorage`] keeps them in
//! the `key_value_store` table.

use anyhow::Result;
use std::collections::HashMap;

mod sqlite;

pub use sqlite::SqliteStorage;

#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage {
    /// Value stored under `key`, or `None` if the slot was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process storage. Contents live as long as the value.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a single slot.
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self { slots }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
