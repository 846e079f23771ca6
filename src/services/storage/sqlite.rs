use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};
use std::path::Path;

use super::KeyValueStorage;
use crate::services::database::schema::KEY_VALUE_TABLE;
use crate::services::database::Database;

/// Slots stored as rows of the `key_value_store` table.
pub struct SqliteStorage {
    db: Database,
}

impl SqliteStorage {
    /// Wrap an open database, creating the table if needed.
    pub fn new(db: Database) -> Result<Self> {
        db.initialize_schema()?;
        Ok(Self { db })
    }

    /// Open (or create) the database file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        Self::new(Database::open_file(path)?)
    }

    pub fn in_memory() -> Result<Self> {
        Self::new(Database::new(":memory:")?)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.db
            .connection()
            .query_row(
                &format!("SELECT value FROM {} WHERE key = ?", KEY_VALUE_TABLE),
                [key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read slot '{}'", key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.db
            .connection()
            .execute(
                &format!(
                    "INSERT INTO {} (key, value, updated_at)
                     VALUES (?1, ?2, CURRENT_TIMESTAMP)
                     ON CONFLICT(key) DO UPDATE SET
                        value = excluded.value,
                        updated_at = excluded.updated_at",
                    KEY_VALUE_TABLE
                ),
                params![key, value],
            )
            .with_context(|| format!("Failed to write slot '{}'", key))?;

        Ok(())
    }
}
