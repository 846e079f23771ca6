use anyhow::{Context, Result};
use rusqlite::Connection;

pub const KEY_VALUE_TABLE: &str = "key_value_store";

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_key_value_table(conn)?;
    Ok(())
}

fn create_key_value_table(conn: &Connection) -> Result<()> {
    conn.execute(
        &format!(
            "CREATE TABLE IF NOT EXISTS {} (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )",
            KEY_VALUE_TABLE
        ),
        [],
    )
    .with_context(|| format!("Failed to create {} table", KEY_VALUE_TABLE))?;

    Ok(())
}
