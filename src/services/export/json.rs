use anyhow::{Context, Result};

use crate::models::event::Event;

/// Pretty-printed array of full event records, two-space indented.
pub(super) fn render(events: &[Event]) -> Result<String> {
    serde_json::to_string_pretty(events).context("Failed to serialize events to JSON")
}
