//! Errors reported by event validation and the event store.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Event name cannot be empty")]
    EmptyName,

    #[error("End time must be after start time ({start} - {end})")]
    InvalidTimeRange { start: NaiveTime, end: NaiveTime },

    #[error("This event overlaps with an existing event on {date}")]
    Overlap { date: NaiveDate },

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Unknown event color '{0}'")]
    InvalidColor(String),

    #[error("No event id left above the largest stored id")]
    IdsExhausted,

    #[error("Stored events are malformed: {0}")]
    MalformedPersistedData(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type EventResult<T> = Result<T, EventError>;
