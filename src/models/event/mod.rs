// Event module
// Single-day timed event model and its persisted JSON layout

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::services::event::error::{EventError, EventResult};
use crate::utils::date::{parse_date, parse_time_of_day};

/// Presentational color tag. Has no effect on scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Blue,
    Green,
    Red,
    Yellow,
    Purple,
}

impl EventColor {
    pub const ALL: [EventColor; 5] = [
        EventColor::Blue,
        EventColor::Green,
        EventColor::Red,
        EventColor::Yellow,
        EventColor::Purple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventColor::Blue => "blue",
            EventColor::Green => "green",
            EventColor::Red => "red",
            EventColor::Yellow => "yellow",
            EventColor::Purple => "purple",
        }
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventColor {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        EventColor::ALL
            .into_iter()
            .find(|color| color.as_str() == needle)
            .ok_or_else(|| EventError::InvalidColor(s.to_string()))
    }
}

/// A single-day timed calendar entry.
///
/// The JSON layout matches the persisted slot and the JSON export:
/// camelCase keys, `YYYY-MM-DD` dates and zero-padded `HH:MM` times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
    #[serde(default, with = "blank_description")]
    pub description: Option<String>,
    #[serde(default)]
    pub color: EventColor,
}

impl Event {
    /// Check name and time range.
    pub fn validate(&self) -> EventResult<()> {
        validate_fields(&self.name, self.start_time, self.end_time)
    }

    /// Half-open interval intersection on the same date.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.date == other.date
            && intervals_overlap(
                (self.start_time, self.end_time),
                (other.start_time, other.end_time),
            )
    }

    /// `true` when `keyword` (already lowercased) occurs in name or description.
    pub(crate) fn matches_lowercase(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(keyword)
            || self
                .description
                .as_deref()
                .is_some_and(|desc| desc.to_lowercase().contains(keyword))
    }
}

/// `[a_start, a_end)` and `[b_start, b_end)` share at least one instant.
pub fn intervals_overlap(a: (NaiveTime, NaiveTime), b: (NaiveTime, NaiveTime)) -> bool {
    a.0 < b.1 && b.0 < a.1
}

fn validate_fields(name: &str, start: NaiveTime, end: NaiveTime) -> EventResult<()> {
    if name.trim().is_empty() {
        return Err(EventError::EmptyName);
    }
    if start >= end {
        return Err(EventError::InvalidTimeRange { start, end });
    }
    Ok(())
}

/// Event fields submitted for creation. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: Option<String>,
    pub color: EventColor,
}

impl EventDraft {
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            name: name.into(),
            date,
            start_time,
            end_time,
            description: None,
            color: EventColor::default(),
        }
    }

    /// Build a draft from raw form values.
    ///
    /// Dates must be `YYYY-MM-DD` and times zero-padded `HH:MM`. An empty
    /// description is stored as `None`; an empty color falls back to blue.
    pub fn from_form(
        name: &str,
        date: &str,
        start_time: &str,
        end_time: &str,
        description: &str,
        color: &str,
    ) -> EventResult<Self> {
        let date = parse_date(date).ok_or_else(|| EventError::InvalidDate(date.to_string()))?;
        let start_time = parse_time_of_day(start_time)
            .ok_or_else(|| EventError::InvalidTime(start_time.to_string()))?;
        let end_time = parse_time_of_day(end_time)
            .ok_or_else(|| EventError::InvalidTime(end_time.to_string()))?;
        let color = if color.trim().is_empty() {
            EventColor::default()
        } else {
            color.parse()?
        };

        let draft = Self {
            name: name.to_string(),
            date,
            start_time,
            end_time,
            description: Some(description.to_string()).filter(|d| !d.is_empty()),
            color,
        };
        draft.validate()?;
        Ok(draft)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }

    pub fn validate(&self) -> EventResult<()> {
        validate_fields(&self.name, self.start_time, self.end_time)
    }

    /// Attach an id, producing a full event.
    pub fn into_event(self, id: i64) -> Event {
        Event {
            id,
            name: self.name,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description,
            color: self.color,
        }
    }
}

impl From<Event> for EventDraft {
    fn from(event: Event) -> Self {
        Self {
            name: event.name,
            date: event.date,
            start_time: event.start_time,
            end_time: event.end_time,
            description: event.description,
            color: event.color,
        }
    }
}

/// Serde adapter for zero-padded `HH:MM` times.
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::utils::date::{parse_time_of_day, TIME_FORMAT};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time_of_day(&raw)
            .ok_or_else(|| de::Error::custom(format!("expected HH:MM time, got {raw:?}")))
    }
}

/// Serde adapter writing a missing description as `""`.
/// Reads `""`, `null` and an absent key back as `None`.
mod blank_description {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        description: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(description.as_deref().unwrap_or_default())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|d| !d.is_empty()))
    }
}
