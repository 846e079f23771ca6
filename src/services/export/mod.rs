//! JSON and CSV export of a calendar month.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::models::event::Event;
use crate::models::settings::CsvQuoting;
use crate::utils::date::{is_same_month, month_label};

mod csv;
mod json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("Unsupported export format '{}'", other)),
        }
    }
}

/// Export payload ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub content: String,
    pub filename: String,
    pub mime_type: &'static str,
}

/// Events dated in the calendar month of `reference_month`, in store order.
///
/// Selection is by year and month only, so adjacent-month days shown in a
/// padded grid never leak into an export.
pub fn select_events_for_export(events: &[Event], reference_month: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|event| is_same_month(event.date, reference_month))
        .cloned()
        .collect()
}

/// Render `events` in `format`. The file name carries the `yyyy-MM` of
/// `reference_month`.
pub fn serialize_export(
    events: &[Event],
    format: ExportFormat,
    reference_month: NaiveDate,
    quoting: CsvQuoting,
) -> Result<ExportFile> {
    let content = match format {
        ExportFormat::Json => json::render(events)?,
        ExportFormat::Csv => csv::render(events, quoting),
    };

    let filename = format!("events_{}.{}", month_label(reference_month), format.extension());
    log::debug!("Serialized {} events to {}", events.len(), filename);

    Ok(ExportFile {
        content,
        filename,
        mime_type: format.mime_type(),
    })
}

/// Select the month's events and serialize them.
pub fn export_month(
    events: &[Event],
    format: ExportFormat,
    reference_month: NaiveDate,
    quoting: CsvQuoting,
) -> Result<ExportFile> {
    let selected = select_events_for_export(events, reference_month);
    serialize_export(&selected, format, reference_month, quoting)
}

/// Write an export into `dir`, returning the full path.
pub fn write_export(file: &ExportFile, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory: {:?}", dir))?;

    let path = dir.join(&file.filename);
    fs::write(&path, &file.content)
        .with_context(|| format!("Failed to write export to {:?}", path))?;

    log::info!("Exported events to {:?}", path);
    Ok(path)
}
