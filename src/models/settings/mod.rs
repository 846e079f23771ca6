// Settings module
// User configuration loaded from settings.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::services::export::ExportFormat;

/// Whether drag-and-drop rescheduling runs the overlap check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovePolicy {
    /// Move without checking for conflicts on the target date.
    #[default]
    Permissive,
    /// Reject a move that would overlap another event on the target date.
    Validate,
}

/// Quoting applied to CSV exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvQuoting {
    /// Quote fields containing separators and double embedded quotes.
    #[default]
    Rfc4180,
    /// Only wrap the description in quotes; everything else is written raw.
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// SQLite file backing the event slot. `None` uses the data directory.
    pub database_path: Option<PathBuf>,
    /// Name of the key-value slot holding the event array.
    pub storage_key: String,
    /// 0 = Sunday ... 6 = Saturday.
    pub first_day_of_week: u8,
    /// Render whole weeks including adjacent-month days.
    pub pad_grid: bool,
    pub move_policy: MovePolicy,
    pub csv_quoting: CsvQuoting,
    pub export_format: ExportFormat,
}

pub const DEFAULT_STORAGE_KEY: &str = "events";

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            first_day_of_week: 0, // Sunday
            pad_grid: false,
            move_policy: MovePolicy::default(),
            csv_quoting: CsvQuoting::default(),
            export_format: ExportFormat::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be between 0 and 6, got {}",
                self.first_day_of_week
            ));
        }
        if self.storage_key.trim().is_empty() {
            return Err("storage_key cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.storage_key, "events");
        assert_eq!(settings.move_policy, MovePolicy::Permissive);
        assert_eq!(settings.csv_quoting, CsvQuoting::Rfc4180);
    }

    #[test]
    fn test_validate_first_day_of_week() {
        let settings = Settings {
            first_day_of_week: 7,
            ..Settings::default()
        };
        assert!(settings.validate().unwrap_err().contains("first_day_of_week"));
    }

    #[test]
    fn test_validate_storage_key() {
        let settings = Settings {
            storage_key: " ".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("move_policy = \"validate\"\n").unwrap();
        assert_eq!(settings.move_policy, MovePolicy::Validate);
        assert_eq!(settings.storage_key, "events");
        assert_eq!(settings.first_day_of_week, 0);
    }
}
