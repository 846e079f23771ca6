// Settings service module
// Loads and saves settings.toml

mod service;

pub use service::{resolve_database_path, SettingsService};
