// Module exports for models

pub mod calendar_cell;
pub mod event;
pub mod settings;
