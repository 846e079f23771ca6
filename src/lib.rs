// Rust Calendar Widget Library
// Event store, month grid and export core shared by the binary and tests

pub mod models;
pub mod services;
pub mod utils;
