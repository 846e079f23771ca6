// Database service module
// SQLite connection and schema for the key-value slot table

mod connection;
pub mod schema;

pub use connection::Database;
