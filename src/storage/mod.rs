//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - Categories(id, name)
//! - Expenses(id, amount, date, category_id, description)
//!
//! Every operation commits immediately; the only multi-statement unit is
//! the cascade delete of a category, which runs in one transaction.

pub mod schema;
pub mod sqlite;

pub use sqlite::{DEFAULT_CATEGORIES, SqliteStore};
