//! # Spendlog - Personal Expense Ledger
//!
//! Categorized spending records persisted in SQLite, driven by an
//! interactive text menu.
//!
//! Spendlog provides:
//! - A SQLite-backed store for categories and expenses
//! - Cascade deletion of a category together with its expenses
//! - A per-category spending summary (left-joined group-by-sum)
//! - An interactive shell with explicit numeric-input validation

pub mod config;
pub mod model;
pub mod shell;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use model::{Category, CategoryTotal, ExpenseRow, NewExpense};
pub use storage::SqliteStore;

use std::path::PathBuf;

/// Result type alias for Spendlog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Spendlog operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The database file could not be opened or created. Fatal at startup.
    #[error("cannot open database at {}: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// A read or write failed after the store was opened. Surfaced to the
    /// user for that action; the shell keeps running.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Non-numeric input where a number was expected. Recovered locally.
    #[error("invalid input: {0}")]
    InputParse(String),

    /// The terminal prompt itself failed (closed stdin, broken tty).
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
