//! Database schema definitions

/// SQL to create the Categories table
pub const CREATE_CATEGORIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
)
"#;

/// SQL to create the Expenses table
///
/// The foreign key is declared but not enforced: the `foreign_keys`
/// pragma stays off, so inserts with dangling category ids are accepted
/// and listings left-join around them.
pub const CREATE_EXPENSES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS Expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    amount REAL NOT NULL,
    date TEXT NOT NULL,
    category_id INTEGER,
    description TEXT,
    FOREIGN KEY (category_id) REFERENCES Categories (id)
)
"#;

/// All schema creation statements, in creation order
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_CATEGORIES_TABLE, CREATE_EXPENSES_TABLE]
}
