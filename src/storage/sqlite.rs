//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use super::schema;
use crate::model::{Category, CategoryTotal, ExpenseRow, NewExpense};
use crate::{Error, Result};

/// Categories inserted on first run, in menu display order.
///
/// Seeding checks each name before inserting, so re-running against an
/// existing database never duplicates them.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "🥗 Food",
    "✈️ Transport",
    "🎧 Entertainment",
    "🛠️ Utilities",
    "🏥 Health",
];

/// SQLite-backed store for categories and expenses
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| Error::StorageUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Create the tables if absent. Safe to call on every startup.
    pub fn ensure_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Category Operations ==========

    /// Insert each name that no existing category already uses.
    ///
    /// Order is preserved; names already present are skipped silently.
    pub fn seed_default_categories(&self, names: &[&str]) -> Result<()> {
        let mut seeded = 0;
        for name in names {
            let existing: Option<i64> = self
                .conn
                .query_row("SELECT id FROM Categories WHERE name = ?1", [name], |row| {
                    row.get(0)
                })
                .optional()?;
            if existing.is_none() {
                self.conn
                    .execute("INSERT INTO Categories (name) VALUES (?1)", [name])?;
                seeded += 1;
            }
        }
        tracing::debug!("seeded {} of {} default categories", seeded, names.len());
        Ok(())
    }

    /// Insert a new category with a store-assigned id
    pub fn add_category(&self, name: &str) -> Result<()> {
        self.conn
            .execute("INSERT INTO Categories (name) VALUES (?1)", [name])?;
        Ok(())
    }

    /// Delete a category and every expense referencing it.
    ///
    /// Both deletes run in one transaction so a fault cannot leave
    /// orphaned expenses or a half-removed category behind.
    pub fn delete_category(&mut self, id: i64) -> Result<()> {
        let tx = self.conn.transaction()?;
        let expenses = tx.execute("DELETE FROM Expenses WHERE category_id = ?1", [id])?;
        tx.execute("DELETE FROM Categories WHERE id = ?1", [id])?;
        tx.commit()?;
        tracing::debug!("deleted category {} and {} expense rows", id, expenses);
        Ok(())
    }

    /// All categories, ascending id (insertion order), fully materialized
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM Categories ORDER BY id")?;

        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(categories)
    }

    // ========== Expense Operations ==========

    /// Insert a new expense with a store-assigned id.
    ///
    /// The category reference is not validated; dangling ids are accepted
    /// and surface as uncategorized rows in listings.
    pub fn add_expense(&self, expense: &NewExpense) -> Result<()> {
        self.conn.execute(
            "INSERT INTO Expenses (amount, date, category_id, description) VALUES (?1, ?2, ?3, ?4)",
            params![
                expense.amount,
                expense.date,
                expense.category_id,
                expense.description,
            ],
        )?;
        Ok(())
    }

    /// Delete an expense by id. A missing id is a no-op, not an error.
    pub fn delete_expense(&self, id: i64) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM Expenses WHERE id = ?1", [id])?;
        tracing::debug!("delete expense {}: {} rows", id, deleted);
        Ok(())
    }

    /// All expenses, left-joined to their category names.
    ///
    /// Expenses with no category or a dangling reference are included
    /// with `category: None` rather than excluded.
    pub fn list_expenses(&self) -> Result<Vec<ExpenseRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT e.id, e.amount, e.date, c.name, e.description
             FROM Expenses e
             LEFT JOIN Categories c ON e.category_id = c.id",
        )?;

        let expenses = stmt
            .query_map([], |row| {
                Ok(ExpenseRow {
                    id: row.get(0)?,
                    amount: row.get(1)?,
                    date: row.get(2)?,
                    category: row.get(3)?,
                    description: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(expenses)
    }

    /// Total spend per category name, via left join.
    ///
    /// Uncategorized and dangling expenses group under the `None` bucket.
    /// Group order is whatever SQLite produces; callers must not rely on it.
    pub fn summarize_by_category(&self) -> Result<Vec<CategoryTotal>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.name, SUM(e.amount)
             FROM Expenses e
             LEFT JOIN Categories c ON c.id = e.category_id
             GROUP BY c.name",
        )?;

        let totals = stmt
            .query_map([], |row| {
                Ok(CategoryTotal {
                    category: row.get(0)?,
                    total: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expense(amount: f64, category_id: Option<i64>) -> NewExpense {
        NewExpense {
            amount,
            date: "2024-01-01".to_string(),
            category_id,
            description: Some("test".to_string()),
        }
    }

    #[test]
    fn test_schema_is_idempotent() {
        let store = SqliteStore::open_in_memory().unwrap();
        // Second pass must not error on the existing tables
        store.ensure_schema().unwrap();
        store.add_category("🥗 Food").unwrap();
        assert_eq!(store.list_categories().unwrap().len(), 1);
    }

    #[test]
    fn test_seeding_twice_never_duplicates() {
        let store = SqliteStore::open_in_memory().unwrap();
        let defaults = ["🥗 Food", "✈️ Transport"];

        store.seed_default_categories(&defaults).unwrap();
        store.seed_default_categories(&defaults).unwrap();

        let categories = store.list_categories().unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "🥗 Food");
        assert_eq!(categories[1].name, "✈️ Transport");
    }

    #[test]
    fn test_seeding_preserves_order_and_ids_ascend() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.seed_default_categories(DEFAULT_CATEGORIES).unwrap();

        let categories = store.list_categories().unwrap();
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
        for (i, category) in categories.iter().enumerate() {
            assert_eq!(category.name, DEFAULT_CATEGORIES[i]);
            assert_eq!(category.id, i as i64 + 1);
        }
    }

    #[test]
    fn test_expense_round_trip() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.add_category("🥗 Food").unwrap();

        store
            .add_expense(&NewExpense {
                amount: 12.50,
                date: "2024-01-01".to_string(),
                category_id: Some(1),
                description: Some("lunch".to_string()),
            })
            .unwrap();

        let rows = store.list_expenses().unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.id, 1);
        assert_eq!(row.amount, 12.50);
        assert_eq!(row.date, "2024-01-01");
        assert_eq!(row.category.as_deref(), Some("🥗 Food"));
        assert_eq!(row.description.as_deref(), Some("lunch"));
    }

    #[test]
    fn test_dangling_category_reference_is_accepted() {
        let store = SqliteStore::open_in_memory().unwrap();

        // No category 42 exists; the insert must still succeed
        store.add_expense(&sample_expense(3.0, Some(42))).unwrap();

        let rows = store.list_expenses().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, None);
    }

    #[test]
    fn test_delete_category_cascades() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.add_category("🥗 Food").unwrap();
        store.add_category("✈️ Transport").unwrap();

        store.add_expense(&sample_expense(10.0, Some(1))).unwrap();
        store.add_expense(&sample_expense(20.0, Some(1))).unwrap();
        store.add_expense(&sample_expense(30.0, Some(2))).unwrap();

        store.delete_category(1).unwrap();

        let rows = store.list_expenses().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 30.0);
        assert_eq!(rows[0].category.as_deref(), Some("✈️ Transport"));

        let categories = store.list_categories().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "✈️ Transport");
    }

    #[test]
    fn test_delete_missing_expense_is_noop() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.add_expense(&sample_expense(5.0, None)).unwrap();

        store.delete_expense(9999).unwrap();

        assert_eq!(store.list_expenses().unwrap().len(), 1);
    }

    #[test]
    fn test_summary_sums_per_category() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.add_category("🥗 Food").unwrap();

        store.add_expense(&sample_expense(10.0, Some(1))).unwrap();
        store.add_expense(&sample_expense(5.5, Some(1))).unwrap();

        let totals = store.summarize_by_category().unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category.as_deref(), Some("🥗 Food"));
        assert!((totals[0].total - 15.5).abs() < 1e-9);
    }

    #[test]
    fn test_summary_groups_orphans_under_none() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.add_category("🥗 Food").unwrap();

        store.add_expense(&sample_expense(10.0, Some(1))).unwrap();
        store.add_expense(&sample_expense(2.0, None)).unwrap();
        store.add_expense(&sample_expense(3.0, Some(42))).unwrap();

        let mut totals = store.summarize_by_category().unwrap();
        totals.sort_by(|a, b| a.category.cmp(&b.category));

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, None);
        assert!((totals[0].total - 5.0).abs() < 1e-9);
        assert_eq!(totals[1].category.as_deref(), Some("🥗 Food"));
        assert!((totals[1].total - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_on_disk_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.add_category("🥗 Food").unwrap();
            store.add_expense(&sample_expense(7.25, Some(1))).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let rows = store.list_expenses().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 7.25);
        assert_eq!(rows[0].category.as_deref(), Some("🥗 Food"));
    }

    #[test]
    fn test_open_fails_on_unwritable_path() {
        let err = SqliteStore::open(Path::new("/nonexistent/dir/expenses.db")).unwrap_err();
        assert!(matches!(err, Error::StorageUnavailable { .. }));
    }
}
