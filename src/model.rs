//! Domain records - categories and expenses
//!
//! These are the shapes the storage layer reads and writes:
//! - `Category`: a user-defined label (optionally carrying an icon)
//! - `NewExpense`: an expense as entered, before the store assigns an id
//! - `ExpenseRow`: an expense as listed, joined to its category name
//! - `CategoryTotal`: one group of the per-category spending summary

/// A user-defined expense category.
///
/// `id` is assigned by the store and never changes. `name` is free-form;
/// the schema does not enforce uniqueness, only the seeding routine
/// checks for existing names.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// An expense as entered by the user, before insertion.
///
/// `category_id` is a logical reference: the store accepts values that do
/// not match any category, and listings surface those rows with no
/// category name rather than dropping them.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub amount: f64,
    /// Uninterpreted text; no calendar validation is applied.
    pub date: String,
    pub category_id: Option<i64>,
    pub description: Option<String>,
}

/// An expense row as returned by listings, left-joined to its category.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub id: i64,
    pub amount: f64,
    pub date: String,
    /// `None` when the expense has no category or references a deleted one.
    pub category: Option<String>,
    pub description: Option<String>,
}

/// One group of the per-category summary: total spend under one name.
///
/// The `None` bucket collects expenses with missing or dangling category
/// references.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Option<String>,
    pub total: f64,
}
