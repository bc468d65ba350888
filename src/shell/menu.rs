//! Menu commands and rendering
//!
//! The typed option number maps onto an explicit command enum; the
//! dispatch in `shell::run` matches on it rather than on raw integers.

use crate::ui;

/// One entry of the eight-option menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    AddCategory,
    DeleteExpense,
    DeleteCategory,
    ListExpenses,
    ListCategories,
    Summarize,
    Exit,
}

impl MenuChoice {
    /// Parse the typed menu number. Anything that is not 1-8 is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(Self::AddExpense),
            2 => Some(Self::AddCategory),
            3 => Some(Self::DeleteExpense),
            4 => Some(Self::DeleteCategory),
            5 => Some(Self::ListExpenses),
            6 => Some(Self::ListCategories),
            7 => Some(Self::Summarize),
            8 => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AddExpense => "Add a new expense",
            Self::AddCategory => "Add a new category",
            Self::DeleteExpense => "Delete an expense",
            Self::DeleteCategory => "Delete a category",
            Self::ListExpenses => "View all expenses",
            Self::ListCategories => "View all categories",
            Self::Summarize => "Summarize expenses by category",
            Self::Exit => "Exit",
        }
    }

    /// All choices, in menu display order.
    pub fn all() -> &'static [MenuChoice] {
        &[
            Self::AddExpense,
            Self::AddCategory,
            Self::DeleteExpense,
            Self::DeleteCategory,
            Self::ListExpenses,
            Self::ListCategories,
            Self::Summarize,
            Self::Exit,
        ]
    }
}

/// Print the full menu block, redisplayed after every action.
pub fn print_menu() {
    println!();
    ui::rule();
    ui::header("Menu");
    for (i, choice) in MenuChoice::all().iter().enumerate() {
        ui::menu_item(i as u32 + 1, choice.label());
    }
    ui::rule();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_maps_every_option() {
        for (i, expected) in MenuChoice::all().iter().enumerate() {
            let input = (i + 1).to_string();
            assert_eq!(MenuChoice::parse(&input), Some(*expected));
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::ListExpenses));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse("-1"), None);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(MenuChoice::parse("abc"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("1.5"), None);
    }
}
