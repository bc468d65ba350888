//! Interactive Shell - the menu loop
//!
//! A single state: awaiting a menu choice. Every completed or aborted
//! action returns to it. Storage faults are printed and the loop keeps
//! running; only a dead terminal ends the session abnormally.

pub mod menu;
pub mod prompt;

use menu::MenuChoice;

use crate::model::NewExpense;
use crate::storage::SqliteStore;
use crate::{Error, Result, ui};

/// Run the menu loop until the user confirms exit.
pub fn run(store: &mut SqliteStore) -> Result<()> {
    loop {
        menu::print_menu();
        let raw = prompt::text("Choose an option")?;
        let Some(choice) = MenuChoice::parse(&raw) else {
            ui::warn("Invalid option. Please choose a number from 1 to 8.");
            continue;
        };

        if choice == MenuChoice::Exit {
            if prompt::confirm("Are you sure about that?")? {
                println!("{} Thank you for using the service", ui::Icons::WAVE);
                break;
            }
            continue;
        }

        if let Err(err) = dispatch(store, choice) {
            match err {
                Error::InputParse(message) => ui::warn(&message),
                // No terminal left to show a menu on
                err @ Error::Prompt(_) => return Err(err),
                other => {
                    tracing::error!("menu action failed: {}", other);
                    ui::error(&other.to_string());
                }
            }
        }
    }
    Ok(())
}

fn dispatch(store: &mut SqliteStore, choice: MenuChoice) -> Result<()> {
    match choice {
        MenuChoice::AddExpense => add_expense(store),
        MenuChoice::AddCategory => add_category(store),
        MenuChoice::DeleteExpense => delete_expense(store),
        MenuChoice::DeleteCategory => delete_category(store),
        MenuChoice::ListExpenses => list_expenses(store),
        MenuChoice::ListCategories => list_categories(store),
        MenuChoice::Summarize => summarize(store),
        // Handled by the loop before dispatch
        MenuChoice::Exit => Ok(()),
    }
}

fn add_expense(store: &SqliteStore) -> Result<()> {
    let amount = prompt::amount("Amount spent ($)")?;
    let date = prompt::text("Date (YYYY-MM-DD)")?;

    show_categories(store)?;
    let category_id = prompt::id("Category ID")?;
    let description = prompt::text("Description")?;

    store.add_expense(&NewExpense {
        amount,
        date,
        category_id: Some(category_id),
        description: optional(description),
    })?;
    ui::success("Expense recorded");
    Ok(())
}

fn add_category(store: &SqliteStore) -> Result<()> {
    let name = prompt::text("Category name (an icon is welcome)")?;
    store.add_category(&name)?;
    ui::success("Category added");
    Ok(())
}

fn delete_expense(store: &SqliteStore) -> Result<()> {
    let id = prompt::id("ID of the expense to delete")?;
    store.delete_expense(id)?;
    ui::success(&format!("Deleted expense with ID {id}"));
    Ok(())
}

fn delete_category(store: &mut SqliteStore) -> Result<()> {
    let id = prompt::id("ID of the category to delete")?;
    store.delete_category(id)?;
    ui::success(&format!(
        "Deleted category with ID {id} and its associated expenses"
    ));
    Ok(())
}

fn list_expenses(store: &SqliteStore) -> Result<()> {
    let rows = store.list_expenses()?;
    if rows.is_empty() {
        println!("{}", ui::dim("No expenses recorded yet."));
    } else {
        println!("{} All expenses", ui::Icons::LIST);
        println!("{}", ui::expenses_table(&rows));
    }
    Ok(())
}

fn list_categories(store: &SqliteStore) -> Result<()> {
    show_categories(store)
}

fn summarize(store: &SqliteStore) -> Result<()> {
    let totals = store.summarize_by_category()?;
    if totals.is_empty() {
        println!("{}", ui::dim("No expenses recorded yet."));
    } else {
        println!("{} Spending by category", ui::Icons::STATS);
        println!("{}", ui::summary_table(&totals));
    }
    Ok(())
}

fn show_categories(store: &SqliteStore) -> Result<()> {
    let categories = store.list_categories()?;
    if categories.is_empty() {
        println!("{}", ui::dim("No categories defined yet."));
    } else {
        println!("{} Available categories", ui::Icons::TAG);
        println!("{}", ui::categories_table(&categories));
    }
    Ok(())
}

fn optional(input: String) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
