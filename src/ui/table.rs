use tabled::{Table, Tabled, settings::Style};

use crate::model::{Category, CategoryTotal, ExpenseRow};

/// Placeholder shown for a missing category or description.
const NONE_CELL: &str = "—";

#[derive(Tabled)]
struct ExpenseCells {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct CategoryCells {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Category")]
    name: String,
}

#[derive(Tabled)]
struct SummaryCells {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
}

pub fn expenses_table(rows: &[ExpenseRow]) -> String {
    let cells: Vec<ExpenseCells> = rows
        .iter()
        .map(|row| ExpenseCells {
            id: row.id,
            amount: format_amount(row.amount),
            date: row.date.clone(),
            category: cell_or_none(row.category.as_deref()),
            description: cell_or_none(row.description.as_deref()),
        })
        .collect();
    render(&cells)
}

pub fn categories_table(rows: &[Category]) -> String {
    let cells: Vec<CategoryCells> = rows
        .iter()
        .map(|category| CategoryCells {
            id: category.id,
            name: category.name.clone(),
        })
        .collect();
    render(&cells)
}

pub fn summary_table(rows: &[CategoryTotal]) -> String {
    let cells: Vec<SummaryCells> = rows
        .iter()
        .map(|group| SummaryCells {
            category: cell_or_none(group.category.as_deref()),
            total: format_amount(group.total),
        })
        .collect();
    render(&cells)
}

fn render<T: Tabled>(cells: &[T]) -> String {
    Table::new(cells).with(Style::rounded()).to_string()
}

fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

fn cell_or_none(value: Option<&str>) -> String {
    match value {
        Some(text) => text.to_string(),
        None => NONE_CELL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_formatting() {
        assert_eq!(format_amount(12.5), "$12.50");
        assert_eq!(format_amount(0.0), "$0.00");
    }

    #[test]
    fn test_none_cells_use_placeholder() {
        let rows = [ExpenseRow {
            id: 1,
            amount: 3.0,
            date: "2024-01-01".to_string(),
            category: None,
            description: None,
        }];
        let rendered = expenses_table(&rows);
        assert!(rendered.contains(NONE_CELL));
        assert!(rendered.contains("$3.00"));
    }
}
