pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, error, header, menu_item, rule, success, warn};
pub use table::{categories_table, expenses_table, summary_table};
pub use theme::{Theme, theme};
