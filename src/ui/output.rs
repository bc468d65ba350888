use crate::ui::{Icons, theme};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    println!("{}", text.style(theme().header.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn menu_item(number: u32, label: &str) {
    println!("  {}. {}", number.style(theme().accent.clone()), label);
}

pub fn rule() {
    println!("{}", "─".repeat(33).style(theme().dim.clone()));
}

pub fn dim(text: &str) -> String {
    text.style(theme().dim.clone()).to_string()
}
