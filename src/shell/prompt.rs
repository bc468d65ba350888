//! Interactive prompts with explicit numeric parsing
//!
//! Numeric prompts read raw text and parse it once: a bad value aborts
//! the current action with `Error::InputParse` instead of re-prompting,
//! so the shell falls back to the menu with no partial writes.

use std::str::FromStr;

use dialoguer::{Confirm, Input};

use crate::{Error, Result};

/// Prompt for a free-text line. Empty input is allowed.
pub fn text(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Prompt for a monetary amount.
pub fn amount(prompt: &str) -> Result<f64> {
    let raw = text(prompt)?;
    parse_number(&raw, "amount")
}

/// Prompt for a record id.
pub fn id(prompt: &str) -> Result<i64> {
    let raw = text(prompt)?;
    parse_number(&raw, "ID")
}

/// Yes/no confirmation; Enter defaults to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(confirmed)
}

fn parse_number<T: FromStr>(raw: &str, what: &str) -> Result<T> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| Error::InputParse(format!("expected a numeric {what}, got `{trimmed}`")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_floats_and_ints() {
        assert_eq!(parse_number::<f64>("12.50", "amount").unwrap(), 12.50);
        assert_eq!(parse_number::<i64>(" 7 ", "ID").unwrap(), 7);
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        let err = parse_number::<f64>("abc", "amount").unwrap_err();
        assert!(matches!(err, Error::InputParse(_)));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_parse_number_rejects_empty() {
        assert!(parse_number::<i64>("", "ID").is_err());
    }
}
