use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::common::{LedgerError, LedgerResult};
use crate::config::LedgerConfig;
use crate::transaction::{Category, Transaction};
use crate::util::{parse_amount, parse_date, today};

#[cfg(test)]
pub(crate) mod scripted;

/// Source of user input lines. Implemented by the interactive editor, and by a scripted
/// reader in tests. End of input is `LedgerError::Aborted`.
pub(crate) trait LineReader {
    fn read_line(&mut self, prompt: &str) -> LedgerResult<String>;
}

/// Ask for a date until one parses. With `allow_default`, an empty answer means today.
pub(crate) fn get_date<R: LineReader>(reader: &mut R, prompt: &str, allow_default: bool, config: &LedgerConfig) -> LedgerResult<NaiveDate> {
    loop {
        let line = reader.read_line(prompt)?;
        if allow_default && line.trim().is_empty() {
            return Ok(today());
        }
        match parse_date(&line, &config.date_format) {
            Ok(date) => return Ok(date),
            Err(_) => println!("Invalid date format. Please enter the date in {} format", config.date_format_hint()),
        }
    }
}

pub(crate) fn get_category<R: LineReader>(reader: &mut R) -> LedgerResult<Category> {
    loop {
        let line = reader.read_line("Enter the category ('I' for Income or 'E' for Expense): ")?;
        match line.parse::<Category>() {
            Ok(category) => return Ok(category),
            Err(_) => println!("Invalid category. Please enter 'I' for Income or 'E' for Expense."),
        }
    }
}

/// The description is kept exactly as typed
pub(crate) fn get_description<R: LineReader>(reader: &mut R) -> LedgerResult<String> {
    reader.read_line("Enter a description (optional): ")
}

pub(crate) fn get_amount<R: LineReader>(reader: &mut R) -> LedgerResult<Decimal> {
    loop {
        let line = reader.read_line("Enter the amount: ")?;
        match parse_amount(&line) {
            Ok(amount) => return Ok(amount),
            Err(LedgerError::NonPositiveAmount(_)) => println!("Amount must be a non-negative non-zero value."),
            Err(e) => println!("{e}. Amount must be a non-negative non-zero value."),
        }
    }
}

/// Collect all fields of a new transaction
pub(crate) fn collect_transaction<R: LineReader>(reader: &mut R, config: &LedgerConfig) -> LedgerResult<Transaction> {
    let prompt = format!("Enter date ({}) or press Enter for today: ", config.date_format_hint());
    let date = get_date(reader, &prompt, true, config)?;
    let category = get_category(reader)?;
    let description = get_description(reader)?;
    let amount = get_amount(reader)?;
    Ok(Transaction::new(date, category, &description, amount))
}
