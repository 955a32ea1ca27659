use std::str::FromStr;
use chrono::{Local, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use crate::common::{LedgerError, LedgerResult};

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn parse_date(s: &str, format: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), format).map_err(|_| LedgerError::InvalidDate {
        value: s.to_string(),
        format: format.to_string(),
    })
}

pub(crate) fn format_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

/// Parse a strictly positive amount
pub(crate) fn parse_amount(s: &str) -> LedgerResult<Decimal> {
    let trimmed = s.trim();
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| LedgerError::InvalidAmount(s.to_string()))?;
    check_amount(amount)
}

pub(crate) fn check_amount(amount: Decimal) -> LedgerResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(amount));
    }
    Ok(amount)
}

/// Running total that errors instead of overflowing
pub(crate) fn add_amount(total: Decimal, amount: Decimal) -> LedgerResult<Decimal> {
    total.checked_add(amount).ok_or(LedgerError::AmountOverflow)
}

/// Format $ amount, rounded half away from zero to cents
pub(crate) fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
