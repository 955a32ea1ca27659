use std::fmt;
use std::str::FromStr;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use crate::common::LedgerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Category {
    Income,
    Expense,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Category::Income => write!(f, "Income"),
            Category::Expense => write!(f, "Expense"),
        }
    }
}

/// Accepts `income`/`expense` or their first letter, in any case.
impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "i" | "income" => Ok(Category::Income),
            "e" | "expense" => Ok(Category::Expense),
            _ => Err(LedgerError::InvalidCategory(s.to_string())),
        }
    }
}

/// One ledger row
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    pub(crate) date: NaiveDate,
    pub(crate) category: Category,
    pub(crate) description: String,
    pub(crate) amount: Decimal,
}

impl Transaction {
    pub(crate) fn new(date: NaiveDate, category: Category, description: &str, amount: Decimal) -> Transaction {
        // A row must stay on one line
        let description = description.replace('\n', " ");
        Transaction {
            date,
            category,
            description,
            amount,
        }
    }
}
