use chrono::NaiveDate;
use rust_decimal::Decimal;
use crate::common::LedgerResult;
use crate::transaction::{Category, Transaction};
use crate::util::add_amount;

/// Income and expense totals over a set of transactions
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) income: Decimal,
    pub(crate) expense: Decimal,
}

impl Summary {
    /// Fails with `AmountOverflow` when a total no longer fits in a `Decimal`
    pub(crate) fn of(transactions: &[Transaction]) -> LedgerResult<Summary> {
        let mut summary = Summary::default();
        for t in transactions {
            match t.category {
                Category::Income => summary.income = add_amount(summary.income, t.amount)?,
                Category::Expense => summary.expense = add_amount(summary.expense, t.amount)?,
            }
        }
        Ok(summary)
    }

    /// Net balance, i.e. income minus expense. Totals are never negative, so this cannot overflow.
    pub(crate) fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

/// Result of a date range query. `start` and `end` are both inclusive.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RangeQuery {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) summary: Summary,
}

impl RangeQuery {
    pub(crate) fn new(start: NaiveDate, end: NaiveDate, transactions: Vec<Transaction>) -> LedgerResult<RangeQuery> {
        let summary = Summary::of(&transactions)?;
        Ok(RangeQuery {
            start,
            end,
            transactions,
            summary,
        })
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
