use std::collections::BTreeMap;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use crate::common::LedgerResult;
use crate::transaction::{Category, Transaction};
use crate::util::add_amount;

/// One point per calendar day for each category, covering every day from the
/// earliest to the latest transaction.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct DailySeries {
    pub(crate) days: Vec<NaiveDate>,
    pub(crate) income: Vec<Decimal>,
    pub(crate) expense: Vec<Decimal>,
}

impl DailySeries {
    pub(crate) fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.days.len()
    }

    /// Largest single-day amount in either series
    pub(crate) fn max_amount(&self) -> Decimal {
        self.income
            .iter()
            .chain(self.expense.iter())
            .copied()
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}

/// Sum same-day amounts per category and fill the days without transactions with zero.
pub(crate) fn resample_daily(transactions: &[Transaction]) -> LedgerResult<DailySeries> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => (first.date, last.date),
        _ => return Ok(DailySeries::default()),
    };

    let mut buckets: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
    for day in first.iter_days().take_while(|day| *day <= last) {
        buckets.insert(day, (Decimal::ZERO, Decimal::ZERO));
    }
    for t in sorted {
        let bucket = buckets.entry(t.date).or_insert((Decimal::ZERO, Decimal::ZERO));
        match t.category {
            Category::Income => bucket.0 = add_amount(bucket.0, t.amount)?,
            Category::Expense => bucket.1 = add_amount(bucket.1, t.amount)?,
        }
    }

    let mut series = DailySeries::default();
    for (day, (income, expense)) in buckets {
        series.days.push(day);
        series.income.push(income);
        series.expense.push(expense);
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use crate::common::LedgerError;
    use super::*;

    fn t(day: u32, category: Category, amount: Decimal) -> Transaction {
        Transaction::new(NaiveDate::from_ymd_opt(2024, 6, day).unwrap(), category, "", amount)
    }

    #[test]
    fn test_resample_fills_gaps() {
        let transactions = vec![
            t(4, Category::Expense, dec!(5)),
            t(1, Category::Income, dec!(1000)),
            t(2, Category::Expense, dec!(50)),
            t(2, Category::Expense, dec!(12.5)),
            t(2, Category::Income, dec!(20)),
        ];
        let series = resample_daily(&transactions).unwrap();

        assert_eq!(series.len(), 4);
        assert_eq!(series.days[0], NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(series.days[3], NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
        assert_eq!(series.income, vec![dec!(1000), dec!(20), dec!(0), dec!(0)]);
        assert_eq!(series.expense, vec![dec!(0), dec!(62.5), dec!(0), dec!(5)]);
        assert_eq!(series.max_amount(), dec!(1000));
    }

    #[test]
    fn test_resample_single_day() {
        let series = resample_daily(&[t(9, Category::Expense, dec!(3))]).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.income, vec![dec!(0)]);
        assert_eq!(series.expense, vec![dec!(3)]);
    }

    #[test]
    fn test_resample_across_month_boundary() {
        let transactions = vec![
            Transaction::new(NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(), Category::Income, "", dec!(1)),
            Transaction::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), Category::Income, "", dec!(2)),
        ];
        let series = resample_daily(&transactions).unwrap();
        // 2024 is a leap year
        assert_eq!(series.len(), 3);
        assert_eq!(series.income, vec![dec!(1), dec!(0), dec!(2)]);
    }

    #[test]
    fn test_resample_empty() {
        let series = resample_daily(&[]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.max_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_resample_sums_sub_cent_amounts() {
        let series = resample_daily(&[
            t(3, Category::Income, dec!(0.105)),
            t(3, Category::Income, dec!(0.1)),
        ]).unwrap();
        assert_eq!(series.income, vec![dec!(0.205)]);
    }

    #[test]
    fn test_resample_overflow_is_an_error() {
        let transactions = vec![
            t(1, Category::Expense, Decimal::MAX),
            t(1, Category::Expense, Decimal::MAX),
        ];
        assert!(matches!(resample_daily(&transactions), Err(LedgerError::AmountOverflow)));

        // Different days land in different buckets
        let apart = vec![
            t(1, Category::Expense, Decimal::MAX),
            t(2, Category::Expense, Decimal::MAX),
        ];
        assert_eq!(resample_daily(&apart).unwrap().max_amount(), Decimal::MAX);
    }
}
