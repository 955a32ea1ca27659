use std::fs::File;
use std::path::PathBuf;
use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal_macros::dec;
use crate::common::LedgerError;
use crate::config::LedgerConfig;
use crate::csv_reader::{parse_header_index, read_transactions};
use crate::transaction::Category;

#[test]
fn test_read_transactions() {
    let config = LedgerConfig::default();
    let rows = read_transactions(File::open(fixture_filename("ledger.csv")).unwrap(), &config).unwrap();
    assert_eq!(rows.len(), 4);

    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(rows[0].category, Category::Income);
    assert_eq!(rows[0].description, "Salary");
    assert_eq!(rows[0].amount, dec!(1000.00));

    // Empty description survives
    assert_eq!(rows[2].description, "");
    assert_eq!(rows[2].amount, dec!(12.5));
}

#[test]
fn test_read_reordered_columns() {
    let config = LedgerConfig::default();
    let rows = read_transactions(File::open(fixture_filename("reordered.csv")).unwrap(), &config).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
    assert_eq!(rows[0].category, Category::Expense);
    assert_eq!(rows[0].description, "Coffee");
    assert_eq!(rows[0].amount, dec!(7.25));
}

#[test]
fn test_malformed_row_reports_line() {
    let config = LedgerConfig::default();
    let result = read_transactions(File::open(fixture_filename("bad_date.csv")).unwrap(), &config);
    match result {
        Err(LedgerError::MalformedRow { line, source }) => {
            assert_eq!(line, 3);
            assert!(matches!(*source, LedgerError::InvalidDate { .. }));
        },
        other => panic!("Unexpected results {:?}", other)
    }
}

#[test]
fn test_missing_column() {
    let config = LedgerConfig::default();
    let headers = StringRecord::from(vec!["Date", "Category", "Amount"]);
    match parse_header_index(&headers, &config) {
        Err(LedgerError::MissingColumn(name)) => assert_eq!(name, "Description"),
        other => panic!("Unexpected results {:?}", other)
    }
}

#[test]
fn test_header_only() {
    let config = LedgerConfig::default();
    let rows = read_transactions(&b"Date,Category,Description,Amount\n"[..], &config).unwrap();
    assert!(rows.is_empty());
}

/// Return the path to a file within the test data directory
pub(crate) fn fixture_filename(filename: &str) -> PathBuf {
    let mut dir = fixture_dir();
    dir.push(filename);
    dir
}

pub(crate) fn fixture_dir() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.push("fixture");
    dir
}
