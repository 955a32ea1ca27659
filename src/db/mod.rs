mod summary;

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use chrono::NaiveDate;
use csv::WriterBuilder;
use log::{debug, info};

use crate::common::LedgerResult;
use crate::config::LedgerConfig;
use crate::csv_reader;
use crate::transaction::Transaction;
use crate::util::{check_amount, format_date};

pub(crate) use summary::{RangeQuery, Summary};

/// Flat-file record store. Every operation opens the ledger file, reads or appends, and closes it.
pub(crate) struct Database {
    config: LedgerConfig,
}

impl Database {
    pub(crate) fn new(config: LedgerConfig) -> Database {
        Database { config }
    }

    pub(crate) fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub(crate) fn file_path(&self) -> &Path {
        &self.config.file_path
    }

    /// Create the ledger file with its header row unless it already has content.
    pub(crate) fn initialize(&self) -> LedgerResult<()> {
        let path = self.file_path();
        let is_empty = match fs::metadata(path) {
            Ok(metadata) => metadata.len() == 0,
            Err(_) => true,
        };
        if !is_empty {
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_path(path)?;
        csv_writer.write_record(self.config.columns.header())?;
        csv_writer.flush()?;
        info!("Created ledger file {}", path.display());
        Ok(())
    }

    /// Append one row. The amount must be positive; nothing is written otherwise.
    pub(crate) fn append(&self, t: &Transaction) -> LedgerResult<()> {
        check_amount(t.amount)?;

        let file = OpenOptions::new().append(true).open(self.file_path())?;
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(file);
        csv_writer.write_record([
            format_date(t.date, &self.config.date_format),
            t.category.to_string(),
            t.description.clone(),
            t.amount.to_string(),
        ])?;
        csv_writer.flush()?;
        debug!("Appended {:?} to {}", t, self.file_path().display());
        Ok(())
    }

    /// All rows in file order
    pub(crate) fn read_all(&self) -> LedgerResult<Vec<Transaction>> {
        let file = File::open(self.file_path())?;
        csv_reader::read_transactions(file, &self.config)
    }

    /// Transactions dated within `start..=end`, in file order, with their totals.
    /// Totals too large for a `Decimal` are an `AmountOverflow` error.
    pub(crate) fn query(&self, start: NaiveDate, end: NaiveDate) -> LedgerResult<RangeQuery> {
        let transactions: Vec<Transaction> = if start > end {
            vec![]
        } else {
            self.read_all()?
                .into_iter()
                .filter(|t| t.date >= start && t.date <= end)
                .collect()
        };
        debug!("{} transactions between {} and {}", transactions.len(), start, end);
        RangeQuery::new(start, end, transactions)
    }
}
