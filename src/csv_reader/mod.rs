use std::io;
use csv::StringRecord;
use log::debug;
use crate::common::{LedgerError, LedgerResult};
use crate::config::LedgerConfig;
use crate::transaction::{Category, Transaction};
use crate::util::{parse_amount, parse_date};

#[cfg(test)]
mod tests;

/// Position of each ledger column within the header row
#[derive(Debug, PartialEq)]
pub(crate) struct CsvHeaderIndex {
    date: usize,
    category: usize,
    description: usize,
    amount: usize,
}

/// Read every ledger row, in file order.
pub(crate) fn read_transactions<R: io::Read>(reader: R, config: &LedgerConfig) -> LedgerResult<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let header_index = parse_header_index(&headers, config)?;

    let mut transactions: Vec<Transaction> = vec![];
    for record in rdr.records() {
        let row = record?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let transaction = parse_row(&row, &header_index, config)
            .map_err(|e| LedgerError::MalformedRow { line, source: Box::new(e) })?;
        transactions.push(transaction);
    }

    debug!("Read {} transactions", transactions.len());
    Ok(transactions)
}

fn parse_row(row: &StringRecord, header_index: &CsvHeaderIndex, config: &LedgerConfig) -> LedgerResult<Transaction> {
    let field = |i: usize| row.get(i).unwrap_or_default();

    let date = parse_date(field(header_index.date), &config.date_format)?;
    let category: Category = field(header_index.category).parse()?;
    let amount = parse_amount(field(header_index.amount))?;

    Ok(Transaction {
        date,
        category,
        description: field(header_index.description).to_string(),
        amount,
    })
}

/// Locate the configured columns in a header row; names match case-insensitively.
pub(crate) fn parse_header_index(headers: &StringRecord, config: &LedgerConfig) -> LedgerResult<CsvHeaderIndex> {
    let columns = &config.columns;
    Ok(CsvHeaderIndex {
        date: find_column(headers, &columns.date)?,
        category: find_column(headers, &columns.category)?,
        description: find_column(headers, &columns.description)?,
        amount: find_column(headers, &columns.amount)?,
    })
}

fn find_column(headers: &StringRecord, name: &str) -> LedgerResult<usize> {
    let wanted = name.trim().to_lowercase();
    headers
        .iter()
        .position(|s| s.trim().to_lowercase() == wanted)
        .ok_or_else(|| LedgerError::MissingColumn(name.to_string()))
}
