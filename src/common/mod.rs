use rust_decimal::Decimal;
use thiserror::Error;

/// Simplifies the return signature of ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("ledger file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("unable to parse config file: {0}")]
    Config(#[from] toml::de::Error),
    #[error("unable to locate '{0}' column")]
    MissingColumn(String),
    #[error("invalid date '{value}', expected format {format}")]
    InvalidDate { value: String, format: String },
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("amount total exceeds the largest representable value")]
    AmountOverflow,
    #[error("invalid category '{0}', expected Income or Expense")]
    InvalidCategory(String),
    #[error("line {line}: {source}")]
    MalformedRow {
        line: u64,
        #[source]
        source: Box<LedgerError>,
    },
    #[error("input aborted")]
    Aborted,
}
