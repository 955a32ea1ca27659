use log::{debug, error};

use crate::chart::{resample_daily, show_chart};
use crate::common::{LedgerError, LedgerResult};
use crate::db::{Database, RangeQuery};
use crate::input::{collect_transaction, get_date, LineReader};
use crate::report::print_report;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum MenuChoice {
    Add,
    View,
    Exit,
}

impl MenuChoice {
    pub(crate) fn parse(s: &str) -> Option<MenuChoice> {
        match s.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::View),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

fn print_menu() {
    println!("\nFinancial Tracker");
    println!("1. Add a new transaction");
    println!("2. View Transactions");
    println!("3. Exit");
}

/// Menu loop. Returns when the user exits or input ends.
pub(crate) fn run<R: LineReader>(db: &Database, reader: &mut R) -> anyhow::Result<()> {
    loop {
        print_menu();
        let choice = match reader.read_line("Choose an option: ") {
            Ok(line) => line,
            Err(LedgerError::Aborted) => break,
            Err(e) => return Err(e.into()),
        };

        let result = match MenuChoice::parse(&choice) {
            Some(MenuChoice::Add) => add_entry(db, reader),
            Some(MenuChoice::View) => view_transactions(db, reader).map(|_| ()),
            Some(MenuChoice::Exit) => break,
            None => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };

        match result {
            Ok(()) => {},
            Err(LedgerError::Aborted) => break,
            Err(e) => {
                error!("{}", e);
                println!("Error: {}", e);
            }
        }
    }

    println!("Exiting the application.");
    Ok(())
}

/// Collect a transaction interactively and append it to the ledger
pub(crate) fn add_entry<R: LineReader>(db: &Database, reader: &mut R) -> LedgerResult<()> {
    db.initialize()?;
    let t = collect_transaction(reader, db.config())?;
    db.append(&t)?;
    println!("Entry added successfully");
    Ok(())
}

/// Ask for a date range, print the matching transactions and optionally plot them
pub(crate) fn view_transactions<R: LineReader>(db: &Database, reader: &mut R) -> LedgerResult<RangeQuery> {
    let config = db.config();
    let hint = config.date_format_hint();
    let start = get_date(reader, &format!("Enter start date ({hint}): "), false, config)?;
    let end = get_date(reader, &format!("Enter end date ({hint}): "), false, config)?;

    db.initialize()?;
    let query = db.query(start, end)?;
    print_report(&query, config);

    if !query.is_empty() {
        let answer = reader.read_line("Do you want to plot the transactions? (yes/no): ")?;
        if answer.trim().to_lowercase() == "yes" {
            debug!("Plotting {} transactions", query.transactions.len());
            show_chart(&resample_daily(&query.transactions)?, &config.date_format)?;
        }
    }

    Ok(query)
}
