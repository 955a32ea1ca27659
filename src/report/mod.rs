use comfy_table::{Cell, CellAlignment, Table, TableComponent};
use crate::config::LedgerConfig;
use crate::db::{RangeQuery, Summary};
use crate::transaction::Transaction;
use crate::util::{format_amount, format_date};

const NO_TRANSACTIONS: &str = "No transactions found in the specified date range.";

/// Print the transactions of a range query followed by its summary
pub(crate) fn print_report(query: &RangeQuery, config: &LedgerConfig) {
    println!("{}", render_report(query, config));
}

pub(crate) fn render_report(query: &RangeQuery, config: &LedgerConfig) -> String {
    if query.is_empty() {
        return NO_TRANSACTIONS.to_string();
    }

    let mut lines = vec![
        format!(
            "Transactions from {} to {}",
            format_date(query.start, &config.date_format),
            format_date(query.end, &config.date_format)
        ),
        transactions_table(&query.transactions, config).to_string(),
        String::new(),
    ];
    lines.extend(summary_lines(&query.summary));
    lines.join("\n")
}

fn transactions_table(transactions: &[Transaction], config: &LedgerConfig) -> Table {
    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);
    table.set_header(config.columns.header().to_vec());

    for t in transactions {
        table.add_row(vec![
            Cell::new(format_date(t.date, &config.date_format)),
            Cell::new(t.category),
            Cell::new(t.description.as_str()),
            Cell::new(format_amount(t.amount)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub(crate) fn summary_lines(summary: &Summary) -> Vec<String> {
    vec![
        "Summary:".to_string(),
        format!("Total Income: ${}", format_amount(summary.income)),
        format!("Total Expense: ${}", format_amount(summary.expense)),
        format!("Net Balance: ${}", format_amount(summary.net())),
    ]
}
