mod resample;

use std::io;
use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::{Frame, Terminal};
use log::warn;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::common::LedgerResult;
use crate::util::format_date;

pub(crate) use resample::{resample_daily, DailySeries};

const CHART_TITLE: &str = "Income and Expense Over Time";

/// Points and axis labels of a daily series, ready to hand to the chart widget.
/// x is the day offset from the first day.
pub(crate) struct ChartData {
    income: Vec<(f64, f64)>,
    expense: Vec<(f64, f64)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    x_labels: Vec<String>,
    y_labels: Vec<String>,
}

impl ChartData {
    pub(crate) fn new(series: &DailySeries, date_format: &str) -> ChartData {
        let points = |amounts: &[Decimal]| -> Vec<(f64, f64)> {
            amounts
                .iter()
                .enumerate()
                .map(|(i, amount)| (i as f64, amount.to_f64().unwrap_or_default()))
                .collect()
        };

        let last_index = series.len().saturating_sub(1);
        let x_labels = match series.len() {
            0 => vec![],
            1 | 2 => vec![series.days[0], series.days[last_index]],
            _ => vec![series.days[0], series.days[last_index / 2], series.days[last_index]],
        }
        .into_iter()
        .map(|day| format_date(day, date_format))
        .collect();

        let max = series.max_amount().to_f64().unwrap_or_default();
        let y_max = if max > 0.0 { max * 1.1 } else { 1.0 };

        ChartData {
            income: points(&series.income),
            expense: points(&series.expense),
            x_bounds: [0.0, (last_index as f64).max(1.0)],
            y_bounds: [0.0, y_max],
            x_labels,
            y_labels: vec![format!("{:.2}", 0.0), format!("{:.2}", y_max / 2.0), format!("{:.2}", y_max)],
        }
    }
}

/// Draw the income and expense lines into `area`
pub(crate) fn render_chart(frame: &mut Frame, area: Rect, data: &ChartData) {
    let datasets = vec![
        Dataset::default()
            .name("Income")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&data.income),
        Dataset::default()
            .name("Expense")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&data.expense),
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let chart = Chart::new(datasets)
        .block(Block::default().title(CHART_TITLE).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds(data.x_bounds)
                .labels(data.x_labels.iter().map(|l| Span::styled(l.as_str(), bold)).collect()),
        )
        .y_axis(
            Axis::default()
                .title("Amount")
                .style(Style::default().fg(Color::Gray))
                .bounds(data.y_bounds)
                .labels(data.y_labels.iter().map(|l| Span::styled(l.as_str(), bold)).collect()),
        );

    frame.render_widget(chart, area);
}

/// Show the chart full screen until 'q' or Esc is pressed
pub(crate) fn show_chart(series: &DailySeries, date_format: &str) -> LedgerResult<()> {
    if series.is_empty() {
        println!("No transactions to plot.");
        return Ok(());
    }
    let data = ChartData::new(series, date_format);

    enable_raw_mode()?;
    // Restores the terminal on every path out of here, including failed setup
    let _restore = OnDrop(restore_terminal);
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    run_chart(&mut terminal, &data)?;
    Ok(())
}

/// Runs the wrapped closure when dropped
struct OnDrop<F: FnMut()>(F);

impl<F: FnMut()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        (self.0)()
    }
}

/// Leave raw mode and the alternate screen. Each step runs even if the other fails.
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!("Unable to disable raw mode: {}", err);
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!("Unable to leave alternate screen: {}", err);
    }
}

fn run_chart<B: Backend>(terminal: &mut Terminal<B>, data: &ChartData) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_chart(f, f.size(), data))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let KeyCode::Char('q') | KeyCode::Esc = key.code {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use rust_decimal_macros::dec;
    use crate::transaction::{Category, Transaction};
    use super::*;

    fn sample_series() -> DailySeries {
        let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
        resample_daily(&[
            Transaction::new(day(1), Category::Income, "Salary", dec!(1000.00)),
            Transaction::new(day(2), Category::Expense, "Groceries", dec!(50.00)),
            Transaction::new(day(5), Category::Expense, "Fuel", dec!(40)),
        ]).unwrap()
    }

    #[test]
    fn test_chart_data() {
        let data = ChartData::new(&sample_series(), "%d-%m-%Y");
        assert_eq!(data.income.len(), 5);
        assert_eq!(data.expense.len(), 5);
        assert_eq!(data.income[0], (0.0, 1000.0));
        assert_eq!(data.expense[1], (1.0, 50.0));
        assert_eq!(data.expense[2], (2.0, 0.0));
        assert_eq!(data.x_bounds, [0.0, 4.0]);
        assert_eq!(data.x_labels, vec!["01-06-2024", "03-06-2024", "05-06-2024"]);
        assert!(data.y_bounds[1] > 1000.0);
    }

    #[test]
    fn test_chart_data_single_day() {
        let series = resample_daily(&[Transaction::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            Category::Income,
            "",
            dec!(5),
        )]).unwrap();
        let data = ChartData::new(&series, "%d-%m-%Y");
        assert_eq!(data.x_bounds, [0.0, 1.0]);
        assert_eq!(data.x_labels, vec!["01-06-2024", "01-06-2024"]);
    }

    #[test]
    fn test_render_chart() {
        let data = ChartData::new(&sample_series(), "%d-%m-%Y");
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render_chart(f, f.size(), &data)).unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains(CHART_TITLE));
    }

    #[test]
    fn test_on_drop_runs_on_early_return() {
        let restored = Cell::new(false);
        let setup = || -> io::Result<()> {
            let _restore = OnDrop(|| restored.set(true));
            Err(io::Error::new(io::ErrorKind::Other, "no terminal"))
        };
        assert!(setup().is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_on_drop_runs_once() {
        let count = Cell::new(0);
        {
            let _restore = OnDrop(|| count.set(count.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_show_empty_chart_leaves_terminal_alone() {
        show_chart(&DailySeries::default(), "%d-%m-%Y").unwrap();
    }
}
