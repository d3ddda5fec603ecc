//! Report CLI commands

use chrono::Datelike;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::report::{
    format_category_breakdown, format_month_series, format_year_series,
};
use crate::error::TakaResult;
use crate::models::TransactionKind;
use crate::reports::{category_breakdown, month_series, year_series};
use crate::storage::Storage;

use super::parse_month;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Per-month income and expense for a year
    Monthly {
        /// Year to report on, defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Per-year income and expense across all data
    Yearly,
    /// Expense breakdown by category for a month
    Category {
        /// Month to report on (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> TakaResult<()> {
    let transactions = storage.transactions.get_all()?;
    let today = chrono::Local::now().date_naive();

    match cmd {
        ReportCommands::Monthly { year } => {
            let year = year.unwrap_or_else(|| today.year());
            let series = month_series(&transactions, year);
            print!("{}", format_month_series(&series, year, settings));
        }
        ReportCommands::Yearly => {
            let series = year_series(&transactions);
            print!("{}", format_year_series(&series, settings));
        }
        ReportCommands::Category { month } => {
            let (year, month) = match month {
                Some(s) => parse_month(&s)?,
                None => (today.year(), today.month()),
            };
            let breakdown =
                category_breakdown(&transactions, year, month, TransactionKind::Expense);
            print!(
                "{}",
                format_category_breakdown(&breakdown, year, month, settings)
            );
        }
    }

    Ok(())
}
