//! Dashboard CLI command
//!
//! Composes the monthly overview, health meter, comparison, reminder feed,
//! recent activity, and fixed-expense load into one screen.

use chrono::Datelike;

use crate::config::Settings;
use crate::display::dashboard::{
    format_comparison, format_fixed_load, format_health, format_overview, format_recent,
    format_reminders,
};
use crate::error::TakaResult;
use crate::reports::{
    fixed_expenses_total, month_over_month, monthly_totals, reminder_feed, DEFAULT_HORIZON_DAYS,
};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Render the dashboard
pub fn handle_dashboard_command(storage: &Storage, settings: &Settings) -> TakaResult<()> {
    let today = chrono::Local::now().date_naive();
    let (year, month) = (today.year(), today.month());

    let transactions = storage.transactions.get_all()?;
    let upcoming = storage.upcoming.get_all()?;
    let fixed = storage.fixed.get_all()?;

    let totals = monthly_totals(&transactions, year, month);
    print!("{}", format_overview(&totals, year, month, settings));
    print!("{}", format_health(totals.income, totals.expense));
    print!(
        "{}",
        format_comparison(&month_over_month(&transactions, today), settings)
    );
    print!(
        "{}",
        format_fixed_load(fixed_expenses_total(&fixed, true), settings)
    );
    println!();

    let feed = reminder_feed(&upcoming, today, DEFAULT_HORIZON_DAYS);
    print!("{}", format_reminders(&feed, today, settings));
    println!();

    let recent = TransactionService::new(storage).recent(5)?;
    print!("{}", format_recent(&recent, settings));

    Ok(())
}
