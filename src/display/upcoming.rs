//! Upcoming and fixed expense display formatting

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::labels;
use crate::models::{FixedExpense, UpcomingExpense};
use crate::reports::Urgency;
use crate::services::{FixedSummary, UpcomingSummary};

/// Format a single upcoming expense with its urgency
pub fn format_upcoming_row(
    expense: &UpcomingExpense,
    today: NaiveDate,
    settings: &Settings,
) -> String {
    let urgency = Urgency::classify(expense.due_date, today, expense.paid);
    let marker = if urgency.is_pressing() { "!" } else { " " };
    let generated = if expense.is_generated() { " *" } else { "" };

    format!(
        "{} {}  {:<24} {:>14}  {:<16} {}{}",
        marker,
        labels::format_date(expense.due_date, settings),
        truncate(&expense.title, 24),
        labels::format_amount(expense.amount, settings),
        format!("{}", urgency),
        expense.id,
        generated
    )
}

/// Format a list of upcoming expenses
pub fn format_upcoming_list(
    expenses: &[UpcomingExpense],
    today: NaiveDate,
    settings: &Settings,
) -> String {
    if expenses.is_empty() {
        return "No upcoming expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<10}  {:<24} {:>14}  {:<16} {}\n",
        "Due", "Title", "Amount", "Status", "ID"
    ));
    output.push_str(&"-".repeat(84));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_upcoming_row(expense, today, settings));
        output.push('\n');
    }

    output.push_str("\n  * generated from a fixed expense\n");
    output
}

/// Format the upcoming summary card
pub fn format_upcoming_summary(summary: &UpcomingSummary, settings: &Settings) -> String {
    format!(
        "Total: {}   Pending: {}   Paid: {}\n",
        labels::format_amount(summary.total, settings),
        labels::format_amount(summary.pending, settings),
        labels::format_amount(summary.paid, settings)
    )
}

/// Format a list of fixed expenses
pub fn format_fixed_list(expenses: &[FixedExpense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No fixed expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<24} {:>14}  {:>7}  {:<10}  {}\n",
        "Title", "Amount", "Due day", "Status", "ID"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format!(
            "{:<24} {:>14}  {:>7}  {:<10}  {}\n",
            truncate(&expense.title, 24),
            labels::format_amount(expense.amount, settings),
            expense.due_day,
            if expense.active { "active" } else { "inactive" },
            expense.id
        ));
    }

    output
}

/// Format the fixed summary card
pub fn format_fixed_summary(summary: &FixedSummary, settings: &Settings) -> String {
    format!(
        "Total: {}   Active: {}   Inactive: {}\n",
        labels::format_amount(summary.total, settings),
        labels::format_amount(summary.active, settings),
        labels::format_amount(summary.inactive, settings)
    )
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
