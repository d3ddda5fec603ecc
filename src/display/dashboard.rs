//! Dashboard rendering
//!
//! Terminal rendition of the dashboard page: monthly overview, financial
//! health meter, month-over-month comparison, reminders, and recent
//! activity.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::labels;
use crate::models::{Money, Transaction, TransactionKind, UpcomingExpense};
use crate::reports::{financial_health_score, HealthLevel, MonthComparison, MonthlyTotals, Urgency};

/// Format the monthly income/expense/balance/savings overview
pub fn format_overview(
    totals: &MonthlyTotals,
    year: i32,
    month: u32,
    settings: &Settings,
) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} {}\n",
        labels::month_name(settings.language, month),
        year
    ));
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Income:   {}\n",
        labels::format_amount(totals.income, settings)
    ));
    output.push_str(&format!(
        "Expense:  {}\n",
        labels::format_amount(totals.expense, settings)
    ));
    output.push_str(&format!(
        "Balance:  {}\n",
        labels::format_amount(totals.balance, settings)
    ));
    output.push_str(&format!(
        "Savings:  {}\n",
        labels::format_amount(totals.saving, settings)
    ));
    output
}

/// Format the financial health meter
pub fn format_health(income: Money, expense: Money) -> String {
    let score = financial_health_score(income, expense);
    let level = HealthLevel::from_score(score);

    let filled = (score as usize) / 5;
    let meter: String = "#".repeat(filled) + &"-".repeat(20 - filled);

    format!("Health:   [{}] {}% ({})\n", meter, score, level)
}

/// Format the month-over-month comparison
pub fn format_comparison(cmp: &MonthComparison, settings: &Settings) -> String {
    let arrow = if cmp.percent_change >= 0.0 { "↑" } else { "↓" };
    format!(
        "Net this month: {}  (previous {}, {} {:.1}%)\n",
        labels::format_amount(cmp.current_net, settings),
        labels::format_amount(cmp.previous_net, settings),
        arrow,
        cmp.percent_change.abs()
    )
}

/// Format the reminder feed section
pub fn format_reminders(
    feed: &[&UpcomingExpense],
    today: NaiveDate,
    settings: &Settings,
) -> String {
    let mut output = String::new();
    output.push_str("Upcoming reminders\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');

    if feed.is_empty() {
        output.push_str("No upcoming expense reminders.\n");
        return output;
    }

    for expense in feed {
        let urgency = Urgency::classify(expense.due_date, today, expense.paid);
        output.push_str(&format!(
            "  {}  {:<20} {:>12}  {}\n",
            labels::format_date(expense.due_date, settings),
            expense.title,
            labels::format_amount(expense.amount, settings),
            urgency
        ));
    }

    output
}

/// Format the recent transactions section
pub fn format_recent(recent: &[Transaction], settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("Recent transactions\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');

    if recent.is_empty() {
        output.push_str("No recent transactions.\n");
        return output;
    }

    for txn in recent {
        let sign = match txn.kind {
            TransactionKind::Income => "+",
            TransactionKind::Expense | TransactionKind::Saving => "-",
        };
        output.push_str(&format!(
            "  {}  {:<20} {}{}\n",
            labels::format_date(txn.date, settings),
            labels::category_label(settings.language, &txn.category),
            sign,
            labels::format_amount(txn.amount, settings)
        ));
    }

    output
}

/// Format the fixed-expense load line
pub fn format_fixed_load(total_active: Money, settings: &Settings) -> String {
    format!(
        "Monthly fixed expenses: {}\n",
        labels::format_amount(total_active, settings)
    )
}
