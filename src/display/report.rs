//! Report rendering
//!
//! Terminal tables standing in for the original charts: monthly series,
//! yearly series, and the category breakdown.

use std::collections::BTreeMap;

use crate::config::Settings;
use crate::display::labels;
use crate::models::Money;
use crate::reports::{MonthSeries, YearSummary};

/// Format the 12-month income/expense series for a year
pub fn format_month_series(series: &MonthSeries, year: i32, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Monthly summary {}\n", year));
    output.push_str(&format!(
        "{:<12} {:>14} {:>14}\n",
        "Month", "Income", "Expense"
    ));
    output.push_str(&"-".repeat(42));
    output.push('\n');

    for month in 1..=12u32 {
        let slot = (month - 1) as usize;
        output.push_str(&format!(
            "{:<12} {:>14} {:>14}\n",
            labels::month_abbrev(settings.language, month),
            labels::format_amount(series.income[slot], settings),
            labels::format_amount(series.expense[slot], settings),
        ));
    }

    let total_income: Money = series.income.iter().copied().sum();
    let total_expense: Money = series.expense.iter().copied().sum();
    output.push_str(&"-".repeat(42));
    output.push('\n');
    output.push_str(&format!(
        "{:<12} {:>14} {:>14}\n",
        "Total",
        labels::format_amount(total_income, settings),
        labels::format_amount(total_expense, settings),
    ));

    output
}

/// Format the per-year income/expense series
pub fn format_year_series(series: &[YearSummary], settings: &Settings) -> String {
    if series.is_empty() {
        return "No transactions recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Yearly summary\n");
    output.push_str(&format!(
        "{:<8} {:>14} {:>14} {:>14}\n",
        "Year", "Income", "Expense", "Net"
    ));
    output.push_str(&"-".repeat(54));
    output.push('\n');

    for entry in series {
        output.push_str(&format!(
            "{:<8} {:>14} {:>14} {:>14}\n",
            entry.year,
            labels::format_amount(entry.income, settings),
            labels::format_amount(entry.expense, settings),
            labels::format_amount(entry.income - entry.expense, settings),
        ));
    }

    output
}

/// Format a category breakdown with percentages of the total
pub fn format_category_breakdown(
    breakdown: &BTreeMap<String, Money>,
    year: i32,
    month: u32,
    settings: &Settings,
) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Expense breakdown, {} {}\n",
        labels::month_name(settings.language, month),
        year
    ));

    if breakdown.is_empty() {
        output.push_str("No expenses recorded for this month.\n");
        return output;
    }

    let total: Money = breakdown.values().copied().sum();

    // Largest first
    let mut entries: Vec<(&String, &Money)> = breakdown.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1));

    output.push_str(&format!(
        "{:<20} {:>14} {:>8}\n",
        "Category", "Amount", "%"
    ));
    output.push_str(&"-".repeat(44));
    output.push('\n');

    for (key, amount) in entries {
        let percent = if total.is_zero() {
            0.0
        } else {
            amount.minor() as f64 / total.minor() as f64 * 100.0
        };
        output.push_str(&format!(
            "{:<20} {:>14} {:>7.1}%\n",
            labels::category_label(settings.language, key),
            labels::format_amount(*amount, settings),
            percent
        ));
    }

    output.push_str(&"-".repeat(44));
    output.push('\n');
    output.push_str(&format!(
        "{:<20} {:>14}\n",
        "Total",
        labels::format_amount(total, settings)
    ));

    output
}
