//! Year and month series, and month-over-month comparison
//!
//! Pure functions over an explicit transaction snapshot plus a reference
//! date for the comparison.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

use crate::models::{Money, Transaction, TransactionKind};

/// Income and expense totals for one year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSummary {
    pub year: i32,
    pub income: Money,
    pub expense: Money,
}

/// One entry per distinct year present in the data, ascending.
///
/// Years without activity are not synthesized.
pub fn year_series(transactions: &[Transaction]) -> Vec<YearSummary> {
    let years: BTreeSet<i32> = transactions.iter().map(|t| t.date.year()).collect();

    years
        .into_iter()
        .map(|year| {
            let mut income = Money::zero();
            let mut expense = Money::zero();
            for txn in transactions.iter().filter(|t| t.in_year(year)) {
                match txn.kind {
                    TransactionKind::Income => income += txn.amount,
                    TransactionKind::Expense => expense += txn.amount,
                    TransactionKind::Saving => {}
                }
            }
            YearSummary {
                year,
                income,
                expense,
            }
        })
        .collect()
}

/// Per-month income and expense totals for one year
///
/// Index 0 is January; months without activity stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthSeries {
    pub income: [Money; 12],
    pub expense: [Money; 12],
}

/// Compute the 12-month income/expense series for a year
pub fn month_series(transactions: &[Transaction], year: i32) -> MonthSeries {
    let mut series = MonthSeries::default();

    for txn in transactions.iter().filter(|t| t.in_year(year)) {
        let slot = (txn.date.month() - 1) as usize;
        match txn.kind {
            TransactionKind::Income => series.income[slot] += txn.amount,
            TransactionKind::Expense => series.expense[slot] += txn.amount,
            TransactionKind::Saving => {}
        }
    }

    series
}

/// Net comparison of the reference month against the preceding month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthComparison {
    /// income - expense for the reference month
    pub current_net: Money,
    /// income - expense for the month before
    pub previous_net: Money,
    /// Percent change of net; 0 when the previous net is zero
    pub percent_change: f64,
}

/// Compare the reference date's calendar month against the immediately
/// preceding one, handling the December-to-January rollover.
pub fn month_over_month(transactions: &[Transaction], reference: NaiveDate) -> MonthComparison {
    let (year, month) = (reference.year(), reference.month());
    let (prev_year, prev_month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };

    let current = super::summary::monthly_totals(transactions, year, month);
    let previous = super::summary::monthly_totals(transactions, prev_year, prev_month);

    let current_net = current.balance;
    let previous_net = previous.balance;

    let percent_change = if previous_net.is_zero() {
        0.0
    } else {
        (current_net - previous_net).minor() as f64 / previous_net.minor() as f64 * 100.0
    };

    MonthComparison {
        current_net,
        previous_net,
        percent_change,
    }
}
