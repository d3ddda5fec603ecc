//! Period-scoped totals and category breakdowns
//!
//! Pure functions over an explicit transaction snapshot — no hidden state.
//! Savings are tracked as their own total and deliberately excluded from
//! the balance.

use std::collections::BTreeMap;

use crate::models::{FixedExpense, Money, Transaction, TransactionKind};

/// Monthly income/expense/saving totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthlyTotals {
    pub income: Money,
    pub expense: Money,
    pub saving: Money,
    /// income - expense; savings are not netted in
    pub balance: Money,
}

/// Compute totals for a calendar month
pub fn monthly_totals(transactions: &[Transaction], year: i32, month: u32) -> MonthlyTotals {
    let mut totals = MonthlyTotals::default();

    for txn in transactions.iter().filter(|t| t.in_month(year, month)) {
        match txn.kind {
            TransactionKind::Income => totals.income += txn.amount,
            TransactionKind::Expense => totals.expense += txn.amount,
            TransactionKind::Saving => totals.saving += txn.amount,
        }
    }

    totals.balance = totals.income - totals.expense;
    totals
}

/// Group same-month transactions of one kind by category
///
/// Returns a sorted map of category key to summed amount. Only categories
/// with activity appear.
pub fn category_breakdown(
    transactions: &[Transaction],
    year: i32,
    month: u32,
    kind: TransactionKind,
) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();

    for txn in transactions
        .iter()
        .filter(|t| t.kind == kind && t.in_month(year, month))
    {
        *totals.entry(txn.category.clone()).or_insert(Money::zero()) += txn.amount;
    }

    totals
}

/// Sum fixed expense amounts, optionally restricted to active entries
pub fn fixed_expenses_total(fixed_expenses: &[FixedExpense], only_active: bool) -> Money {
    fixed_expenses
        .iter()
        .filter(|f| !only_active || f.active)
        .map(|f| f.amount)
        .sum()
}
