//! Upcoming expense service
//!
//! Business logic for one-off expected expenses: creation, the monotonic
//! paid flag, deletion, filtered listing, and the summary card totals.

use chrono::NaiveDate;

use crate::error::{TakaError, TakaResult};
use crate::models::{category, Money, TransactionKind, UpcomingExpense, UpcomingId};
use crate::storage::Storage;

/// Service for upcoming expense management
pub struct UpcomingService<'a> {
    storage: &'a Storage,
}

/// Paid-status filter for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaidFilter {
    Pending,
    Paid,
}

/// Options for filtering upcoming expenses
#[derive(Debug, Clone, Default)]
pub struct UpcomingFilter {
    /// Filter by paid status
    pub status: Option<PaidFilter>,
    /// Filter by due month
    pub month: Option<(i32, u32)>,
}

impl UpcomingFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Only unpaid entries
    pub fn pending(mut self) -> Self {
        self.status = Some(PaidFilter::Pending);
        self
    }

    /// Only paid entries
    pub fn paid(mut self) -> Self {
        self.status = Some(PaidFilter::Paid);
        self
    }

    /// Filter by due month
    pub fn month(mut self, year: i32, month: u32) -> Self {
        self.month = Some((year, month));
        self
    }
}

/// Input for creating a new upcoming expense
#[derive(Debug, Clone)]
pub struct CreateUpcomingInput {
    pub title: String,
    pub amount: Money,
    pub category: String,
    pub due_date: NaiveDate,
    pub notes: Option<String>,
}

/// Totals shown on the upcoming-expenses summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpcomingSummary {
    pub total: Money,
    pub pending: Money,
    pub paid: Money,
}

impl<'a> UpcomingService<'a> {
    /// Create a new upcoming expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new upcoming expense
    pub fn create(&self, input: CreateUpcomingInput) -> TakaResult<UpcomingExpense> {
        if input.title.trim().is_empty() {
            return Err(TakaError::Validation("Title must not be empty".into()));
        }
        if input.amount.is_negative() {
            return Err(TakaError::Validation(format!(
                "Amount must not be negative (got {})",
                input.amount
            )));
        }
        if !category::is_valid(TransactionKind::Expense, &input.category) {
            return Err(TakaError::Validation(format!(
                "'{}' is not a valid expense category",
                input.category
            )));
        }

        let mut expense = UpcomingExpense::new(
            input.title.trim(),
            input.amount,
            input.category,
            input.due_date,
        );
        if let Some(notes) = input.notes {
            expense.notes = notes;
        }

        self.storage.upcoming.upsert(expense.clone())?;
        self.storage.upcoming.save()?;

        Ok(expense)
    }

    /// Get an upcoming expense by ID
    pub fn get(&self, id: UpcomingId) -> TakaResult<Option<UpcomingExpense>> {
        self.storage.upcoming.get(id)
    }

    /// List upcoming expenses with optional filtering, soonest due first
    pub fn list(&self, filter: UpcomingFilter) -> TakaResult<Vec<UpcomingExpense>> {
        let mut expenses = self.storage.upcoming.get_all()?;

        if let Some(status) = filter.status {
            expenses.retain(|e| match status {
                PaidFilter::Pending => !e.paid,
                PaidFilter::Paid => e.paid,
            });
        }
        if let Some((year, month)) = filter.month {
            expenses.retain(|e| e.due_in_month(year, month));
        }

        Ok(expenses)
    }

    /// Mark an upcoming expense as paid
    ///
    /// The flag is monotonic: marking an already-paid expense is a no-op
    /// that still succeeds.
    pub fn mark_paid(&self, id: UpcomingId) -> TakaResult<UpcomingExpense> {
        let mut expense = self
            .storage
            .upcoming
            .get(id)?
            .ok_or_else(|| TakaError::upcoming_not_found(id.to_string()))?;

        if expense.mark_paid() {
            self.storage.upcoming.upsert(expense.clone())?;
            self.storage.upcoming.save()?;
        }

        Ok(expense)
    }

    /// Delete an upcoming expense
    ///
    /// Unconditional; any confirmation happens at the presentation layer.
    pub fn delete(&self, id: UpcomingId) -> TakaResult<UpcomingExpense> {
        let removed = self
            .storage
            .upcoming
            .delete(id)?
            .ok_or_else(|| TakaError::upcoming_not_found(id.to_string()))?;

        self.storage.upcoming.save()?;
        Ok(removed)
    }

    /// Compute the summary card totals
    pub fn summary(&self) -> TakaResult<UpcomingSummary> {
        let mut summary = UpcomingSummary::default();

        for expense in self.storage.upcoming.get_all()? {
            summary.total += expense.amount;
            if expense.paid {
                summary.paid += expense.amount;
            } else {
                summary.pending += expense.amount;
            }
        }

        Ok(summary)
    }

    /// The distinct due months present in the data, newest first
    /// (month filter dropdown)
    pub fn months_in_use(&self) -> TakaResult<Vec<(i32, u32)>> {
        use chrono::Datelike;

        let mut months: Vec<(i32, u32)> = self
            .storage
            .upcoming
            .get_all()?
            .into_iter()
            .map(|e| (e.due_date.year(), e.due_date.month()))
            .collect();
        months.sort();
        months.dedup();
        months.reverse();
        Ok(months)
    }
}
