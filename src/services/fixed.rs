//! Fixed expense service and recurrence materializer
//!
//! Manages recurring monthly expense definitions and expands them into
//! concrete upcoming-expense instances, at most one per definition per
//! calendar month.

use chrono::NaiveDate;

use crate::error::{TakaError, TakaResult};
use crate::models::{category, FixedExpense, FixedId, Money, TransactionKind, UpcomingExpense, UpcomingId};
use crate::storage::Storage;

/// Service for fixed expense management
pub struct FixedService<'a> {
    storage: &'a Storage,
}

/// Active-status filter for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveFilter {
    Active,
    Inactive,
}

/// Input for creating a new fixed expense
#[derive(Debug, Clone)]
pub struct CreateFixedInput {
    pub title: String,
    pub amount: Money,
    pub category: String,
    pub due_day: u32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub active: bool,
}

/// Totals shown on the fixed-expenses summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedSummary {
    pub total: Money,
    pub active: Money,
    pub inactive: Money,
}

/// Result of a materialization attempt
///
/// Every non-error condition is an explicit variant rather than a silent
/// return, so callers can report what happened.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// A new upcoming expense was created
    Created(UpcomingExpense),
    /// An instance for this month already exists; nothing was inserted
    AlreadyExists(UpcomingId),
    /// The fixed expense is deactivated
    NotActive,
    /// The target month is before the start date or after the end date
    OutsideSchedule,
}

/// Expand a fixed expense into an upcoming-expense instance for one month
///
/// Pure: scans `existing` for a prior instance instead of touching storage.
/// The due day is clamped to the last day of short months. For any
/// `(fixed.id, year, month)` triple at most one instance can result, no
/// matter how often this is called.
pub fn materialize_for_month(
    fixed: &FixedExpense,
    year: i32,
    month: u32,
    existing: &[UpcomingExpense],
) -> GenerateOutcome {
    if !fixed.active {
        return GenerateOutcome::NotActive;
    }

    if !fixed.applies_in(year, month) {
        return GenerateOutcome::OutsideSchedule;
    }

    if let Some(prior) = existing
        .iter()
        .find(|e| e.fixed_source_id == Some(fixed.id) && e.due_in_month(year, month))
    {
        return GenerateOutcome::AlreadyExists(prior.id);
    }

    let mut instance = UpcomingExpense::new(
        fixed.title.clone(),
        fixed.amount,
        fixed.category.clone(),
        fixed.due_date_in(year, month),
    );
    instance.fixed_source_id = Some(fixed.id);
    instance.notes = format!("{} [recurring]", fixed.notes).trim().to_string();

    GenerateOutcome::Created(instance)
}

impl<'a> FixedService<'a> {
    /// Create a new fixed expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new fixed expense
    pub fn create(&self, input: CreateFixedInput) -> TakaResult<FixedExpense> {
        if input.title.trim().is_empty() {
            return Err(TakaError::Validation("Title must not be empty".into()));
        }
        if !category::is_valid(TransactionKind::Expense, &input.category) {
            return Err(TakaError::Validation(format!(
                "'{}' is not a valid expense category",
                input.category
            )));
        }

        let mut fixed = FixedExpense::new(
            input.title.trim(),
            input.amount,
            input.category,
            input.due_day,
            input.start_date,
        );
        fixed.end_date = input.end_date;
        fixed.active = input.active;
        if let Some(notes) = input.notes {
            fixed.notes = notes;
        }

        fixed
            .validate()
            .map_err(|e| TakaError::Validation(e.to_string()))?;

        self.storage.fixed.upsert(fixed.clone())?;
        self.storage.fixed.save()?;

        Ok(fixed)
    }

    /// Get a fixed expense by ID
    pub fn get(&self, id: FixedId) -> TakaResult<Option<FixedExpense>> {
        self.storage.fixed.get(id)
    }

    /// List fixed expenses, active first then by title
    pub fn list(&self, status: Option<ActiveFilter>) -> TakaResult<Vec<FixedExpense>> {
        let mut expenses = self.storage.fixed.get_all()?;

        if let Some(status) = status {
            expenses.retain(|f| match status {
                ActiveFilter::Active => f.active,
                ActiveFilter::Inactive => !f.active,
            });
        }

        Ok(expenses)
    }

    /// Flip the active flag; inactive expenses stop materializing but keep
    /// their history
    pub fn toggle_active(&self, id: FixedId) -> TakaResult<FixedExpense> {
        let mut fixed = self
            .storage
            .fixed
            .get(id)?
            .ok_or_else(|| TakaError::fixed_not_found(id.to_string()))?;

        fixed.active = !fixed.active;

        self.storage.fixed.upsert(fixed.clone())?;
        self.storage.fixed.save()?;

        Ok(fixed)
    }

    /// Delete a fixed expense
    ///
    /// Unconditional; any confirmation happens at the presentation layer.
    /// Previously generated upcoming instances are kept.
    pub fn delete(&self, id: FixedId) -> TakaResult<FixedExpense> {
        let removed = self
            .storage
            .fixed
            .delete(id)?
            .ok_or_else(|| TakaError::fixed_not_found(id.to_string()))?;

        self.storage.fixed.save()?;
        Ok(removed)
    }

    /// Materialize a fixed expense into an upcoming expense for a month
    ///
    /// Idempotent: a repeat call for the same month reports `AlreadyExists`
    /// and inserts nothing.
    pub fn generate_for_month(
        &self,
        id: FixedId,
        year: i32,
        month: u32,
    ) -> TakaResult<GenerateOutcome> {
        let fixed = self
            .storage
            .fixed
            .get(id)?
            .ok_or_else(|| TakaError::fixed_not_found(id.to_string()))?;

        let existing = self.storage.upcoming.get_all()?;
        let outcome = materialize_for_month(&fixed, year, month, &existing);

        if let GenerateOutcome::Created(instance) = &outcome {
            self.storage.upcoming.upsert(instance.clone())?;
            self.storage.upcoming.save()?;
        }

        Ok(outcome)
    }

    /// Compute the summary card totals
    pub fn summary(&self) -> TakaResult<FixedSummary> {
        let mut summary = FixedSummary::default();

        for fixed in self.storage.fixed.get_all()? {
            summary.total += fixed.amount;
            if fixed.active {
                summary.active += fixed.amount;
            } else {
                summary.inactive += fixed.amount;
            }
        }

        Ok(summary)
    }
}
