//! Upcoming expense model
//!
//! A one-off expected expense with a due date. Instances are created
//! manually or materialized from a fixed expense; the `paid` flag only
//! ever moves from false to true.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{FixedId, UpcomingId};
use super::money::Money;

/// An upcoming (expected) expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingExpense {
    /// Unique identifier
    pub id: UpcomingId,

    /// Short title, e.g. "Electricity bill"
    pub title: String,

    /// Expected amount (non-negative)
    pub amount: Money,

    /// Expense category key
    pub category: String,

    /// When the expense is due
    pub due_date: NaiveDate,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,

    /// Whether the expense has been paid (monotonic; there is no unpay)
    #[serde(default)]
    pub paid: bool,

    /// Back-reference to the fixed expense that generated this instance,
    /// used only for duplicate-generation detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_source_id: Option<FixedId>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl UpcomingExpense {
    /// Create a new manually-entered upcoming expense
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: UpcomingId::new(),
            title: title.into(),
            amount,
            category: category.into(),
            due_date,
            notes: String::new(),
            paid: false,
            fixed_source_id: None,
            created_at: Utc::now(),
        }
    }

    /// Mark the expense as paid
    ///
    /// Returns true if the flag changed, false if it was already paid.
    pub fn mark_paid(&mut self) -> bool {
        if self.paid {
            false
        } else {
            self.paid = true;
            true
        }
    }

    /// Check if this instance was generated from a fixed expense
    pub fn is_generated(&self) -> bool {
        self.fixed_source_id.is_some()
    }

    /// Check if the due date falls in the given calendar month
    pub fn due_in_month(&self, year: i32, month: u32) -> bool {
        self.due_date.year() == year && self.due_date.month() == month
    }
}

impl fmt::Display for UpcomingExpense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}",
            self.due_date.format("%Y-%m-%d"),
            self.title,
            self.amount,
            if self.paid { " (paid)" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_upcoming() {
        let expense = UpcomingExpense::new(
            "Electricity bill",
            Money::from_minor(120000),
            "utilities",
            date(2024, 6, 20),
        );
        assert!(!expense.paid);
        assert!(!expense.is_generated());
        assert!(expense.due_in_month(2024, 6));
    }

    #[test]
    fn test_mark_paid_is_monotonic() {
        let mut expense = UpcomingExpense::new(
            "Internet",
            Money::from_minor(100000),
            "utilities",
            date(2024, 6, 5),
        );

        assert!(expense.mark_paid());
        assert!(expense.paid);

        // Second call changes nothing
        assert!(!expense.mark_paid());
        assert!(expense.paid);
    }

    #[test]
    fn test_serialization_field_names() {
        let expense = UpcomingExpense::new(
            "Rent",
            Money::from_minor(1500000),
            "rent",
            date(2024, 7, 1),
        );
        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"dueDate\":\"2024-07-01\""));
        assert!(json.contains("\"paid\":false"));
        // fixedSourceId is omitted for manual entries
        assert!(!json.contains("fixedSourceId"));

        let deserialized: UpcomingExpense = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, expense.id);
        assert_eq!(deserialized.fixed_source_id, None);
    }

    #[test]
    fn test_generated_instance_round_trip() {
        let mut expense = UpcomingExpense::new(
            "Rent",
            Money::from_minor(1500000),
            "rent",
            date(2024, 7, 1),
        );
        expense.fixed_source_id = Some(FixedId::new());

        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("fixedSourceId"));

        let deserialized: UpcomingExpense = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.fixed_source_id, expense.fixed_source_id);
        assert!(deserialized.is_generated());
    }
}
