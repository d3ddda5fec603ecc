//! Fixed expense model
//!
//! A recurring monthly obligation (e.g. rent) that can be materialized into
//! concrete upcoming-expense instances, one per month. Deactivating a fixed
//! expense suspends materialization without deleting history.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::FixedId;
use super::money::Money;

/// A recurring monthly expense definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedExpense {
    /// Unique identifier
    pub id: FixedId,

    /// Short title, e.g. "Rent"
    pub title: String,

    /// Monthly amount (non-negative)
    pub amount: Money,

    /// Expense category key
    pub category: String,

    /// Day of month the expense is due (1-31)
    pub due_day: u32,

    /// First month the obligation applies
    pub start_date: NaiveDate,

    /// Optional last month the obligation applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,

    /// Whether materialization is enabled
    pub active: bool,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl FixedExpense {
    /// Create a new active fixed expense
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        due_day: u32,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: FixedId::new(),
            title: title.into(),
            amount,
            category: category.into(),
            due_day,
            start_date,
            end_date: None,
            notes: String::new(),
            active: true,
            created_at: Utc::now(),
        }
    }

    /// Compute the due date for a given month, clamping the due day to the
    /// last day of the month when it would overflow (dueDay 31 in February
    /// yields Feb 28/29, never a date in March).
    pub fn due_date_in(&self, year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, self.due_day)
            .unwrap_or_else(|| last_day_of_month(year, month))
    }

    /// Check whether the obligation applies in the given month
    ///
    /// A month counts when it is not before the start month and not after
    /// the end month (when an end date is set).
    pub fn applies_in(&self, year: i32, month: u32) -> bool {
        let target = (year, month);
        let start = (self.start_date.year(), self.start_date.month());
        if target < start {
            return false;
        }
        if let Some(end) = self.end_date {
            if target > (end.year(), end.month()) {
                return false;
            }
        }
        true
    }

    /// Validate the fixed expense
    pub fn validate(&self) -> Result<(), FixedValidationError> {
        if self.amount.is_negative() {
            return Err(FixedValidationError::NegativeAmount(self.amount));
        }

        if !(1..=31).contains(&self.due_day) {
            return Err(FixedValidationError::DueDayOutOfRange(self.due_day));
        }

        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(FixedValidationError::EndBeforeStart {
                    start: self.start_date,
                    end,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for FixedExpense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (day {}){}",
            self.title,
            self.amount,
            self.due_day,
            if self.active { "" } else { " [inactive]" }
        )
    }
}

/// The last calendar day of a month
pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next.expect("valid month") - Duration::days(1)
}

/// Validation errors for fixed expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixedValidationError {
    NegativeAmount(Money),
    DueDayOutOfRange(u32),
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for FixedValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount must not be negative (got {})", amount)
            }
            Self::DueDayOutOfRange(day) => {
                write!(f, "Due day must be between 1 and 31 (got {})", day)
            }
            Self::EndBeforeStart { start, end } => {
                write!(f, "End date {} is before start date {}", end, start)
            }
        }
    }
}

impl std::error::Error for FixedValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rent() -> FixedExpense {
        FixedExpense::new(
            "Rent",
            Money::from_minor(1500000),
            "rent",
            1,
            date(2024, 1, 1),
        )
    }

    #[test]
    fn test_new_fixed_expense() {
        let fixed = rent();
        assert!(fixed.active);
        assert_eq!(fixed.due_day, 1);
        assert!(fixed.validate().is_ok());
    }

    #[test]
    fn test_due_date_normal() {
        let mut fixed = rent();
        fixed.due_day = 15;
        assert_eq!(fixed.due_date_in(2024, 6), date(2024, 6, 15));
    }

    #[test]
    fn test_due_date_clamped_to_month_end() {
        let mut fixed = rent();
        fixed.due_day = 31;

        // February in a leap year
        assert_eq!(fixed.due_date_in(2024, 2), date(2024, 2, 29));
        // February in a non-leap year
        assert_eq!(fixed.due_date_in(2023, 2), date(2023, 2, 28));
        // 30-day month
        assert_eq!(fixed.due_date_in(2024, 4), date(2024, 4, 30));
        // 31-day month is untouched
        assert_eq!(fixed.due_date_in(2024, 7), date(2024, 7, 31));
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2024, 2), date(2024, 2, 29));
        assert_eq!(last_day_of_month(2024, 12), date(2024, 12, 31));
        assert_eq!(last_day_of_month(2024, 11), date(2024, 11, 30));
    }

    #[test]
    fn test_applies_in_window() {
        let mut fixed = rent();
        fixed.start_date = date(2024, 3, 1);
        fixed.end_date = Some(date(2024, 9, 30));

        assert!(!fixed.applies_in(2024, 2));
        assert!(fixed.applies_in(2024, 3));
        assert!(fixed.applies_in(2024, 9));
        assert!(!fixed.applies_in(2024, 10));
        assert!(!fixed.applies_in(2025, 1));
    }

    #[test]
    fn test_applies_open_ended() {
        let mut fixed = rent();
        fixed.start_date = date(2024, 3, 15);
        assert!(fixed.applies_in(2024, 3));
        assert!(fixed.applies_in(2030, 12));
        assert!(!fixed.applies_in(2023, 12));
    }

    #[test]
    fn test_due_day_validation() {
        let mut fixed = rent();
        fixed.due_day = 0;
        assert_eq!(
            fixed.validate(),
            Err(FixedValidationError::DueDayOutOfRange(0))
        );

        fixed.due_day = 32;
        assert_eq!(
            fixed.validate(),
            Err(FixedValidationError::DueDayOutOfRange(32))
        );

        fixed.due_day = 31;
        assert!(fixed.validate().is_ok());
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut fixed = rent();
        fixed.start_date = date(2024, 6, 1);
        fixed.end_date = Some(date(2024, 5, 1));
        assert!(matches!(
            fixed.validate(),
            Err(FixedValidationError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn test_serialization_field_names() {
        let fixed = rent();
        let json = serde_json::to_string(&fixed).unwrap();
        assert!(json.contains("\"dueDay\":1"));
        assert!(json.contains("\"startDate\""));
        assert!(json.contains("\"active\":true"));
        assert!(!json.contains("endDate")); // omitted when None

        let deserialized: FixedExpense = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, fixed.id);
        assert_eq!(deserialized.due_day, fixed.due_day);
    }
}
