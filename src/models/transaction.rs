//! Transaction model
//!
//! Represents income, expense, and saving entries. Amounts are stored
//! unsigned; the sign shown to the user is derived from the kind.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category;
use super::ids::TransactionId;
use super::money::Money;

/// Kind of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    #[default]
    Expense,
    /// Money set aside (tracked separately, never netted into balance)
    Saving,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
            Self::Saving => write!(f, "saving"),
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "saving" => Ok(Self::Saving),
            other => Err(format!("unknown transaction kind: {}", other)),
        }
    }
}

/// A financial transaction
///
/// Serialized field names are camelCase so persisted files and exports stay
/// shape-compatible with backups from earlier versions of the tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Kind of the transaction
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Amount (always non-negative)
    pub amount: Money,

    /// Category key (taxonomy depends on kind)
    pub category: String,

    /// Income source, free text; only meaningful for income
    #[serde(default)]
    pub source: String,

    /// Economic date of the transaction (not the creation date)
    pub date: NaiveDate,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// When the record was created; audit only, never used for aggregation
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            category: category.into(),
            source: String::new(),
            date,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Check if the transaction falls in the given calendar month
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }

    /// Check if the transaction falls in the given calendar year
    pub fn in_year(&self, year: i32) -> bool {
        self.date.year() == year
    }

    /// The signed amount as shown to the user (income positive, others negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense | TransactionKind::Saving => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if !category::is_valid(self.kind, &self.category) {
            return Err(TransactionValidationError::InvalidCategory {
                kind: self.kind,
                category: self.category.clone(),
            });
        }

        // Source is only meaningful for income
        if self.kind != TransactionKind::Income && !self.source.is_empty() {
            return Err(TransactionValidationError::SourceOnNonIncome);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    InvalidCategory {
        kind: TransactionKind,
        category: String,
    },
    SourceOnNonIncome,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount must not be negative (got {})", amount)
            }
            Self::InvalidCategory { kind, category } => {
                write!(f, "'{}' is not a valid {} category", category, kind)
            }
            Self::SourceOnNonIncome => {
                write!(f, "Source is only allowed on income transactions")
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            TransactionKind::Expense,
            Money::from_minor(5000),
            "food",
            date(2024, 6, 15),
        );
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.amount.minor(), 5000);
        assert_eq!(txn.category, "food");
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_signed_amount() {
        let income = Transaction::new(
            TransactionKind::Income,
            Money::from_minor(1000),
            "salary",
            date(2024, 6, 1),
        );
        assert_eq!(income.signed_amount().minor(), 1000);

        let expense = Transaction::new(
            TransactionKind::Expense,
            Money::from_minor(1000),
            "food",
            date(2024, 6, 1),
        );
        assert_eq!(expense.signed_amount().minor(), -1000);

        let saving = Transaction::new(
            TransactionKind::Saving,
            Money::from_minor(1000),
            "emergency",
            date(2024, 6, 1),
        );
        assert_eq!(saving.signed_amount().minor(), -1000);
    }

    #[test]
    fn test_in_month() {
        let txn = Transaction::new(
            TransactionKind::Expense,
            Money::from_minor(100),
            "food",
            date(2024, 6, 30),
        );
        assert!(txn.in_month(2024, 6));
        assert!(!txn.in_month(2024, 7));
        assert!(!txn.in_month(2023, 6));
        assert!(txn.in_year(2024));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let txn = Transaction::new(
            TransactionKind::Expense,
            Money::from_minor(-100),
            "food",
            date(2024, 6, 1),
        );
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_category_must_match_kind() {
        let txn = Transaction::new(
            TransactionKind::Income,
            Money::from_minor(100),
            "food",
            date(2024, 6, 1),
        );
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn test_source_only_on_income() {
        let mut txn = Transaction::new(
            TransactionKind::Expense,
            Money::from_minor(100),
            "food",
            date(2024, 6, 1),
        );
        txn.source = "employer".into();
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::SourceOnNonIncome)
        );

        let mut income = Transaction::new(
            TransactionKind::Income,
            Money::from_minor(100),
            "salary",
            date(2024, 6, 1),
        );
        income.source = "employer".into();
        assert!(income.validate().is_ok());
    }

    #[test]
    fn test_serialization_uses_original_field_names() {
        let txn = Transaction::new(
            TransactionKind::Expense,
            Money::from_minor(5000),
            "food",
            date(2024, 6, 15),
        );
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"type\":\"expense\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"date\":\"2024-06-15\""));

        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, txn.id);
        assert_eq!(deserialized.amount, txn.amount);
        assert_eq!(deserialized.kind, txn.kind);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "income".parse::<TransactionKind>().unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            "Saving".parse::<TransactionKind>().unwrap(),
            TransactionKind::Saving
        );
        assert!("transfer".parse::<TransactionKind>().is_err());
    }
}
