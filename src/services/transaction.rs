//! Transaction service
//!
//! Business logic for transaction management: validation at the boundary,
//! write-through persistence, filtered listing.

use chrono::NaiveDate;

use crate::error::{TakaError, TakaResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by kind
    pub kind: Option<TransactionKind>,
    /// Filter by category key
    pub category: Option<String>,
    /// Filter by calendar month
    pub month: Option<(i32, u32)>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by calendar month
    pub fn month(mut self, year: i32, month: u32) -> Self {
        self.month = Some((year, month));
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub amount: Money,
    pub category: String,
    pub source: Option<String>,
    pub date: NaiveDate,
    pub description: Option<String>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    ///
    /// Validation happens here, before any state is mutated; the aggregation
    /// core can assume stored records are well-formed.
    pub fn create(&self, input: CreateTransactionInput) -> TakaResult<Transaction> {
        let mut txn = Transaction::new(input.kind, input.amount, input.category, input.date);

        if let Some(source) = input.source {
            // validate() rejects a source on non-income kinds
            txn.source = source.trim().to_string();
        }

        if let Some(description) = input.description {
            txn.description = description;
        }

        txn.validate()
            .map_err(|e| TakaError::Validation(e.to_string()))?;

        self.storage.transactions.insert(txn.clone())?;
        self.storage.transactions.save()?;

        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> TakaResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// List transactions with optional filtering, newest first
    pub fn list(&self, filter: TransactionFilter) -> TakaResult<Vec<Transaction>> {
        let mut transactions = if let Some((year, month)) = filter.month {
            self.storage.transactions.get_by_month(year, month)?
        } else {
            self.storage.transactions.get_all()?
        };

        if let Some(kind) = filter.kind {
            transactions.retain(|t| t.kind == kind);
        }
        if let Some(category) = &filter.category {
            transactions.retain(|t| &t.category == category);
        }
        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// The most recent transactions (dashboard view)
    pub fn recent(&self, count: usize) -> TakaResult<Vec<Transaction>> {
        self.list(TransactionFilter::new().limit(count))
    }

    /// Delete a transaction
    ///
    /// Unconditional; any confirmation happens at the presentation layer.
    pub fn delete(&self, id: TransactionId) -> TakaResult<Transaction> {
        let removed = self
            .storage
            .transactions
            .delete(id)?
            .ok_or_else(|| TakaError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.save()?;
        Ok(removed)
    }

    /// Count transactions
    pub fn count(&self) -> TakaResult<usize> {
        self.storage.transactions.count()
    }

    /// The distinct category keys present in the data (filter dropdowns)
    pub fn categories_in_use(&self) -> TakaResult<Vec<String>> {
        let mut categories: Vec<String> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .map(|t| t.category)
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}
