//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. The file
//! holds a bare JSON list, matching the persisted shape of the original
//! store.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TakaError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for transaction persistence with a month index
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
    /// Index: (year, month) -> transaction_ids
    by_month: RwLock<HashMap<(i32, u32), Vec<TransactionId>>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_month: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk and build the month index
    pub fn load(&self) -> Result<(), TakaError> {
        let records: Vec<Transaction> = read_json_or_default(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_month = self
            .by_month
            .write()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_month.clear();

        for txn in records {
            use chrono::Datelike;
            by_month
                .entry((txn.date.year(), txn.date.month()))
                .or_default()
                .push(txn.id);
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk (newest first, stable across reloads)
    pub fn save(&self) -> Result<(), TakaError> {
        let data = self
            .data
            .read()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        write_json_atomic(&self.path, &records)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, TakaError> {
        let data = self
            .data
            .read()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, TakaError> {
        let data = self
            .data
            .read()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(records)
    }

    /// Get transactions for a calendar month, newest first
    pub fn get_by_month(&self, year: i32, month: u32) -> Result<Vec<Transaction>, TakaError> {
        let data = self
            .data
            .read()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_month = self
            .by_month
            .read()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_month
            .get(&(year, month))
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let mut records: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(records)
    }

    /// Insert a new transaction
    pub fn insert(&self, txn: Transaction) -> Result<(), TakaError> {
        use chrono::Datelike;

        let mut data = self
            .data
            .write()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_month = self
            .by_month
            .write()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        by_month
            .entry((txn.date.year(), txn.date.month()))
            .or_default()
            .push(txn.id);
        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction; returns the removed record if it existed
    pub fn delete(&self, id: TransactionId) -> Result<Option<Transaction>, TakaError> {
        use chrono::Datelike;

        let mut data = self
            .data
            .write()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_month = self
            .by_month
            .write()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(txn) = data.remove(&id) {
            if let Some(ids) = by_month.get_mut(&(txn.date.year(), txn.date.month())) {
                ids.retain(|&tid| tid != id);
            }
            Ok(Some(txn))
        } else {
            Ok(None)
        }
    }

    /// Replace the whole collection (import path)
    pub fn replace_all(&self, records: Vec<Transaction>) -> Result<(), TakaError> {
        use chrono::Datelike;

        let mut data = self
            .data
            .write()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_month = self
            .by_month
            .write()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_month.clear();

        for txn in records {
            by_month
                .entry((txn.date.year(), txn.date.month()))
                .or_default()
                .push(txn.id);
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, TakaError> {
        let data = self
            .data
            .read()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn txn(kind: TransactionKind, minor: i64, category: &str, y: i32, m: u32, d: u32) -> Transaction {
        Transaction::new(
            kind,
            Money::from_minor(minor),
            category,
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let record = txn(TransactionKind::Expense, 5000, "food", 2024, 6, 15);
        let id = record.id;
        repo.insert(record).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.minor(), 5000);
    }

    #[test]
    fn test_get_by_month() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert(txn(TransactionKind::Expense, 100, "food", 2024, 6, 1))
            .unwrap();
        repo.insert(txn(TransactionKind::Expense, 200, "food", 2024, 6, 20))
            .unwrap();
        repo.insert(txn(TransactionKind::Expense, 300, "food", 2024, 7, 1))
            .unwrap();

        let june = repo.get_by_month(2024, 6).unwrap();
        assert_eq!(june.len(), 2);

        let july = repo.get_by_month(2024, 7).unwrap();
        assert_eq!(july.len(), 1);

        let empty = repo.get_by_month(2023, 6).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_get_all_sorted_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert(txn(TransactionKind::Expense, 100, "food", 2024, 6, 1))
            .unwrap();
        repo.insert(txn(TransactionKind::Expense, 200, "food", 2024, 6, 20))
            .unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].amount.minor(), 200);
        assert_eq!(all[1].amount.minor(), 100);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let record = txn(TransactionKind::Income, 250000, "salary", 2024, 6, 1);
        let id = record.id;
        repo.insert(record).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("transactions.json");
        let repo2 = TransactionRepository::new(path);
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.minor(), 250000);
        assert_eq!(retrieved.kind, TransactionKind::Income);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let record = txn(TransactionKind::Expense, 5000, "food", 2024, 6, 15);
        let id = record.id;
        repo.insert(record).unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        let removed = repo.delete(id).unwrap();
        assert!(removed.is_some());
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.get_by_month(2024, 6).unwrap().is_empty());

        // Deleting again is a no-op
        assert!(repo.delete(id).unwrap().is_none());
    }

    #[test]
    fn test_replace_all() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert(txn(TransactionKind::Expense, 100, "food", 2024, 6, 1))
            .unwrap();

        let replacement = vec![
            txn(TransactionKind::Income, 1000, "salary", 2023, 1, 5),
            txn(TransactionKind::Expense, 2000, "rent", 2023, 1, 10),
        ];
        repo.replace_all(replacement).unwrap();

        assert_eq!(repo.count().unwrap(), 2);
        assert!(repo.get_by_month(2024, 6).unwrap().is_empty());
        assert_eq!(repo.get_by_month(2023, 1).unwrap().len(), 2);
    }
}
