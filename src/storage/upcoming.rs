//! Upcoming expense repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TakaError;
use crate::models::{FixedId, UpcomingExpense, UpcomingId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for upcoming expense persistence
pub struct UpcomingRepository {
    path: PathBuf,
    data: RwLock<HashMap<UpcomingId, UpcomingExpense>>,
}

impl UpcomingRepository {
    /// Create a new upcoming expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load upcoming expenses from disk
    pub fn load(&self) -> Result<(), TakaError> {
        let records: Vec<UpcomingExpense> = read_json_or_default(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for expense in records {
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save upcoming expenses to disk (soonest due first)
    pub fn save(&self) -> Result<(), TakaError> {
        let data = self
            .data
            .read()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| a.due_date.cmp(&b.due_date).then(a.created_at.cmp(&b.created_at)));

        write_json_atomic(&self.path, &records)
    }

    /// Get an upcoming expense by ID
    pub fn get(&self, id: UpcomingId) -> Result<Option<UpcomingExpense>, TakaError> {
        let data = self
            .data
            .read()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all upcoming expenses, soonest due first
    pub fn get_all(&self) -> Result<Vec<UpcomingExpense>, TakaError> {
        let data = self
            .data
            .read()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| a.due_date.cmp(&b.due_date).then(a.created_at.cmp(&b.created_at)));
        Ok(records)
    }

    /// Find the instance generated from a fixed expense for a given month,
    /// if one exists (the at-most-one-per-month invariant makes this unique)
    pub fn find_generated(
        &self,
        fixed_id: FixedId,
        year: i32,
        month: u32,
    ) -> Result<Option<UpcomingExpense>, TakaError> {
        let data = self
            .data
            .read()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .values()
            .find(|e| e.fixed_source_id == Some(fixed_id) && e.due_in_month(year, month))
            .cloned())
    }

    /// Insert or update an upcoming expense
    pub fn upsert(&self, expense: UpcomingExpense) -> Result<(), TakaError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an upcoming expense; returns the removed record if it existed
    pub fn delete(&self, id: UpcomingId) -> Result<Option<UpcomingExpense>, TakaError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id))
    }

    /// Replace the whole collection (import path)
    pub fn replace_all(&self, records: Vec<UpcomingExpense>) -> Result<(), TakaError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for expense in records {
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Count upcoming expenses
    pub fn count(&self) -> Result<usize, TakaError> {
        let data = self
            .data
            .read()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
