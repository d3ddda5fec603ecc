//! Fixed expense repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TakaError;
use crate::models::{FixedExpense, FixedId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for fixed expense persistence
pub struct FixedRepository {
    path: PathBuf,
    data: RwLock<HashMap<FixedId, FixedExpense>>,
}

impl FixedRepository {
    /// Create a new fixed expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load fixed expenses from disk
    pub fn load(&self) -> Result<(), TakaError> {
        let records: Vec<FixedExpense> = read_json_or_default(&self.path)?;

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

    /// Save fixed expenses to disk (active first, then by title)
    pub fn save(&self) -> Result<(), TakaError> {
        let data = self
            .data
            .read()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| b.active.cmp(&a.active).then_with(|| a.title.cmp(&b.title)));

        write_json_atomic(&self.path, &records)
    }

    /// Get a fixed expense by ID
    pub fn get(&self, id: FixedId) -> Result<Option<FixedExpense>, TakaError> {
        let data = self
            .data
            .read()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all fixed expenses, active first, then by title
    pub fn get_all(&self) -> Result<Vec<FixedExpense>, TakaError> {
        let data = self
            .data
            .read()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| b.active.cmp(&a.active).then_with(|| a.title.cmp(&b.title)));
        Ok(records)
    }

    /// Get the active fixed expenses, by title
    pub fn get_active(&self) -> Result<Vec<FixedExpense>, TakaError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|f| f.active)
            .collect())
    }

    /// Insert or update a fixed expense
    pub fn upsert(&self, expense: FixedExpense) -> Result<(), TakaError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete a fixed expense; returns the removed record if it existed
    pub fn delete(&self, id: FixedId) -> Result<Option<FixedExpense>, TakaError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id))
    }

    /// Replace the whole collection (import path)
    pub fn replace_all(&self, records: Vec<FixedExpense>) -> Result<(), TakaError> {
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

    /// Count fixed expenses
    pub fn count(&self) -> Result<usize, TakaError> {
        let data = self
            .data
            .read()
            .map_err(|e| TakaError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
