//! Storage layer for Taka
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The in-memory state is the source of truth during a session;
//! every mutation writes through to disk immediately.

pub mod file_io;
pub mod fixed;
pub mod transactions;
pub mod upcoming;

pub use file_io::{read_json_or_default, write_json_atomic};
pub use fixed::FixedRepository;
pub use transactions::TransactionRepository;
pub use upcoming::UpcomingRepository;

use crate::config::paths::TakaPaths;
use crate::error::TakaError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TakaPaths,
    pub transactions: TransactionRepository,
    pub upcoming: UpcomingRepository,
    pub fixed: FixedRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TakaPaths) -> Result<Self, TakaError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            upcoming: UpcomingRepository::new(paths.upcoming_file()),
            fixed: FixedRepository::new(paths.fixed_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TakaPaths {
        &self.paths
    }

    /// Load all collections from disk
    pub fn load_all(&mut self) -> Result<(), TakaError> {
        self.transactions.load()?;
        self.upcoming.load()?;
        self.fixed.load()?;
        Ok(())
    }

    /// Save all collections to disk
    pub fn save_all(&self) -> Result<(), TakaError> {
        self.transactions.save()?;
        self.upcoming.save()?;
        self.fixed.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TakaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert_eq!(storage.upcoming.count().unwrap(), 0);
        assert_eq!(storage.fixed.count().unwrap(), 0);
    }
}
