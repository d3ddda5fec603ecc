//! Path management for Taka
//!
//! Provides platform-appropriate path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `TAKA_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via the `directories` crate
//!    (e.g. `~/.config/taka` on Linux, `%APPDATA%\taka` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TakaError;

/// Manages all paths used by Taka
#[derive(Debug, Clone)]
pub struct TakaPaths {
    /// Base directory for all Taka data
    base_dir: PathBuf,
}

impl TakaPaths {
    /// Create a new TakaPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TakaError> {
        let base_dir = if let Ok(custom) = std::env::var("TAKA_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "taka").ok_or_else(|| {
                TakaError::Config("Could not determine a home directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create TakaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to upcoming.json
    pub fn upcoming_file(&self) -> PathBuf {
        self.data_dir().join("upcoming.json")
    }

    /// Get the path to fixed.json
    pub fn fixed_file(&self) -> PathBuf {
        self.data_dir().join("fixed.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), TakaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TakaError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TakaError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Taka has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TakaPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TakaPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.transactions_file(),
            temp_dir.path().join("data").join("transactions.json")
        );
        assert_eq!(
            paths.upcoming_file(),
            temp_dir.path().join("data").join("upcoming.json")
        );
        assert_eq!(
            paths.fixed_file(),
            temp_dir.path().join("data").join("fixed.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TakaPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }
}
