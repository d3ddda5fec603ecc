//! Custom error types for Taka
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Taka operations
#[derive(Error, Debug)]
pub enum TakaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed date input
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors (persistent store inaccessible or unwritable)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TakaError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for upcoming expenses
    pub fn upcoming_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Upcoming expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for fixed expenses
    pub fn fixed_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Fixed expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidDate(_))
    }

    /// Check if this is a storage error
    ///
    /// Storage errors are surfaced as warnings at the CLI boundary; the
    /// session keeps running on the in-memory state.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TakaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TakaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Taka operations
pub type TakaResult<T> = Result<T, TakaError>;
