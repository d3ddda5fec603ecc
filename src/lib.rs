//! Taka - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the Taka finance
//! tracker: income/expense/saving transactions, upcoming one-off expenses,
//! and recurring ("fixed") monthly expenses, persisted as local JSON files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, upcoming and fixed expenses)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer, including the recurrence materializer
//! - `reports`: Pure aggregation (totals, series, health score, reminders)
//! - `export`: Backup export/import (JSON, YAML, CSV)
//! - `display`: Terminal formatting and display labels
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use taka::config::{paths::TakaPaths, settings::Settings};
//! use taka::storage::Storage;
//!
//! let paths = TakaPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TakaError, TakaResult};
