//! Core data models for Taka
//!
//! This module contains the data structures that represent the tracking
//! domain: transactions, upcoming expenses, fixed expenses, and money.

pub mod category;
pub mod fixed;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod upcoming;

pub use fixed::FixedExpense;
pub use ids::{FixedId, TransactionId, UpcomingId};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
pub use upcoming::UpcomingExpense;
