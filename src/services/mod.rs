//! Service layer for Taka
//!
//! The service layer provides business logic on top of the storage layer:
//! boundary validation, write-through persistence, and the recurrence
//! materializer.

pub mod fixed;
pub mod transaction;
pub mod upcoming;

pub use fixed::{
    materialize_for_month, ActiveFilter, CreateFixedInput, FixedService, FixedSummary,
    GenerateOutcome,
};
pub use transaction::{CreateTransactionInput, TransactionFilter, TransactionService};
pub use upcoming::{
    CreateUpcomingInput, PaidFilter, UpcomingFilter, UpcomingService, UpcomingSummary,
};
