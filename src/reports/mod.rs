//! Aggregation and analysis over transaction snapshots
//!
//! All functions here are pure: they take explicit slices and reference
//! dates and return values. Persistence and presentation live elsewhere.

pub mod health;
pub mod reminders;
pub mod series;
pub mod summary;

pub use health::{financial_health_score, HealthLevel};
pub use reminders::{reminder_feed, Urgency, DEFAULT_HORIZON_DAYS};
pub use series::{month_over_month, month_series, year_series, MonthComparison, MonthSeries, YearSummary};
pub use summary::{category_breakdown, fixed_expenses_total, monthly_totals, MonthlyTotals};
