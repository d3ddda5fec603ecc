//! Urgency classification and the reminder feed
//!
//! Classifies upcoming expenses by due-date proximity. Paid expenses are
//! always `Paid` regardless of date; everything else is bucketed by whole
//! days remaining.

use chrono::NaiveDate;
use std::fmt;

use crate::models::UpcomingExpense;

/// How soon an upcoming expense needs attention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Already paid; date no longer matters
    Paid,
    /// Past due by this many days
    Overdue(i64),
    /// Due today
    Today,
    /// Due tomorrow
    Tomorrow,
    /// Due within three days
    DueSoon(i64),
    /// Due later than that
    Upcoming(i64),
}

impl Urgency {
    /// Classify a due date relative to today
    pub fn classify(due_date: NaiveDate, today: NaiveDate, paid: bool) -> Self {
        if paid {
            return Self::Paid;
        }

        let days_left = (due_date - today).num_days();

        if days_left < 0 {
            Self::Overdue(-days_left)
        } else if days_left == 0 {
            Self::Today
        } else if days_left == 1 {
            Self::Tomorrow
        } else if days_left <= 3 {
            Self::DueSoon(days_left)
        } else {
            Self::Upcoming(days_left)
        }
    }

    /// Whether this bucket warrants highlighting in lists
    pub fn is_pressing(&self) -> bool {
        matches!(
            self,
            Self::Overdue(_) | Self::Today | Self::Tomorrow | Self::DueSoon(_)
        )
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paid => write!(f, "paid"),
            Self::Overdue(days) => write!(f, "{} days overdue", days),
            Self::Today => write!(f, "due today"),
            Self::Tomorrow => write!(f, "due tomorrow"),
            Self::DueSoon(days) | Self::Upcoming(days) => write!(f, "{} days left", days),
        }
    }
}

/// Default reminder horizon in days
pub const DEFAULT_HORIZON_DAYS: i64 = 7;

/// Unpaid expenses due within the horizon, soonest first
///
/// Overdue items are always included; the horizon has no lower bound.
pub fn reminder_feed(
    upcoming: &[UpcomingExpense],
    today: NaiveDate,
    horizon_days: i64,
) -> Vec<&UpcomingExpense> {
    let mut feed: Vec<&UpcomingExpense> = upcoming
        .iter()
        .filter(|e| !e.paid && (e.due_date - today).num_days() <= horizon_days)
        .collect();

    feed.sort_by_key(|e| e.due_date);
    feed
}
