//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. Confirmation prompts live
//! here — core operations are unconditional.

pub mod dashboard;
pub mod export;
pub mod fixed;
pub mod report;
pub mod settings;
pub mod transaction;
pub mod upcoming;

pub use dashboard::handle_dashboard_command;
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use fixed::{handle_fixed_command, FixedCommands};
pub use report::{handle_report_command, ReportCommands};
pub use settings::{handle_settings_command, SettingsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use upcoming::{handle_upcoming_command, UpcomingCommands};

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::error::{TakaError, TakaResult};

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(s: &str) -> TakaResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| TakaError::InvalidDate(format!("'{}' (expected YYYY-MM-DD)", s)))
}

/// Parse a YYYY-MM month argument
pub(crate) fn parse_month(s: &str) -> TakaResult<(i32, u32)> {
    let parsed = (|| {
        let (year_str, month_str) = s.split_once('-')?;
        let year: i32 = year_str.parse().ok()?;
        let month: u32 = month_str.parse().ok()?;
        (1..=12).contains(&month).then_some((year, month))
    })();

    parsed.ok_or_else(|| TakaError::InvalidDate(format!("'{}' (expected YYYY-MM)", s)))
}

/// Ask the user for a y/N confirmation on stdin
pub(crate) fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-06-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
        assert!(matches!(
            parse_date("15-06-2024"),
            Err(TakaError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_date("2024-02-30"),
            Err(TakaError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-06").unwrap(), (2024, 6));
        assert_eq!(parse_month("2024-12").unwrap(), (2024, 12));
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("2024").is_err());
        assert!(parse_month("june").is_err());
    }
}
