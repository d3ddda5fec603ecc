//! Upcoming expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::upcoming::{format_upcoming_list, format_upcoming_summary};
use crate::error::{TakaError, TakaResult};
use crate::models::{Money, UpcomingId};
use crate::services::{CreateUpcomingInput, UpcomingFilter, UpcomingService};
use crate::storage::Storage;

use super::{confirm, parse_date, parse_month};

/// Upcoming expense subcommands
#[derive(Subcommand)]
pub enum UpcomingCommands {
    /// Add a new upcoming expense
    Add {
        /// Title, e.g. "Electricity bill"
        title: String,
        /// Amount (e.g. "1200" or "1200.50")
        amount: String,
        /// Expense category key
        category: String,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: String,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List upcoming expenses
    List {
        /// Only unpaid entries
        #[arg(long, conflicts_with = "paid")]
        pending: bool,
        /// Only paid entries
        #[arg(long)]
        paid: bool,
        /// Filter by due month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Mark an upcoming expense as paid
    Paid {
        /// Upcoming expense ID
        id: String,
    },
    /// Delete an upcoming expense
    Delete {
        /// Upcoming expense ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an upcoming expense command
pub fn handle_upcoming_command(
    storage: &Storage,
    settings: &Settings,
    cmd: UpcomingCommands,
) -> TakaResult<()> {
    let service = UpcomingService::new(storage);

    match cmd {
        UpcomingCommands::Add {
            title,
            amount,
            category,
            due,
            notes,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                TakaError::Validation(format!(
                    "Invalid amount '{}'. Use a format like '1200' or '1200.50'. {}",
                    amount, e
                ))
            })?;
            let due_date = parse_date(&due)?;

            let expense = service.create(CreateUpcomingInput {
                title,
                amount,
                category,
                due_date,
                notes,
            })?;

            println!("Added upcoming expense {}", expense.id);
        }
        UpcomingCommands::List {
            pending,
            paid,
            month,
        } => {
            let mut filter = UpcomingFilter::new();
            if pending {
                filter = filter.pending();
            }
            if paid {
                filter = filter.paid();
            }
            if let Some(month) = month {
                let (year, month) = parse_month(&month)?;
                filter = filter.month(year, month);
            }

            let expenses = service.list(filter)?;
            let today = chrono::Local::now().date_naive();
            print!("{}", format_upcoming_list(&expenses, today, settings));
            print!("{}", format_upcoming_summary(&service.summary()?, settings));
        }
        UpcomingCommands::Paid { id } => {
            let id = resolve_id(&service, &id)?;
            let expense = service.mark_paid(id)?;
            println!("Marked '{}' as paid.", expense.title);
        }
        UpcomingCommands::Delete { id, force } => {
            let id = resolve_id(&service, &id)?;

            if !force && !confirm("Delete this upcoming expense?") {
                println!("Cancelled.");
                return Ok(());
            }

            let removed = service.delete(id)?;
            println!("Deleted upcoming expense '{}'", removed.title);
        }
    }

    Ok(())
}

/// Resolve a user-supplied ID: full UUID, prefixed UUID, or the short
/// display form shown in lists
fn resolve_id(service: &UpcomingService, input: &str) -> TakaResult<UpcomingId> {
    if let Ok(id) = input.parse::<UpcomingId>() {
        return Ok(id);
    }

    let matches: Vec<UpcomingId> = service
        .list(UpcomingFilter::new())?
        .into_iter()
        .map(|e| e.id)
        .filter(|id| id.to_string() == input)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        _ => Err(TakaError::upcoming_not_found(input)),
    }
}
