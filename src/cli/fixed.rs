//! Fixed expense CLI commands

use chrono::Datelike;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::upcoming::{format_fixed_list, format_fixed_summary};
use crate::error::{TakaError, TakaResult};
use crate::models::{FixedId, Money};
use crate::services::{ActiveFilter, CreateFixedInput, FixedService, GenerateOutcome};
use crate::storage::Storage;

use super::{confirm, parse_date, parse_month};

/// Fixed expense subcommands
#[derive(Subcommand)]
pub enum FixedCommands {
    /// Add a new fixed (recurring monthly) expense
    Add {
        /// Title, e.g. "Rent"
        title: String,
        /// Monthly amount (e.g. "15000")
        amount: String,
        /// Expense category key
        category: String,
        /// Day of month the expense is due (1-31)
        #[arg(short, long)]
        due_day: u32,
        /// First month the obligation applies (YYYY-MM-DD), defaults to the
        /// first of the current month
        #[arg(short, long)]
        start: Option<String>,
        /// Optional last month the obligation applies (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
        /// Create in the deactivated state
        #[arg(long)]
        inactive: bool,
    },
    /// List fixed expenses
    List {
        /// Only active entries
        #[arg(long, conflicts_with = "inactive")]
        active: bool,
        /// Only inactive entries
        #[arg(long)]
        inactive: bool,
    },
    /// Toggle a fixed expense between active and inactive
    Toggle {
        /// Fixed expense ID
        id: String,
    },
    /// Generate the upcoming-expense instance for a month
    Generate {
        /// Fixed expense ID
        id: String,
        /// Target month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Delete a fixed expense
    Delete {
        /// Fixed expense ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a fixed expense command
pub fn handle_fixed_command(
    storage: &Storage,
    settings: &Settings,
    cmd: FixedCommands,
) -> TakaResult<()> {
    let service = FixedService::new(storage);

    match cmd {
        FixedCommands::Add {
            title,
            amount,
            category,
            due_day,
            start,
            end,
            notes,
            inactive,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                TakaError::Validation(format!(
                    "Invalid amount '{}'. Use a format like '15000'. {}",
                    amount, e
                ))
            })?;

            let start_date = match start {
                Some(s) => parse_date(&s)?,
                None => {
                    let today = chrono::Local::now().date_naive();
                    today.with_day(1).expect("first of month is valid")
                }
            };
            let end_date = end.map(|s| parse_date(&s)).transpose()?;

            let fixed = service.create(CreateFixedInput {
                title,
                amount,
                category,
                due_day,
                start_date,
                end_date,
                notes,
                active: !inactive,
            })?;

            println!("Added fixed expense {}", fixed.id);
        }
        FixedCommands::List { active, inactive } => {
            let status = if active {
                Some(ActiveFilter::Active)
            } else if inactive {
                Some(ActiveFilter::Inactive)
            } else {
                None
            };

            let expenses = service.list(status)?;
            print!("{}", format_fixed_list(&expenses, settings));
            print!("{}", format_fixed_summary(&service.summary()?, settings));
        }
        FixedCommands::Toggle { id } => {
            let id = resolve_id(&service, &id)?;
            let fixed = service.toggle_active(id)?;
            println!(
                "'{}' is now {}.",
                fixed.title,
                if fixed.active { "active" } else { "inactive" }
            );
        }
        FixedCommands::Generate { id, month } => {
            let id = resolve_id(&service, &id)?;

            let (year, month) = match month {
                Some(s) => parse_month(&s)?,
                None => {
                    let today = chrono::Local::now().date_naive();
                    (today.year(), today.month())
                }
            };

            match service.generate_for_month(id, year, month)? {
                GenerateOutcome::Created(instance) => {
                    println!(
                        "Generated '{}' due {} ({})",
                        instance.title,
                        instance.due_date,
                        instance.id
                    );
                }
                GenerateOutcome::AlreadyExists(_) => {
                    println!("Already generated for {}-{:02}.", year, month);
                }
                GenerateOutcome::NotActive => {
                    println!("This fixed expense is inactive; nothing generated.");
                }
                GenerateOutcome::OutsideSchedule => {
                    println!(
                        "{}-{:02} is outside this expense's start/end window; nothing generated.",
                        year, month
                    );
                }
            }
        }
        FixedCommands::Delete { id, force } => {
            let id = resolve_id(&service, &id)?;

            if !force && !confirm("Delete this fixed expense?") {
                println!("Cancelled.");
                return Ok(());
            }

            let removed = service.delete(id)?;
            println!("Deleted fixed expense '{}'", removed.title);
        }
    }

    Ok(())
}

/// Resolve a user-supplied ID: full UUID, prefixed UUID, or the short
/// display form shown in lists
fn resolve_id(service: &FixedService, input: &str) -> TakaResult<FixedId> {
    if let Ok(id) = input.parse::<FixedId>() {
        return Ok(id);
    }

    let matches: Vec<FixedId> = service
        .list(None)?
        .into_iter()
        .map(|f| f.id)
        .filter(|id| id.to_string() == input)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        _ => Err(TakaError::fixed_not_found(input)),
    }
}
