//! Transaction CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_list};
use crate::error::{TakaError, TakaResult};
use crate::models::{Money, TransactionId, TransactionKind};
use crate::services::{CreateTransactionInput, TransactionFilter, TransactionService};
use crate::storage::Storage;

use super::{confirm, parse_date, parse_month};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Kind: income, expense, or saving
        kind: TransactionKind,
        /// Amount (e.g. "1500" or "1500.50")
        amount: String,
        /// Category key (e.g. food, rent, salary)
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Income source (income only)
        #[arg(short, long)]
        source: Option<String>,
        /// Description
        #[arg(long)]
        description: Option<String>,
    },
    /// List transactions
    List {
        /// Filter by kind (income, expense, saving)
        #[arg(short, long)]
        kind: Option<TransactionKind>,
        /// Filter by category key
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TakaResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            source,
            description,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                TakaError::Validation(format!(
                    "Invalid amount '{}'. Use a format like '1500' or '1500.50'. {}",
                    amount, e
                ))
            })?;

            let date = match date {
                Some(s) => parse_date(&s)?,
                None => chrono::Local::now().date_naive(),
            };

            let txn = service.create(CreateTransactionInput {
                kind,
                amount,
                category,
                source,
                date,
                description,
            })?;

            println!("Added transaction {}", txn.id);
        }
        TransactionCommands::List {
            kind,
            category,
            month,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(kind) = kind {
                filter = filter.kind(kind);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(month) = month {
                let (year, month) = parse_month(&month)?;
                filter = filter.month(year, month);
            }

            let transactions = service.list(filter)?;
            print!("{}", format_transaction_list(&transactions, settings));
        }
        TransactionCommands::Show { id } => {
            let id = resolve_id(&service, &id)?;
            let txn = service
                .get(id)?
                .ok_or_else(|| TakaError::transaction_not_found(id.to_string()))?;
            print!("{}", format_transaction_details(&txn, settings));
        }
        TransactionCommands::Delete { id, force } => {
            let id = resolve_id(&service, &id)?;

            if !force && !confirm("Delete this transaction?") {
                println!("Cancelled.");
                return Ok(());
            }

            let removed = service.delete(id)?;
            println!("Deleted transaction {} ({})", removed.id, removed.amount);
        }
    }

    Ok(())
}

/// Resolve a user-supplied ID: full UUID, prefixed UUID, or the short
/// display form shown in lists
fn resolve_id(service: &TransactionService, input: &str) -> TakaResult<TransactionId> {
    if let Ok(id) = input.parse::<TransactionId>() {
        return Ok(id);
    }

    let matches: Vec<TransactionId> = service
        .list(TransactionFilter::new())?
        .into_iter()
        .map(|t| t.id)
        .filter(|id| id.to_string() == input)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        _ => Err(TakaError::transaction_not_found(input)),
    }
}
