use anyhow::Result;
use clap::{Parser, Subcommand};

use taka::cli::{
    handle_dashboard_command, handle_export_command, handle_fixed_command, handle_report_command,
    handle_settings_command, handle_transaction_command, handle_upcoming_command, ExportCommands,
    FixedCommands, ReportCommands, SettingsCommands, TransactionCommands, UpcomingCommands,
};
use taka::config::{paths::TakaPaths, settings::Settings};
use taka::storage::Storage;

#[derive(Parser)]
#[command(
    name = "taka",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "Taka tracks income, expenses and savings, reminds you of \
                  upcoming bills, and materializes recurring monthly expenses \
                  into concrete due items. All data lives in local JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard (default)
    #[command(alias = "dash")]
    Dashboard,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Upcoming expense commands
    #[command(subcommand)]
    Upcoming(UpcomingCommands),

    /// Fixed (recurring) expense commands
    #[command(subcommand)]
    Fixed(FixedCommands),

    /// Reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Export, import, and clear data
    #[command(flatten)]
    Data(ExportCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TakaPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let result = match cli.command {
        None | Some(Commands::Dashboard) => handle_dashboard_command(&storage, &settings),
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&storage, &settings, cmd),
        Some(Commands::Upcoming(cmd)) => handle_upcoming_command(&storage, &settings, cmd),
        Some(Commands::Fixed(cmd)) => handle_fixed_command(&storage, &settings, cmd),
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd),
        Some(Commands::Settings(cmd)) => handle_settings_command(&paths, &mut settings, cmd),
        Some(Commands::Data(cmd)) => handle_export_command(&storage, &paths, &mut settings, cmd),
    };

    if let Err(err) = result {
        // A failing disk write should not look like a crash; the in-memory
        // operation itself succeeded.
        if err.is_storage() {
            eprintln!("Warning: changes may not have been persisted: {}", err);
            return Ok(());
        }
        return Err(err.into());
    }

    Ok(())
}
