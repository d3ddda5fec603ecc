//! Export, import, and clear CLI commands

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::config::{Settings, TakaPaths};
use crate::error::{TakaError, TakaResult};
use crate::export::{
    export_full_json, export_full_yaml, export_transactions_csv, import_from_json,
    import_from_yaml,
};
use crate::storage::Storage;

use super::confirm;

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Full snapshot as JSON (the restore format)
    Json,
    /// Full snapshot as YAML
    Yaml,
    /// Transactions only, as CSV
    Csv,
}

/// Data backup subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export data to a file (or stdout)
    Export {
        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },
    /// Import a backup file, replacing every collection it contains
    Import {
        /// Backup file (JSON or YAML export)
        file: PathBuf,
        /// Skip confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Delete all transactions, upcoming expenses, and fixed expenses
    Clear {
        /// Skip confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Handle a data backup command
pub fn handle_export_command(
    storage: &Storage,
    paths: &TakaPaths,
    settings: &mut Settings,
    cmd: ExportCommands,
) -> TakaResult<()> {
    match cmd {
        ExportCommands::Export { output, format } => export_data(storage, settings, output, format),
        ExportCommands::Import { file, yes } => import_data(storage, paths, settings, file, yes),
        ExportCommands::Clear { yes } => clear_data(storage, yes),
    }
}

fn export_data(
    storage: &Storage,
    settings: &Settings,
    output: Option<PathBuf>,
    format: ExportFormat,
) -> TakaResult<()> {
    let mut buffer = Vec::new();

    match format {
        ExportFormat::Json => export_full_json(storage, settings, &mut buffer, true)?,
        ExportFormat::Yaml => export_full_yaml(storage, settings, &mut buffer)?,
        ExportFormat::Csv => {
            let transactions = storage.transactions.get_all()?;
            export_transactions_csv(&transactions, &mut buffer)?;
        }
    }

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                TakaError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(&buffer)
                .and_then(|_| writer.flush())
                .map_err(|e| TakaError::Export(e.to_string()))?;
            println!("Exported to {}", path.display());
        }
        None => {
            let text = String::from_utf8(buffer).map_err(|e| TakaError::Export(e.to_string()))?;
            print!("{}", text);
        }
    }

    Ok(())
}

fn import_data(
    storage: &Storage,
    paths: &TakaPaths,
    settings: &mut Settings,
    file: PathBuf,
    yes: bool,
) -> TakaResult<()> {
    let contents = std::fs::read_to_string(&file)
        .map_err(|e| TakaError::Import(format!("Failed to read {}: {}", file.display(), e)))?;

    let is_yaml = matches!(
        file.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let import = if is_yaml {
        import_from_yaml(&contents)?
    } else {
        import_from_json(&contents)?
    };

    let description = import.describe();
    if !yes
        && !confirm(&format!(
            "Importing will replace: {}. Continue?",
            description
        ))
    {
        println!("Cancelled.");
        return Ok(());
    }

    if let Some(imported_settings) = import.apply(storage)? {
        *settings = imported_settings;
        settings.save(paths)?;
    }

    println!("Imported {}.", description);
    Ok(())
}

fn clear_data(storage: &Storage, yes: bool) -> TakaResult<()> {
    if !yes && !confirm("Delete ALL transactions, upcoming and fixed expenses?") {
        println!("Cancelled.");
        return Ok(());
    }

    storage.transactions.replace_all(Vec::new())?;
    storage.upcoming.replace_all(Vec::new())?;
    storage.fixed.replace_all(Vec::new())?;
    storage.save_all()?;

    println!("All data cleared.");
    Ok(())
}
