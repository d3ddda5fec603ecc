//! Settings CLI commands

use clap::Subcommand;

use crate::config::{DateFormat, Language, Settings, SettingsUpdate, TakaPaths};
use crate::error::TakaResult;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings and storage paths
    Show,
    /// Update settings; only the given options change
    Set {
        /// Currency code, e.g. BDT, USD
        #[arg(long)]
        currency: Option<String>,
        /// Date format: dd-mm-yyyy, mm-dd-yyyy, or yyyy-mm-dd
        #[arg(long)]
        date_format: Option<DateFormat>,
        /// Display language: bn or en
        #[arg(long)]
        language: Option<Language>,
        /// Dark mode preference
        #[arg(long)]
        dark_mode: Option<bool>,
    },
}

/// Handle a settings command
pub fn handle_settings_command(
    paths: &TakaPaths,
    settings: &mut Settings,
    cmd: SettingsCommands,
) -> TakaResult<()> {
    match cmd {
        SettingsCommands::Show => {
            println!("Settings");
            println!("========");
            println!("Currency:    {}", settings.currency);
            println!("Date format: {}", settings.date_format);
            println!("Language:    {}", settings.language);
            println!("Dark mode:   {}", settings.dark_mode);
            println!();
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
        }
        SettingsCommands::Set {
            currency,
            date_format,
            language,
            dark_mode,
        } => {
            settings.apply(SettingsUpdate {
                currency: currency.map(|c| c.to_uppercase()),
                date_format,
                dark_mode,
                language,
            });
            settings.save(paths)?;
            println!("Settings saved.");
        }
    }

    Ok(())
}
