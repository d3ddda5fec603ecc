//! JSON export and import
//!
//! The export file is a full snapshot of all four collections:
//! `{transactions, upcomingExpenses, fixedExpenses, settings, exportedAt}`.
//! Import accepts the same shape; each top-level key that is present
//! replaces the corresponding collection wholesale. The caller confirms
//! before invoking — import itself is unconditional.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::config::Settings;
use crate::error::{TakaError, TakaResult};
use crate::models::{FixedExpense, Transaction, UpcomingExpense};
use crate::storage::Storage;

/// Full snapshot export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullExport {
    /// All transactions
    pub transactions: Vec<Transaction>,

    /// All upcoming expenses
    pub upcoming_expenses: Vec<UpcomingExpense>,

    /// All fixed expenses
    pub fixed_expenses: Vec<FixedExpense>,

    /// User settings
    pub settings: Settings,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,
}

impl FullExport {
    /// Create a full export from the current state
    pub fn from_storage(storage: &Storage, settings: &Settings) -> TakaResult<Self> {
        Ok(Self {
            transactions: storage.transactions.get_all()?,
            upcoming_expenses: storage.upcoming.get_all()?,
            fixed_expenses: storage.fixed.get_all()?,
            settings: settings.clone(),
            exported_at: Utc::now(),
        })
    }
}

/// Import payload: any key that is present replaces the corresponding
/// collection; absent keys leave state untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportData {
    #[serde(default)]
    pub transactions: Option<Vec<Transaction>>,
    #[serde(default)]
    pub upcoming_expenses: Option<Vec<UpcomingExpense>>,
    #[serde(default)]
    pub fixed_expenses: Option<Vec<FixedExpense>>,
    #[serde(default)]
    pub settings: Option<Settings>,
}

impl ImportData {
    /// Apply the import: destructive replace of every collection present,
    /// written through to disk
    ///
    /// Returns the imported settings (if any) for the caller to persist.
    pub fn apply(self, storage: &Storage) -> TakaResult<Option<Settings>> {
        if let Some(transactions) = self.transactions {
            storage.transactions.replace_all(transactions)?;
            storage.transactions.save()?;
        }
        if let Some(upcoming) = self.upcoming_expenses {
            storage.upcoming.replace_all(upcoming)?;
            storage.upcoming.save()?;
        }
        if let Some(fixed) = self.fixed_expenses {
            storage.fixed.replace_all(fixed)?;
            storage.fixed.save()?;
        }

        Ok(self.settings)
    }

    /// What the import would touch, for the confirmation prompt
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(t) = &self.transactions {
            parts.push(format!("{} transactions", t.len()));
        }
        if let Some(u) = &self.upcoming_expenses {
            parts.push(format!("{} upcoming expenses", u.len()));
        }
        if let Some(f) = &self.fixed_expenses {
            parts.push(format!("{} fixed expenses", f.len()));
        }
        if self.settings.is_some() {
            parts.push("settings".to_string());
        }
        if parts.is_empty() {
            "nothing".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Write the full snapshot as JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
    pretty: bool,
) -> TakaResult<()> {
    let export = FullExport::from_storage(storage, settings)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| TakaError::Export(e.to_string()))?;

    Ok(())
}

/// Parse an import payload from a JSON export
pub fn import_from_json(json_str: &str) -> TakaResult<ImportData> {
    serde_json::from_str(json_str).map_err(|e| TakaError::Import(e.to_string()))
}
