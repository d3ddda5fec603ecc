//! YAML export
//!
//! A human-readable variant of the full snapshot, for people who want to
//! inspect their backup in an editor.

use std::io::Write;

use crate::config::Settings;
use crate::error::{TakaError, TakaResult};
use crate::export::json::{FullExport, ImportData};
use crate::storage::Storage;

/// Write the full snapshot as YAML with a header comment
pub fn export_full_yaml<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
) -> TakaResult<()> {
    let export = FullExport::from_storage(storage, settings)?;

    writeln!(writer, "# Taka full data export")
        .map_err(|e| TakaError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TakaError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TakaError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TakaError::Export(e.to_string()))?;

    Ok(())
}

/// Parse an import payload from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> TakaResult<ImportData> {
    serde_yaml::from_str(yaml_str).map_err(|e| TakaError::Import(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TakaPaths;
    use crate::models::{Money, Transaction, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TakaPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_yaml_export_header_and_data() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .transactions
            .insert(Transaction::new(
                TransactionKind::Expense,
                Money::from_minor(5000),
                "food",
                NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            ))
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&storage, &Settings::default(), &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.contains("# Taka full data export"));
        assert!(yaml.contains("transactions:"));
        assert!(yaml.contains("category: food"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let (_temp_dir, storage) = create_test_storage();
        let txn = Transaction::new(
            TransactionKind::Income,
            Money::from_minor(250000),
            "salary",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );
        storage.transactions.insert(txn.clone()).unwrap();

        let mut output = Vec::new();
        export_full_yaml(&storage, &Settings::default(), &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        let import = import_from_yaml(&yaml).unwrap();
        let transactions = import.transactions.unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id, txn.id);
    }
}
