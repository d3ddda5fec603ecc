//! CSV export of transactions
//!
//! A flat tabular view for spreadsheets. Only transactions are exported;
//! the JSON/YAML snapshot remains the restore format.

use std::io::Write;

use crate::error::{TakaError, TakaResult};
use crate::models::Transaction;

/// Write transactions as CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TakaResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "type",
            "amount",
            "category",
            "source",
            "date",
            "description",
            "createdAt",
        ])
        .map_err(|e| TakaError::Export(e.to_string()))?;

    for txn in transactions {
        csv_writer
            .write_record([
                txn.id.as_uuid().to_string(),
                txn.kind.to_string(),
                txn.amount.to_string(),
                txn.category.clone(),
                txn.source.clone(),
                txn.date.format("%Y-%m-%d").to_string(),
                txn.description.clone(),
                txn.created_at.to_rfc3339(),
            ])
            .map_err(|e| TakaError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TakaError::Export(e.to_string()))?;

    Ok(())
}
