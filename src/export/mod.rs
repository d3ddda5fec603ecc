//! Export and import
//!
//! Full-snapshot backup (JSON/YAML) and tabular CSV export. Import is a
//! destructive per-key replace, confirmed by the caller.

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{export_full_json, import_from_json, FullExport, ImportData};
pub use yaml::{export_full_yaml, import_from_yaml};
