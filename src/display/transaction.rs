//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::display::labels;
use crate::models::{Transaction, TransactionKind};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format a list of transactions as a table
pub fn format_transaction_list(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| {
            let sign = match txn.kind {
                TransactionKind::Income => "+",
                TransactionKind::Expense | TransactionKind::Saving => "-",
            };
            TransactionRow {
                date: labels::format_date(txn.date, settings),
                kind: labels::kind_label(settings.language, txn.kind).to_string(),
                category: labels::category_label(settings.language, &txn.category).to_string(),
                amount: format!("{}{}", sign, labels::format_amount(txn.amount, settings)),
                description: txn.description.clone(),
                id: txn.id.to_string(),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", labels::format_date(txn.date, settings)));
    output.push_str(&format!(
        "Type:        {}\n",
        labels::kind_label(settings.language, txn.kind)
    ));
    output.push_str(&format!(
        "Category:    {}\n",
        labels::category_label(settings.language, &txn.category)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        labels::format_amount(txn.amount, settings)
    ));

    if !txn.source.is_empty() {
        output.push_str(&format!("Source:      {}\n", txn.source));
    }
    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        let mut txn = Transaction::new(
            TransactionKind::Expense,
            Money::from_minor(5000),
            "food",
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        );
        txn.description = "groceries".to_string();
        txn
    }

    fn english() -> Settings {
        Settings {
            language: Language::En,
            ..Settings::default()
        }
    }

    #[test]
    fn test_empty_list() {
        let output = format_transaction_list(&[], &english());
        assert!(output.contains("No transactions found"));
    }

    #[test]
    fn test_list_contains_fields() {
        let output = format_transaction_list(&[sample()], &english());
        assert!(output.contains("Food"));
        assert!(output.contains("-৳50.00"));
        assert!(output.contains("15-06-2024"));
        assert!(output.contains("groceries"));
    }

    #[test]
    fn test_income_shows_plus_sign() {
        let txn = Transaction::new(
            TransactionKind::Income,
            Money::from_minor(250000),
            "salary",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );
        let output = format_transaction_list(&[txn], &english());
        assert!(output.contains("+৳2500.00"));
    }

    #[test]
    fn test_details() {
        let output = format_transaction_details(&sample(), &english());
        assert!(output.contains("Category:    Food"));
        assert!(output.contains("Description: groceries"));
        assert!(!output.contains("Source:"));
    }
}
