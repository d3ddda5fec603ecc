//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary data directory via
//! the TAKA_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn taka(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taka").unwrap();
    cmd.env("TAKA_DATA_DIR", dir.path());
    cmd
}

#[test]
fn add_and_list_transaction() {
    let dir = TempDir::new().unwrap();

    taka(&dir)
        .args([
            "txn",
            "add",
            "expense",
            "150.50",
            "food",
            "--date",
            "2024-06-15",
            "--description",
            "groceries",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added transaction"));

    taka(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("150.50"))
        .stdout(predicate::str::contains("groceries"));
}

#[test]
fn invalid_category_is_rejected() {
    let dir = TempDir::new().unwrap();

    taka(&dir)
        .args(["txn", "add", "income", "100", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid income category"));

    // Nothing was stored
    taka(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found"));
}

#[test]
fn invalid_date_is_rejected() {
    let dir = TempDir::new().unwrap();

    taka(&dir)
        .args([
            "txn", "add", "expense", "100", "food", "--date", "15-06-2024",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn dashboard_renders() {
    let dir = TempDir::new().unwrap();

    taka(&dir)
        .args(["txn", "add", "income", "2500", "salary"])
        .assert()
        .success();

    taka(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:"))
        .stdout(predicate::str::contains("Health:"))
        .stdout(predicate::str::contains("Recent transactions"));
}

#[test]
fn fixed_generate_is_idempotent() {
    let dir = TempDir::new().unwrap();

    taka(&dir)
        .args([
            "fixed",
            "add",
            "Rent",
            "15000",
            "rent",
            "--due-day",
            "31",
            "--start",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added fixed expense"));

    // Materialize for February 2024; due day 31 clamps to the 29th
    taka(&dir)
        .args(["fixed", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"));

    let output = taka(&dir)
        .args(["fixed", "list"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout
        .lines()
        .find(|l| l.contains("Rent"))
        .and_then(|l| l.split_whitespace().last())
        .unwrap()
        .to_string();

    taka(&dir)
        .args(["fixed", "generate", &id, "--month", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-02-29"));

    taka(&dir)
        .args(["fixed", "generate", &id, "--month", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already generated"));

    taka(&dir)
        .args(["upcoming", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"));
}

#[test]
fn upcoming_mark_paid() {
    let dir = TempDir::new().unwrap();

    taka(&dir)
        .args([
            "upcoming",
            "add",
            "Electricity",
            "1200",
            "utilities",
            "--due",
            "2030-01-15",
        ])
        .assert()
        .success();

    let output = taka(&dir).args(["upcoming", "list"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("days left"));
    assert!(stdout.contains("Pending:"));

    let id = stdout
        .split_whitespace()
        .find(|token| token.starts_with("upc-"))
        .unwrap()
        .to_string();

    taka(&dir)
        .args(["upcoming", "paid", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked 'Electricity' as paid"));

    // Marking again is a no-op that still succeeds
    taka(&dir)
        .args(["upcoming", "paid", &id])
        .assert()
        .success();

    taka(&dir)
        .args(["upcoming", "list", "--paid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Electricity"));
}

#[test]
fn export_and_import_round_trip() {
    let dir = TempDir::new().unwrap();

    taka(&dir)
        .args(["txn", "add", "income", "2500", "salary", "--date", "2024-06-01"])
        .assert()
        .success();

    let backup = dir.path().join("backup.json");
    taka(&dir)
        .args(["export", "--output", backup.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let contents = std::fs::read_to_string(&backup).unwrap();
    assert!(contents.contains("\"transactions\""));
    assert!(contents.contains("\"upcomingExpenses\""));
    assert!(contents.contains("\"fixedExpenses\""));
    assert!(contents.contains("\"settings\""));
    assert!(contents.contains("\"exportedAt\""));

    // Import into a fresh data directory
    let fresh = TempDir::new().unwrap();
    taka(&fresh)
        .args(["import", backup.to_str().unwrap(), "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported"));

    taka(&fresh)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2500.00"));
}

#[test]
fn export_csv_has_header() {
    let dir = TempDir::new().unwrap();

    taka(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "id,type,amount,category,source,date,description,createdAt",
        ));
}

#[test]
fn settings_set_and_show() {
    let dir = TempDir::new().unwrap();

    taka(&dir)
        .args([
            "settings",
            "set",
            "--currency",
            "usd",
            "--language",
            "en",
            "--date-format",
            "yyyy-mm-dd",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved"));

    taka(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency:    USD"))
        .stdout(predicate::str::contains("Language:    en"))
        .stdout(predicate::str::contains("Date format: yyyy-mm-dd"));
}

#[test]
fn clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();

    taka(&dir)
        .args(["txn", "add", "expense", "100", "food"])
        .assert()
        .success();

    // Empty stdin means the y/N prompt falls through to "no"
    taka(&dir)
        .arg("clear")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));

    taka(&dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared"));

    taka(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found"));
}

#[test]
fn report_commands_render() {
    let dir = TempDir::new().unwrap();

    taka(&dir)
        .args(["settings", "set", "--language", "en"])
        .assert()
        .success();

    taka(&dir)
        .args(["txn", "add", "income", "2500", "salary", "--date", "2024-06-01"])
        .assert()
        .success();
    taka(&dir)
        .args(["txn", "add", "expense", "800", "rent", "--date", "2024-06-05"])
        .assert()
        .success();

    taka(&dir)
        .args(["report", "monthly", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly summary 2024"));

    taka(&dir)
        .args(["report", "yearly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024"));

    taka(&dir)
        .args(["report", "category", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("100.0%"));
}
