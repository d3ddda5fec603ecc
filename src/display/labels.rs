//! Display labels and formatting
//!
//! A pure lookup table keyed by `(language, key)`. Aggregation operates on
//! category keys only; every human-readable string comes from here at
//! render time.

use chrono::{Datelike, NaiveDate};

use crate::config::{DateFormat, Language, Settings};
use crate::models::{Money, TransactionKind};

/// Display label for a category key
///
/// Unknown keys fall back to the key itself, matching the behavior users
/// relied on for data imported from older versions.
pub fn category_label(language: Language, key: &str) -> &str {
    let label = match language {
        Language::Bn => match key {
            "salary" => "বেতন",
            "business" => "ব্যবসা",
            "investment" => "বিনিয়োগ",
            "food" => "খাবার",
            "transport" => "যাতায়াত",
            "rent" => "বাড়ি ভাড়া",
            "utilities" => "ইউটিলিটি বিল",
            "entertainment" => "বিনোদন",
            "healthcare" => "স্বাস্থ্য সেবা",
            "education" => "শিক্ষা",
            "emergency" => "জরুরী তহবিল",
            "vacation" => "ছুটি",
            "other" => "অন্যান্য",
            _ => "",
        },
        Language::En => match key {
            "salary" => "Salary",
            "business" => "Business",
            "investment" => "Investment",
            "food" => "Food",
            "transport" => "Transport",
            "rent" => "Rent",
            "utilities" => "Utilities",
            "entertainment" => "Entertainment",
            "healthcare" => "Healthcare",
            "education" => "Education",
            "emergency" => "Emergency Fund",
            "vacation" => "Vacation",
            "other" => "Other",
            _ => "",
        },
    };

    if label.is_empty() {
        key
    } else {
        label
    }
}

/// Display label for a transaction kind
pub fn kind_label(language: Language, kind: TransactionKind) -> &'static str {
    match (language, kind) {
        (Language::Bn, TransactionKind::Income) => "আয়",
        (Language::Bn, TransactionKind::Expense) => "খরচ",
        (Language::Bn, TransactionKind::Saving) => "সঞ্চয়",
        (Language::En, TransactionKind::Income) => "Income",
        (Language::En, TransactionKind::Expense) => "Expense",
        (Language::En, TransactionKind::Saving) => "Saving",
    }
}

/// Full month name (1-12)
pub fn month_name(language: Language, month: u32) -> &'static str {
    const BN: [&str; 12] = [
        "জানুয়ারী",
        "ফেব্রুয়ারী",
        "মার্চ",
        "এপ্রিল",
        "মে",
        "জুন",
        "জুলাই",
        "আগস্ট",
        "সেপ্টেম্বর",
        "অক্টোবর",
        "নভেম্বর",
        "ডিসেম্বর",
    ];
    const EN: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    let idx = (month.clamp(1, 12) - 1) as usize;
    match language {
        Language::Bn => BN[idx],
        Language::En => EN[idx],
    }
}

/// Short month name for table headers (1-12)
pub fn month_abbrev(language: Language, month: u32) -> &'static str {
    const BN: [&str; 12] = [
        "জানু", "ফেব্রু", "মার্চ", "এপ্রিল", "মে", "জুন", "জুলাই", "আগস্ট", "সেপ্ট", "অক্টো",
        "নভে", "ডিসে",
    ];
    const EN: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    let idx = (month.clamp(1, 12) - 1) as usize;
    match language {
        Language::Bn => BN[idx],
        Language::En => EN[idx],
    }
}

/// Symbol for a currency code; unknown codes print as "CODE "
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "BDT" => "৳",
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "INR" => "₹",
        _ => "",
    }
}

/// Format an amount with the configured currency
pub fn format_amount(amount: Money, settings: &Settings) -> String {
    let symbol = currency_symbol(&settings.currency);
    if symbol.is_empty() {
        format!("{} {}", settings.currency, amount)
    } else {
        amount.format_with_symbol(symbol)
    }
}

/// Format a date according to the configured format
pub fn format_date(date: NaiveDate, settings: &Settings) -> String {
    let (d, m, y) = (date.day(), date.month(), date.year());
    match settings.date_format {
        DateFormat::DayMonthYear => format!("{:02}-{:02}-{}", d, m, y),
        DateFormat::MonthDayYear => format!("{:02}-{:02}-{}", m, d, y),
        DateFormat::YearMonthDay => format!("{}-{:02}-{:02}", y, m, d),
    }
}
