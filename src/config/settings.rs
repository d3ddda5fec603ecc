//! User settings for Taka
//!
//! A single settings object loaded at startup and written back on explicit
//! save calls. Field names match the persisted shape of earlier versions so
//! imported backups apply cleanly.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::TakaPaths;
use crate::error::TakaError;

/// Date display format preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DateFormat {
    /// e.g. 15-06-2024
    #[default]
    #[serde(rename = "dd-mm-yyyy")]
    DayMonthYear,
    /// e.g. 06-15-2024
    #[serde(rename = "mm-dd-yyyy")]
    MonthDayYear,
    /// e.g. 2024-06-15
    #[serde(rename = "yyyy-mm-dd")]
    YearMonthDay,
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DayMonthYear => write!(f, "dd-mm-yyyy"),
            Self::MonthDayYear => write!(f, "mm-dd-yyyy"),
            Self::YearMonthDay => write!(f, "yyyy-mm-dd"),
        }
    }
}

impl std::str::FromStr for DateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dd-mm-yyyy" => Ok(Self::DayMonthYear),
            "mm-dd-yyyy" => Ok(Self::MonthDayYear),
            "yyyy-mm-dd" => Ok(Self::YearMonthDay),
            other => Err(format!("unknown date format: {}", other)),
        }
    }
}

/// Display language preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Bangla
    #[default]
    Bn,
    /// English
    En,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bn => write!(f, "bn"),
            Self::En => write!(f, "en"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bn" => Ok(Self::Bn),
            "en" => Ok(Self::En),
            other => Err(format!("unknown language: {}", other)),
        }
    }
}

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// ISO-like currency code, e.g. "BDT"
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Date display format
    #[serde(default)]
    pub date_format: DateFormat,

    /// Dark mode preference (round-trips through export/import; has no
    /// visual effect in the terminal)
    #[serde(default)]
    pub dark_mode: bool,

    /// Display language
    #[serde(default)]
    pub language: Language,
}

fn default_currency() -> String {
    "BDT".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            date_format: DateFormat::default(),
            dark_mode: false,
            language: Language::default(),
        }
    }
}

/// A partial settings update; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub currency: Option<String>,
    pub date_format: Option<DateFormat>,
    pub dark_mode: Option<bool>,
    pub language: Option<Language>,
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    /// or cannot be parsed (corrupt settings fall back to defaults rather
    /// than blocking startup).
    pub fn load_or_create(paths: &TakaPaths) -> Result<Self, TakaError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TakaError::Io(format!("Failed to read settings file: {}", e)))?;

        Ok(serde_json::from_str(&contents).unwrap_or_default())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TakaPaths) -> Result<(), TakaError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TakaError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| TakaError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(currency) = update.currency {
            self.currency = currency;
        }
        if let Some(date_format) = update.date_format {
            self.date_format = date_format;
        }
        if let Some(dark_mode) = update.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(language) = update.language {
            self.language = language;
        }
    }
}
