//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::TakaPaths;
pub use settings::{DateFormat, Language, Settings, SettingsUpdate};
