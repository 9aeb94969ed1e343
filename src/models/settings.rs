// Settings Model
// User preferences shared between the store and the frontend

use serde::{Deserialize, Serialize};

/// How output files are named during a batch conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileNamingMode {
    /// Keep the original filename
    Original,
    /// Use caller-supplied names
    Custom,
}

/// UI color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    System,
    Light,
    Dark,
}

/// The user's preferences
///
/// Treated as a value: replaced wholesale on every change, never mutated in
/// place. Serializes camelCase to match the frontend contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub last_output_directory: String,
    pub default_naming_mode: FileNamingMode,
    pub default_make_copies: bool,
    pub theme: Theme,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            last_output_directory: String::new(),
            default_naming_mode: FileNamingMode::Original,
            default_make_copies: true,
            theme: Theme::System,
        }
    }
}

/// Row keys used by persistence collaborators that store settings as
/// key/value pairs
pub mod setting_keys {
    pub const LAST_OUTPUT_DIR: &str = "last_output_directory";
    pub const DEFAULT_NAMING: &str = "default_naming_mode";
    pub const DEFAULT_MAKE_COPY: &str = "default_make_copies";
    pub const THEME: &str = "theme";
}
