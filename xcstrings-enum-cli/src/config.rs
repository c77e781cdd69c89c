//! Optional TOML config file.
//!
//! ```toml
//! xcstrings-path = "App/Localizable.xcstrings"
//! output-filename = "App/Generated/XcodeStringKey.swift"
//! enum-name = "XcodeStringKey"
//! enum-typealias = "XCS"
//! extra-keywords = ["key", "string"]
//! sort-keys = true
//! ```

use std::path::Path;

use serde::Deserialize;

/// Settings read from a config file. Every field is optional; command-line
/// flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub xcstrings_path: Option<String>,
    pub output_filename: Option<String>,
    pub enum_name: Option<String>,
    pub enum_typealias: Option<String>,
    pub no_typealias: Option<bool>,
    pub keywords: Option<Vec<String>>,
    pub extra_keywords: Option<Vec<String>>,
    pub empty_key_sentinel: Option<String>,
    pub no_sentinel: Option<bool>,
    pub table_name: Option<String>,
    pub sort_keys: Option<bool>,
    pub skip_stale: Option<bool>,
}

/// Parse a config file from TOML text
pub fn parse_config(text: &str) -> Result<FileConfig, String> {
    toml::from_str(text).map_err(|e| format!("Invalid config: {}", e))
}

/// Read and parse a config file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FileConfig, String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
    parse_config(&text)
}
