//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section and field has a default, so an empty (or absent) file
//! is a valid configuration.

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Seed catalog settings
    pub seed: FileSeedConfig,
    /// Report output settings
    pub output: FileOutputConfig,
    /// Audit log settings
    pub audit: FileAuditConfig,
}

/// `[seed]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSeedConfig {
    /// Path of the seed catalog JSON file.
    pub path: String,
}

impl Default for FileSeedConfig {
    fn default() -> Self {
        Self {
            path: "data/seed.json".to_string(),
        }
    }
}

/// Report format selector in the `[output]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    /// Full report with per-slug detail
    Full,
    /// One-line result plus warnings
    #[default]
    Summary,
    /// Machine-readable JSON report
    Json,
}

/// `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Default report format when `--output` is not given.
    pub format: FileOutputFormat,
}

/// `[audit]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuditConfig {
    /// JSONL audit log path. Unset disables auditing.
    pub log_path: Option<String>,
}
