//! Scan configuration.

use serde::{Deserialize, Serialize};

/// Configuration for file discovery and reading.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum file size to read, in bytes. Default: 1 MiB.
    pub max_file_size: Option<u64>,
    /// Extra gitignore-style patterns beyond the fixed exclusion set.
    pub extra_ignore: Vec<String>,
    /// Scan JS-family files. Default: true.
    pub include_js: Option<bool>,
    /// Scan CSS-family files. Default: true.
    pub include_css: Option<bool>,
}

impl ScanConfig {
    /// Effective maximum file size, defaulting to 1 MiB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(1_048_576)
    }

    pub fn effective_include_js(&self) -> bool {
        self.include_js.unwrap_or(true)
    }

    pub fn effective_include_css(&self) -> bool {
        self.include_css.unwrap_or(true)
    }
}
