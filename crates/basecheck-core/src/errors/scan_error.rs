//! Scan errors.
//!
//! Per-file variants are recovered locally: the file is skipped and the scan
//! continues. Only `Discovery` aborts a scan.

/// Errors raised while discovering or reading files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Binary content in {path}")]
    Binary { path: String },

    #[error("File too large: {path} ({size} bytes)")]
    TooLarge { path: String, size: u64 },

    #[error("File discovery failed: {0}")]
    Discovery(String),
}
