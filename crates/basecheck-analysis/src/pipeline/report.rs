//! Scan reports: the ordered finding list plus bookkeeping.

use std::time::Duration;

use basecheck_core::model::Finding;
use serde::{Deserialize, Serialize};

/// Statistics about one scan pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    /// Candidate files handed to the scanner.
    pub total_files: usize,
    /// Files actually scanned.
    pub files_scanned: usize,
    /// Files skipped (unreadable, oversize, binary).
    pub files_skipped: usize,
    /// Whether the scan was cancelled before completing.
    pub cancelled: bool,
    /// Scan duration.
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

/// Result of a scan pass: findings in their total order, plus stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub findings: Vec<Finding>,
    pub stats: ScanStats,
}

// Serialize Duration as milliseconds.
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
