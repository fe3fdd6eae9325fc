//! Web-platform feature metadata and per-engine support tables.

use serde::{Deserialize, Serialize};

use super::version::BrowserVersion;

/// Minimum supporting version per browser engine.
///
/// `None` means the engine does not support the feature at all, not "unknown":
/// the bundled dataset is authoritative for the engines it covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportTable {
    pub chrome: Option<BrowserVersion>,
    pub edge: Option<BrowserVersion>,
    pub firefox: Option<BrowserVersion>,
    pub safari: Option<BrowserVersion>,
}

impl SupportTable {
    /// Iterate over (engine name, minimum version) entries.
    pub fn entries(&self) -> [(&'static str, Option<BrowserVersion>); 4] {
        [
            ("chrome", self.chrome),
            ("edge", self.edge),
            ("firefox", self.firefox),
            ("safari", self.safari),
        ]
    }
}

/// How widely a feature is supported across the reference browser set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineStatus {
    /// Supported by all reference engines for an extended period.
    Widely,
    /// Recently became supported by all reference engines.
    Newly,
    /// Missing from at least one reference engine.
    Limited,
}

/// A web-platform feature as described by the bundled dataset.
///
/// Immutable after catalog load; looked up by `id` and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    /// Stable identifier, e.g. `promise-any`.
    pub id: String,
    /// Display name, e.g. `Promise.any()`.
    pub name: String,
    /// Baseline maturity tag.
    pub baseline: BaselineStatus,
    /// Minimum supporting version per engine.
    pub support: SupportTable,
    /// Grouping tag, e.g. `css` or `javascript`.
    pub group: String,
    /// Documentation link for the feature.
    pub docs_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_table_deserializes_with_gaps() {
        let json = r#"{"chrome": "95", "edge": "95"}"#;
        let table: SupportTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.chrome, Some(BrowserVersion::new(95, 0)));
        assert_eq!(table.firefox, None);
        assert_eq!(table.safari, None);
    }

    #[test]
    fn baseline_status_uses_lowercase_tags() {
        let status: BaselineStatus = serde_json::from_str(r#""widely""#).unwrap();
        assert_eq!(status, BaselineStatus::Widely);
    }
}
