//! Findings: one reported feature occurrence with its computed verdict.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::verdict::Verdict;

/// A zero-based (line, column) position. Columns are byte offsets within the
/// line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A half-open [start, end) range in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

/// One occurrence of a recognized feature token at a specific source location.
///
/// Created by the workspace scanner, immutable once constructed. The `id` is
/// derived deterministically from (uri, start position, token text) so that
/// re-scanning an unchanged tree yields identical ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Stable identifier for this occurrence.
    pub id: String,
    /// File the occurrence was found in.
    pub uri: String,
    /// Location of the matched token.
    pub range: TextRange,
    /// Identifier of the owning feature.
    pub feature_id: String,
    /// Display name of the owning feature.
    pub feature_name: String,
    /// Verdict against the scan's target cohort.
    pub verdict: Verdict,
    /// The literal token text that matched.
    pub token_text: String,
    /// Trimmed text of the source line, for display.
    pub line_text: String,
}

impl Finding {
    /// Total order over findings:
    /// file path, then verdict severity descending, then start line, then
    /// start column, then feature display name.
    ///
    /// The final tiebreak makes the order total even if two distinct features
    /// ever land on the identical location.
    pub fn total_cmp(a: &Finding, b: &Finding) -> Ordering {
        a.uri
            .cmp(&b.uri)
            .then_with(|| b.verdict.severity().cmp(&a.verdict.severity()))
            .then_with(|| a.range.start.line.cmp(&b.range.start.line))
            .then_with(|| a.range.start.column.cmp(&b.range.start.column))
            .then_with(|| a.feature_name.cmp(&b.feature_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(uri: &str, verdict: Verdict, line: u32, column: u32, name: &str) -> Finding {
        Finding {
            id: String::new(),
            uri: uri.to_string(),
            range: TextRange {
                start: Position::new(line, column),
                end: Position::new(line, column + 1),
            },
            feature_id: name.to_lowercase(),
            feature_name: name.to_string(),
            verdict,
            token_text: String::new(),
            line_text: String::new(),
        }
    }

    #[test]
    fn groups_by_file_before_severity() {
        let a = finding("a.css", Verdict::Safe, 9, 0, "x");
        let b = finding("b.js", Verdict::Blocked, 0, 0, "y");
        assert_eq!(Finding::total_cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn worst_verdict_sorts_first_within_a_file() {
        let safe = finding("a.js", Verdict::Safe, 0, 0, "x");
        let blocked = finding("a.js", Verdict::Blocked, 5, 0, "y");
        assert_eq!(Finding::total_cmp(&blocked, &safe), Ordering::Less);
    }

    #[test]
    fn position_breaks_ties_within_a_severity() {
        let early = finding("a.js", Verdict::Warning, 1, 2, "x");
        let late = finding("a.js", Verdict::Warning, 1, 8, "x");
        assert_eq!(Finding::total_cmp(&early, &late), Ordering::Less);
    }

    #[test]
    fn feature_name_is_the_final_tiebreak() {
        let a = finding("a.js", Verdict::Warning, 1, 2, "Alpha");
        let b = finding("a.js", Verdict::Warning, 1, 2, "Beta");
        assert_eq!(Finding::total_cmp(&a, &b), Ordering::Less);
    }
}
