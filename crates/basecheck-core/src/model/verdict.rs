//! Three-way verdict for a feature occurrence against a target cohort.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The outcome of scoring a feature's support table against a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Every target engine supports the feature at or below the cohort floor.
    Safe,
    /// Supported everywhere, but some engine requires a newer version than
    /// the cohort floor guarantees.
    Warning,
    /// At least one target engine does not support the feature at all.
    Blocked,
}

impl Verdict {
    /// Severity rank used for ordering: blocked > warning > safe.
    pub fn severity(self) -> u8 {
        match self {
            Verdict::Safe => 0,
            Verdict::Warning => 1,
            Verdict::Blocked => 2,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Safe => "safe",
            Verdict::Warning => "warning",
            Verdict::Blocked => "blocked",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_blocked_first() {
        assert!(Verdict::Blocked.severity() > Verdict::Warning.severity());
        assert!(Verdict::Warning.severity() > Verdict::Safe.severity());
    }
}
