//! Verdict scoring: support table × target cohort → safe / warning / blocked.

use basecheck_core::model::{SupportTable, Target, Verdict};

/// Score a feature's support table against a target cohort.
///
/// Pure and total: every input pair yields exactly one verdict. Monotonic in
/// support: adding an engine entry or lowering a minimum version never
/// worsens the verdict.
///
/// Rules, applied per engine against the cohort's version floor:
/// - no support entry at all → the engine blocks the feature
/// - supported, but only above the floor → part of the audience lacks it
/// - supported at or below the floor → fully available
pub fn score(support: &SupportTable, target: &Target) -> Verdict {
    let floors = &target.floors;
    let checks = [
        (support.chrome, floors.chrome),
        (support.edge, floors.edge),
        (support.firefox, floors.firefox),
        (support.safari, floors.safari),
    ];

    let mut verdict = Verdict::Safe;
    for (minimum, floor) in checks {
        match minimum {
            None => return Verdict::Blocked,
            Some(v) if v > floor => verdict = Verdict::Warning,
            Some(_) => {}
        }
    }
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use basecheck_core::model::BrowserVersion;

    fn table(chrome: Option<&str>, edge: Option<&str>, firefox: Option<&str>, safari: Option<&str>) -> SupportTable {
        let v = |s: Option<&str>| s.map(|s| s.parse::<BrowserVersion>().unwrap());
        SupportTable {
            chrome: v(chrome),
            edge: v(edge),
            firefox: v(firefox),
            safari: v(safari),
        }
    }

    #[test]
    fn fully_supported_below_floors_is_safe() {
        let support = table(Some("66"), Some("79"), Some("63"), Some("13.1"));
        assert_eq!(score(&support, &Target::enterprise()), Verdict::Safe);
        assert_eq!(score(&support, &Target::modern()), Verdict::Safe);
    }

    #[test]
    fn support_above_a_floor_is_a_warning() {
        // :has() needs Chrome 105 / Firefox 121, newer than enterprise floors.
        let support = table(Some("105"), Some("105"), Some("121"), Some("15.4"));
        assert_eq!(score(&support, &Target::enterprise()), Verdict::Warning);
    }

    #[test]
    fn missing_engine_blocks() {
        let support = table(Some("95"), Some("95"), None, None);
        assert_eq!(score(&support, &Target::modern()), Verdict::Blocked);
        assert_eq!(score(&support, &Target::enterprise()), Verdict::Blocked);
    }

    #[test]
    fn blocked_wins_over_warning() {
        // One engine missing, another above the floor.
        let support = table(Some("130"), Some("130"), None, Some("18"));
        assert_eq!(score(&support, &Target::enterprise()), Verdict::Blocked);
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let support = table(Some("114"), Some("114"), Some("121"), Some("17.4"));
        let target = Target::enterprise();
        assert_eq!(score(&support, &target), score(&support, &target));
    }

    #[test]
    fn monotonic_in_support() {
        let target = Target::enterprise();
        // Strictly improving support tables, worst to best.
        let tables = [
            table(Some("120"), Some("120"), None, None),
            table(Some("120"), Some("120"), Some("130"), Some("18")),
            table(Some("90"), Some("90"), Some("90"), Some("18")),
            table(Some("90"), Some("90"), Some("90"), Some("14")),
        ];
        let mut last = u8::MAX;
        for t in &tables {
            let severity = score(t, &target).severity();
            assert!(severity <= last, "verdict worsened as support improved");
            last = severity;
        }
    }
}
