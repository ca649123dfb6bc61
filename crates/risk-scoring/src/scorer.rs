//! Risk Score Calculation

/// Ceiling of the risk percentage
const MAX_RISK: u32 = 100;

/// Points per severity step
const SEVERITY_WEIGHT: u32 = 10;
/// Bonus for patients older than `AGE_THRESHOLD`
const AGE_BONUS: u32 = 15;
const AGE_THRESHOLD: u32 = 50;
/// Bonus once severity reaches `SEVERE_THRESHOLD`
const SEVERE_BONUS: u32 = 20;
const SEVERE_THRESHOLD: u32 = 7;

/// Compute the risk percentage for a severity (1-10) and age (1-100).
///
/// `severity * 10`, plus 15 when older than 50, plus 20 when severity is 7
/// or more, capped at 100. Inputs are not validated here; callers keep them
/// in range.
pub fn score(severity: u32, age: u32) -> u32 {
    let mut risk = severity.saturating_mul(SEVERITY_WEIGHT);

    if age > AGE_THRESHOLD {
        risk = risk.saturating_add(AGE_BONUS);
    }
    if severity >= SEVERE_THRESHOLD {
        risk = risk.saturating_add(SEVERE_BONUS);
    }

    risk.min(MAX_RISK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_scores() {
        assert_eq!(score(5, 30), 50);
        assert_eq!(score(7, 60), 100); // 70 + 15 + 20, capped
        assert_eq!(score(1, 10), 10);
        assert_eq!(score(9, 10), 100); // 90 + 20, capped
    }

    #[test]
    fn test_age_threshold_is_exclusive() {
        assert_eq!(score(3, 50), 30);
        assert_eq!(score(3, 51), 45);
    }

    #[test]
    fn test_severe_threshold_is_inclusive() {
        assert_eq!(score(6, 20), 60);
        assert_eq!(score(7, 20), 90);
        assert_eq!(score(6, 70), 75);
    }

    #[test]
    fn test_out_of_domain_saturates() {
        assert_eq!(score(u32::MAX, u32::MAX), MAX_RISK);
        assert_eq!(score(0, 20), 0);
    }

    proptest! {
        #[test]
        fn prop_score_in_range(severity in 1u32..=10, age in 1u32..=100) {
            let risk = score(severity, age);
            prop_assert!((10..=100).contains(&risk));
        }

        #[test]
        fn prop_monotonic_in_severity(severity in 1u32..10, age in 1u32..=100) {
            prop_assert!(score(severity, age) <= score(severity + 1, age));
        }

        #[test]
        fn prop_monotonic_in_age(severity in 1u32..=10, age in 1u32..100) {
            prop_assert!(score(severity, age) <= score(severity, age + 1));
        }
    }
}
