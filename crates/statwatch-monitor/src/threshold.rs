//! Threshold comparison.
//!
//! Both forms test the critical limit first, then the warning limit, with
//! inclusive comparison. Inverted pairs (warning above critical) are not
//! rejected; the warning branch simply becomes unreachable.

use crate::severity::Severity;

/// Compare a raw value to warning and critical limits.
pub fn evaluate(value: i64, warning: i64, critical: i64) -> Severity {
    if value >= critical {
        Severity::Critical
    } else if value >= warning {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

/// Compare `value` as a percentage of `capacity` to warning and critical
/// limits expressed in percent.
///
/// `capacity` must be greater than zero. A zero capacity is not checked
/// here: the division yields an infinite or NaN ratio which saturates on
/// conversion, so the call never panics but the result is meaningless.
pub fn evaluate_ratio(value: i64, capacity: i64, warning: i64, critical: i64) -> Severity {
    evaluate(ratio_percent(value, capacity), warning, critical)
}

/// `value / capacity * 100`, rounded to the nearest integer with ties
/// going up (12.5 → 13, -12.5 → -12).
pub fn ratio_percent(value: i64, capacity: i64) -> i64 {
    (value as f64 / capacity as f64 * 100.0 + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_levels() {
        assert_eq!(evaluate(5, 10, 20), Severity::Ok);
        assert_eq!(evaluate(15, 10, 20), Severity::Warning);
        assert_eq!(evaluate(25, 10, 20), Severity::Critical);
    }

    #[test]
    fn test_evaluate_boundaries_are_inclusive() {
        assert_eq!(evaluate(20, 10, 20), Severity::Critical);
        assert_eq!(evaluate(19, 10, 20), Severity::Warning);
        assert_eq!(evaluate(10, 10, 20), Severity::Warning);
        assert_eq!(evaluate(9, 10, 20), Severity::Ok);
    }

    #[test]
    fn test_evaluate_critical_minus_one_below_warning() {
        assert_eq!(evaluate(19, 19, 20), Severity::Warning);
        assert_eq!(evaluate(19, 25, 20), Severity::Ok);
    }

    #[test]
    fn test_evaluate_is_monotonic() {
        let order = |s: Severity| s.code();
        for (warning, critical) in [(10, 20), (0, 0), (5, 5), (30, 10)] {
            let mut previous = order(evaluate(-5, warning, critical));
            for value in -5..50 {
                let current = order(evaluate(value, warning, critical));
                assert!(current >= previous, "value {} lowered severity", value);
                previous = current;
            }
        }
    }

    #[test]
    fn test_inverted_thresholds_skip_warning() {
        // warning 30, critical 10: anything reaching warning is already critical
        assert_eq!(evaluate(5, 30, 10), Severity::Ok);
        assert_eq!(evaluate(10, 30, 10), Severity::Critical);
        assert_eq!(evaluate(35, 30, 10), Severity::Critical);
    }

    #[test]
    fn test_evaluate_ratio() {
        assert_eq!(evaluate_ratio(50, 200, 20, 30), Severity::Warning);
        assert_eq!(evaluate_ratio(60, 200, 20, 30), Severity::Critical);
        assert_eq!(evaluate_ratio(10, 200, 20, 30), Severity::Ok);
    }

    #[test]
    fn test_ratio_percent() {
        assert_eq!(ratio_percent(50, 200), 25);
        assert_eq!(ratio_percent(15, 50), 30);
        assert_eq!(ratio_percent(1, 3), 33);
        assert_eq!(ratio_percent(2, 3), 67);
        assert_eq!(ratio_percent(0, 10), 0);
    }

    #[test]
    fn test_ratio_percent_rounds_half_up() {
        // 1/8 = 12.5%, 5/40 = 12.5%, 1/200 = 0.5%
        assert_eq!(ratio_percent(1, 8), 13);
        assert_eq!(ratio_percent(5, 40), 13);
        assert_eq!(ratio_percent(1, 200), 1);
        // ties on the negative side go towards +inf
        assert_eq!(ratio_percent(-1, 8), -12);
    }

    #[test]
    fn test_ratio_rounding_changes_level() {
        // 12.5% rounds to 13 and reaches a warning limit of 13
        assert_eq!(evaluate_ratio(1, 8, 13, 50), Severity::Warning);
        assert_eq!(evaluate_ratio(1, 9, 12, 50), Severity::Ok);
    }

    #[test]
    fn test_ratio_zero_capacity_does_not_panic() {
        let _ = evaluate_ratio(5, 0, 80, 90);
        let _ = evaluate_ratio(0, 0, 80, 90);
    }
}
