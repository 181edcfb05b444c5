//! Short rest between consecutive shifts.
//!
//! The gap is measured start to start: the minutes between the timestamps of
//! two adjacent records of the same employee. Adjacency is positional, so the
//! caller decides the ordering (see [`ShiftGapOrdering`](crate::config::ShiftGapOrdering)).

use crate::config::ShiftGapConfig;
use crate::models::{AttendanceRecord, Rule, RuleFinding};

use super::minutes_to_hours;

/// Returns true if two adjacent records of `employee` start more than 60 and
/// less than 600 minutes apart.
///
/// # Examples
///
/// ```
/// use attendance_audit::models::AttendanceRecord;
/// use attendance_audit::rules::has_shift_gap_violation;
/// use chrono::{Duration, NaiveDate};
///
/// let first = NaiveDate::from_ymd_opt(2023, 10, 2).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let records = vec![
///     AttendanceRecord::new("Bob", first, 60, 1),
///     AttendanceRecord::new("Bob", first + Duration::hours(2), 60, 2),
/// ];
///
/// assert!(has_shift_gap_violation(&records, "Bob"));
/// ```
pub fn has_shift_gap_violation(records: &[AttendanceRecord], employee: &str) -> bool {
    detect_shift_gap(records, employee, &ShiftGapConfig::default()).is_some()
}

/// Evaluates the shift-gap rule for one employee over adjacent pairs of
/// `records`, stopping at the first pair inside the exclusive bounds.
///
/// Negative gaps (rows out of time order) fall below the lower bound and are
/// never reported. A pair where either row has no usable time is passed over.
pub fn detect_shift_gap(
    records: &[AttendanceRecord],
    employee: &str,
    config: &ShiftGapConfig,
) -> Option<RuleFinding> {
    records.windows(2).find_map(|pair| {
        let (current, next) = (&pair[0], &pair[1]);
        if !current.belongs_to(employee) || !next.belongs_to(employee) {
            return None;
        }
        let (Some(current_start), Some(next_start)) = (current.timestamp, next.timestamp) else {
            return None;
        };

        let gap_minutes = (next_start - current_start).num_minutes();
        if gap_minutes <= config.min_minutes || gap_minutes >= config.max_minutes {
            return None;
        }

        Some(RuleFinding {
            rule: Rule::ShiftGap,
            employee_name: employee.to_string(),
            evidence: serde_json::json!({
                "first_shift_start": current_start,
                "next_shift_start": next_start,
                "first_row": current.row_number,
                "next_row": next.row_number,
                "gap_minutes": gap_minutes,
                "min_minutes": config.min_minutes,
                "max_minutes": config.max_minutes,
            }),
            reasoning: format!(
                "Shift starting {} follows the shift starting {} after {} hours, between {} and {} hours",
                next_start,
                current_start,
                minutes_to_hours(gap_minutes),
                minutes_to_hours(config.min_minutes),
                minutes_to_hours(config.max_minutes)
            ),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 10, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn pair(first: &str, second: &str, gap: Duration) -> Vec<AttendanceRecord> {
        vec![
            AttendanceRecord::new(first, base(), 60, 1),
            AttendanceRecord::new(second, base() + gap, 60, 2),
        ]
    }

    #[test]
    fn test_two_hours_apart_is_flagged() {
        let records = pair("Bob", "Bob", Duration::hours(2));
        let finding = detect_shift_gap(&records, "Bob", &ShiftGapConfig::default()).unwrap();

        assert_eq!(finding.rule, Rule::ShiftGap);
        assert_eq!(finding.evidence["gap_minutes"], 120);
        assert_eq!(finding.evidence["next_row"], 2);
        assert!(finding.reasoning.contains("after 2 hours"));
    }

    #[test]
    fn test_thirty_minutes_apart_is_below_lower_bound() {
        let records = pair("Bob", "Bob", Duration::minutes(30));
        assert!(!has_shift_gap_violation(&records, "Bob"));
    }

    #[test]
    fn test_eleven_hours_apart_is_above_upper_bound() {
        let records = pair("Bob", "Bob", Duration::hours(11));
        assert!(!has_shift_gap_violation(&records, "Bob"));
    }

    #[test]
    fn test_bounds_are_exclusive() {
        assert!(!has_shift_gap_violation(&pair("Bob", "Bob", Duration::minutes(60)), "Bob"));
        assert!(!has_shift_gap_violation(&pair("Bob", "Bob", Duration::minutes(600)), "Bob"));
        assert!(has_shift_gap_violation(&pair("Bob", "Bob", Duration::minutes(61)), "Bob"));
        assert!(has_shift_gap_violation(&pair("Bob", "Bob", Duration::minutes(599)), "Bob"));
    }

    #[test]
    fn test_partial_minutes_are_truncated() {
        // 60 minutes 59 seconds is still a 60 minute gap.
        let records = pair("Bob", "Bob", Duration::seconds(3659));
        assert!(!has_shift_gap_violation(&records, "Bob"));
    }

    #[test]
    fn test_negative_gap_is_ignored() {
        let records = pair("Bob", "Bob", Duration::hours(-2));
        assert!(!has_shift_gap_violation(&records, "Bob"));
    }

    #[test]
    fn test_pairs_must_both_belong_to_employee() {
        let records = vec![
            AttendanceRecord::new("Bob", base(), 60, 1),
            AttendanceRecord::new("Eve", base() + Duration::hours(1), 60, 2),
            AttendanceRecord::new("Bob", base() + Duration::hours(2), 60, 3),
        ];
        assert!(!has_shift_gap_violation(&records, "Bob"));
    }

    #[test]
    fn test_first_qualifying_pair_is_reported() {
        let records = vec![
            AttendanceRecord::new("Bob", base(), 60, 1),
            AttendanceRecord::new("Bob", base() + Duration::hours(12), 60, 2),
            AttendanceRecord::new("Bob", base() + Duration::hours(15), 60, 3),
            AttendanceRecord::new("Bob", base() + Duration::hours(20), 60, 4),
        ];

        let finding = detect_shift_gap(&records, "Bob", &ShiftGapConfig::default()).unwrap();
        assert_eq!(finding.evidence["first_row"], 2);
        assert_eq!(finding.evidence["gap_minutes"], 180);
    }

    #[test]
    fn test_custom_bounds() {
        let config = ShiftGapConfig {
            min_minutes: 0,
            max_minutes: 30,
            ..ShiftGapConfig::default()
        };
        let records = pair("Bob", "Bob", Duration::minutes(20));
        assert!(detect_shift_gap(&records, "Bob", &config).is_some());
    }

    #[test]
    fn test_pair_with_missing_time_is_passed_over() {
        let records = vec![
            AttendanceRecord::new("Bob", base(), 60, 1),
            AttendanceRecord::from_parts("Bob", None, Some(60), 2),
            AttendanceRecord::new("Bob", base() + Duration::hours(2), 60, 3),
        ];
        assert!(!has_shift_gap_violation(&records, "Bob"));
    }

    #[test]
    fn test_missing_duration_does_not_affect_gap() {
        let records = vec![
            AttendanceRecord::from_parts("Bob", Some(base()), None, 1),
            AttendanceRecord::new("Bob", base() + Duration::hours(2), 60, 2),
        ];
        assert!(has_shift_gap_violation(&records, "Bob"));
    }

    #[test]
    fn test_empty_and_single_record() {
        assert!(!has_shift_gap_violation(&[], "Bob"));
        let one = vec![AttendanceRecord::new("Bob", base(), 60, 1)];
        assert!(!has_shift_gap_violation(&one, "Bob"));
    }
}
