//! Rule evaluation over a complete record sequence.

use std::borrow::Cow;
use std::collections::HashSet;

use tracing::debug;

use crate::config::{RuleConfig, ShiftGapOrdering};
use crate::models::{AnalysisOutcome, AttendanceRecord, RuleFinding, RuleResult};
use crate::rules::{detect_consecutive_days, detect_long_shift, detect_shift_gap};

/// Evaluates all three rules for every employee in `records`.
///
/// Employees are discovered in record order and each one is evaluated once.
/// Records with a blank name take part in row adjacency but are never
/// evaluated themselves.
/// The shift-gap rule sees a copy ordered per
/// [`ShiftGapOrdering`]; `records` itself is never reordered.
///
/// # Examples
///
/// ```
/// use attendance_audit::analysis::analyze;
/// use attendance_audit::config::RuleConfig;
/// use attendance_audit::models::AttendanceRecord;
/// use chrono::{Duration, NaiveDate};
///
/// let start = NaiveDate::from_ymd_opt(2023, 10, 2).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let records = vec![
///     AttendanceRecord::new("Carol", start, 900, 1),
///     AttendanceRecord::new("Bob", start, 480, 2),
///     AttendanceRecord::new("Bob", start + Duration::hours(3), 120, 3),
/// ];
///
/// let outcome = analyze(&records, &RuleConfig::default());
/// assert!(outcome.long_shift.contains("Carol"));
/// assert!(outcome.shift_gap.contains("Bob"));
/// assert_eq!(outcome.consecutive_days.count(), 0);
/// ```
pub fn analyze(records: &[AttendanceRecord], config: &RuleConfig) -> AnalysisOutcome {
    let gap_view: Cow<'_, [AttendanceRecord]> = match config.shift_gap.ordering {
        ShiftGapOrdering::EmployeeThenTime => Cow::Owned(sorted_by_employee_then_time(records)),
        ShiftGapOrdering::FileOrder => Cow::Borrowed(records),
    };

    let mut outcome = AnalysisOutcome::empty();
    let mut evaluated: HashSet<&str> = HashSet::new();

    for record in records {
        let employee = record.employee_name.as_str();
        if employee.is_empty() || !evaluated.insert(employee) {
            continue;
        }

        if let Some(finding) = detect_consecutive_days(records, employee, &config.consecutive_days) {
            merge(&mut outcome.consecutive_days, finding);
        }
        if let Some(finding) = detect_shift_gap(&gap_view, employee, &config.shift_gap) {
            merge(&mut outcome.shift_gap, finding);
        }
        if let Some(finding) = detect_long_shift(records, employee, &config.long_shift) {
            merge(&mut outcome.long_shift, finding);
        }
    }

    debug!(
        employees = evaluated.len(),
        records = records.len(),
        "Evaluated attendance rules"
    );

    outcome
}

fn merge(result: &mut RuleResult, finding: RuleFinding) {
    debug!(
        employee = %finding.employee_name,
        rule = result.rule().id(),
        reasoning = %finding.reasoning,
        "Rule satisfied"
    );
    result.record(finding);
}

/// Returns a copy of `records` stable-sorted by employee name, then by
/// shift start.
pub fn sorted_by_employee_then_time(records: &[AttendanceRecord]) -> Vec<AttendanceRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        a.employee_name
            .cmp(&b.employee_name)
            .then(a.timestamp.cmp(&b.timestamp))
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsecutiveDaysMode;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 10, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn rec(name: &str, offset_hours: i64, minutes: i64, row: usize) -> AttendanceRecord {
        AttendanceRecord::new(name, base() + Duration::hours(offset_hours), minutes, row)
    }

    #[test]
    fn test_each_rule_reports_its_employees() {
        let mut records: Vec<AttendanceRecord> = (0..7)
            .map(|day| rec("Alice", day * 24, 480, day as usize + 1))
            .collect();
        records.push(rec("Bob", 0, 240, 8));
        records.push(rec("Bob", 2, 240, 9));
        records.push(rec("Carol", 0, 900, 10));

        let outcome = analyze(&records, &RuleConfig::default());

        assert_eq!(outcome.consecutive_days.employees().len(), 1);
        assert!(outcome.consecutive_days.contains("Alice"));
        assert!(outcome.shift_gap.contains("Bob"));
        assert_eq!(outcome.shift_gap.count(), 1);
        assert!(outcome.long_shift.contains("Carol"));
        assert_eq!(outcome.long_shift.count(), 1);
    }

    #[test]
    fn test_repeated_employee_rows_do_not_inflate_counts() {
        let records: Vec<AttendanceRecord> =
            (0..20).map(|i| rec("Carol", i * 24, 900, i as usize + 1)).collect();

        let outcome = analyze(&records, &RuleConfig::default());

        assert_eq!(outcome.long_shift.count(), 1);
        assert_eq!(outcome.long_shift.findings().len(), 1);
        assert_eq!(outcome.consecutive_days.count(), 1);
    }

    #[test]
    fn test_gap_detection_sorts_interleaved_rows() {
        // Bob's shifts are three hours apart but separated by Eve's row.
        let records = vec![rec("Bob", 0, 240, 1), rec("Eve", 1, 240, 2), rec("Bob", 3, 240, 3)];

        let sorted = analyze(&records, &RuleConfig::default());
        assert!(sorted.shift_gap.contains("Bob"));

        let mut file_order = RuleConfig::default();
        file_order.shift_gap.ordering = ShiftGapOrdering::FileOrder;
        let unsorted = analyze(&records, &file_order);
        assert!(!unsorted.shift_gap.contains("Bob"));
    }

    #[test]
    fn test_gap_detection_sorts_by_time() {
        // Listed newest first: file order gives a negative gap.
        let records = vec![rec("Bob", 5, 240, 1), rec("Bob", 0, 240, 2)];

        assert!(analyze(&records, &RuleConfig::default()).shift_gap.contains("Bob"));

        let mut file_order = RuleConfig::default();
        file_order.shift_gap.ordering = ShiftGapOrdering::FileOrder;
        assert!(!analyze(&records, &file_order).shift_gap.contains("Bob"));
    }

    #[test]
    fn test_input_sequence_is_untouched() {
        let records = vec![rec("Zed", 5, 240, 1), rec("Amy", 0, 240, 2)];
        let before = records.clone();

        let _ = analyze(&records, &RuleConfig::default());

        assert_eq!(records, before);
    }

    #[test]
    fn test_row_window_mode_uses_file_positions() {
        let mut records: Vec<AttendanceRecord> =
            (0..7).map(|i| rec("Alice", i, 480, i as usize + 1)).collect();
        records.insert(3, rec("Bob", 3, 480, 99));

        let mut config = RuleConfig::default();
        config.consecutive_days.mode = ConsecutiveDaysMode::RowWindow;
        assert!(!analyze(&records, &config).consecutive_days.contains("Alice"));

        records.remove(3);
        assert!(analyze(&records, &config).consecutive_days.contains("Alice"));
    }

    #[test]
    fn test_blank_names_are_not_evaluated() {
        let records = vec![rec("", 0, 900, 1), rec("", 2, 900, 2)];
        let outcome = analyze(&records, &RuleConfig::default());
        assert!(outcome.results().iter().all(|r| r.count() == 0));
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let records = vec![
            rec("Bob", 0, 240, 1),
            rec("Bob", 2, 900, 2),
            rec("Amy", 0, 480, 3),
        ];
        let config = RuleConfig::default();

        assert_eq!(analyze(&records, &config), analyze(&records, &config));
    }

    #[test]
    fn test_empty_sequence() {
        let outcome = analyze(&[], &RuleConfig::default());
        assert_eq!(outcome, AnalysisOutcome::empty());
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let records = vec![rec("Amy", 0, 100, 1), rec("Amy", 0, 200, 2)];
        let sorted = sorted_by_employee_then_time(&records);
        assert_eq!(sorted[0].row_number, 1);
        assert_eq!(sorted[1].row_number, 2);
    }
}
