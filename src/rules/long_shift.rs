//! Over-long single shift detection.

use crate::config::LongShiftConfig;
use crate::models::{AttendanceRecord, Rule, RuleFinding};

use super::minutes_to_hours;

/// Longest shift allowed by default, in minutes (14 hours).
pub const DEFAULT_MAX_SHIFT_MINUTES: i64 = 840;

/// Returns true if any record of `employee` is longer than 840 minutes.
///
/// # Examples
///
/// ```
/// use attendance_audit::models::AttendanceRecord;
/// use attendance_audit::rules::has_long_shift_violation;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2023, 10, 2).unwrap().and_hms_opt(6, 0, 0).unwrap();
/// let exactly_fourteen = vec![AttendanceRecord::new("Carol", start, 840, 1)];
/// let fifteen = vec![AttendanceRecord::new("Carol", start, 900, 1)];
///
/// assert!(!has_long_shift_violation(&exactly_fourteen, "Carol"));
/// assert!(has_long_shift_violation(&fifteen, "Carol"));
/// ```
pub fn has_long_shift_violation(records: &[AttendanceRecord], employee: &str) -> bool {
    detect_long_shift(records, employee, &LongShiftConfig::default()).is_some()
}

/// Evaluates the long-shift rule for one employee, returning the first record
/// whose duration is strictly above `config.max_minutes`. Records without a
/// usable duration are passed over.
pub fn detect_long_shift(
    records: &[AttendanceRecord],
    employee: &str,
    config: &LongShiftConfig,
) -> Option<RuleFinding> {
    let (record, minutes) = records
        .iter()
        .filter(|r| r.belongs_to(employee))
        .find_map(|r| {
            r.shift_duration_minutes
                .filter(|m| *m > config.max_minutes)
                .map(|m| (r, m))
        })?;

    let shift = match record.timestamp {
        Some(start) => format!("Shift starting {}", start),
        None => format!("Shift in row {}", record.row_number),
    };

    Some(RuleFinding {
        rule: Rule::LongShift,
        employee_name: employee.to_string(),
        evidence: serde_json::json!({
            "shift_start": record.timestamp,
            "row": record.row_number,
            "shift_duration_minutes": minutes,
            "max_minutes": config.max_minutes,
        }),
        reasoning: format!(
            "{} lasted {} hours, over the {} hour limit",
            shift,
            minutes_to_hours(minutes),
            minutes_to_hours(config.max_minutes)
        ),
    })
}
