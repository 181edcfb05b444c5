//! Consecutive working days detection.
//!
//! Two strategies are provided. The calendar strategy looks at the distinct
//! dates an employee started a shift on and searches for an unbroken run.
//! Rows without a usable time do not count towards a calendar run. The
//! row-window strategy slides a fixed window over the whole file and
//! asks whether every row in some window belongs to the employee, whatever
//! its fields hold; it only
//! approximates calendar days when the file holds one row per day in global
//! date order, and exists for output compatibility with such exports.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::config::{ConsecutiveDaysConfig, ConsecutiveDaysMode};
use crate::models::{AttendanceRecord, Rule, RuleFinding};

/// Number of consecutive days that triggers the rule by default.
pub const DEFAULT_CONSECUTIVE_DAYS: usize = 7;

/// Returns true if `employee` started shifts on 7 consecutive calendar dates.
///
/// # Examples
///
/// ```
/// use attendance_audit::models::AttendanceRecord;
/// use attendance_audit::rules::has_seven_consecutive_days;
/// use chrono::{Duration, NaiveDate};
///
/// let monday = NaiveDate::from_ymd_opt(2023, 10, 2).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let week: Vec<AttendanceRecord> = (0..7)
///     .map(|day| AttendanceRecord::new("Alice", monday + Duration::days(day), 480, day as usize + 1))
///     .collect();
///
/// assert!(has_seven_consecutive_days(&week, "Alice"));
/// assert!(!has_seven_consecutive_days(&week[1..], "Alice"));
/// ```
pub fn has_seven_consecutive_days(records: &[AttendanceRecord], employee: &str) -> bool {
    find_calendar_run(records, employee, DEFAULT_CONSECUTIVE_DAYS).is_some()
}

/// Returns true if some window of `window` adjacent rows of the whole
/// sequence belongs entirely to `employee`.
pub fn has_consecutive_row_window(
    records: &[AttendanceRecord],
    employee: &str,
    window: usize,
) -> bool {
    find_row_window(records, employee, window).is_some()
}

/// Evaluates the consecutive-days rule for one employee.
///
/// Returns a finding describing the first qualifying run, or `None`.
pub fn detect_consecutive_days(
    records: &[AttendanceRecord],
    employee: &str,
    config: &ConsecutiveDaysConfig,
) -> Option<RuleFinding> {
    let threshold = config.threshold_days;

    match config.mode {
        ConsecutiveDaysMode::CalendarDates => {
            let (first, last) = find_calendar_run(records, employee, threshold)?;
            Some(RuleFinding {
                rule: Rule::ConsecutiveDays,
                employee_name: employee.to_string(),
                evidence: serde_json::json!({
                    "mode": "calendar_dates",
                    "threshold_days": threshold,
                    "first_date": first.to_string(),
                    "last_date": last.to_string(),
                }),
                reasoning: format!(
                    "Worked every calendar day from {} to {} ({} consecutive days)",
                    first, last, threshold
                ),
            })
        }
        ConsecutiveDaysMode::RowWindow => {
            let start = find_row_window(records, employee, threshold)?;
            let window = &records[start..start + threshold];
            let first_row = window.first()?.row_number;
            let last_row = window.last()?.row_number;
            Some(RuleFinding {
                rule: Rule::ConsecutiveDays,
                employee_name: employee.to_string(),
                evidence: serde_json::json!({
                    "mode": "row_window",
                    "threshold_days": threshold,
                    "first_row": first_row,
                    "last_row": last_row,
                }),
                reasoning: format!(
                    "Rows {} to {} ({} consecutive rows) all belong to the employee",
                    first_row, last_row, threshold
                ),
            })
        }
    }
}

/// First and last date of the earliest run of at least `threshold` dates.
fn find_calendar_run(
    records: &[AttendanceRecord],
    employee: &str,
    threshold: usize,
) -> Option<(NaiveDate, NaiveDate)> {
    let dates: BTreeSet<NaiveDate> = records
        .iter()
        .filter(|r| r.belongs_to(employee))
        .filter_map(AttendanceRecord::work_date)
        .collect();

    let mut run_start: Option<NaiveDate> = None;
    let mut previous: Option<NaiveDate> = None;
    let mut run_length = 0usize;

    for date in dates {
        match previous {
            Some(prev) if prev.succ_opt() == Some(date) => run_length += 1,
            _ => {
                run_start = Some(date);
                run_length = 1;
            }
        }
        previous = Some(date);

        if run_length >= threshold {
            return run_start.map(|start| (start, date));
        }
    }

    None
}

/// Start index of the first all-`employee` window.
fn find_row_window(records: &[AttendanceRecord], employee: &str, window: usize) -> Option<usize> {
    if window == 0 || records.len() < window {
        return None;
    }
    records
        .windows(window)
        .position(|rows| rows.iter().all(|r| r.belongs_to(employee)))
}
