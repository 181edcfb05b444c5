//! Attendance record model.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One normalized row of an attendance log.
///
/// Every data row of a source becomes a record, so positions in the sequence
/// match positions in the file. A field that could not be parsed is `None`;
/// only the rules that read that field pass over the record.
///
/// Records are created once during ingestion and only ever handed out by
/// shared reference afterwards; the rules read them but never reorder or
/// modify the sequence they live in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee the shift belongs to.
    pub employee_name: String,
    /// Start of the shift, if the time field parsed.
    pub timestamp: Option<NaiveDateTime>,
    /// Worked time in minutes, if the duration field parsed.
    pub shift_duration_minutes: Option<i64>,
    /// 1-based data row number in the source (the header is row 0).
    pub row_number: usize,
}

impl AttendanceRecord {
    /// Creates a record with both fields present.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_audit::models::AttendanceRecord;
    /// use chrono::NaiveDateTime;
    ///
    /// let start = NaiveDateTime::parse_from_str("2023-10-02 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let record = AttendanceRecord::new("Alice", start, 480, 1);
    /// assert_eq!(record.work_date().unwrap().to_string(), "2023-10-02");
    /// ```
    pub fn new(
        employee_name: impl Into<String>,
        timestamp: NaiveDateTime,
        shift_duration_minutes: i64,
        row_number: usize,
    ) -> Self {
        Self::from_parts(
            employee_name,
            Some(timestamp),
            Some(shift_duration_minutes),
            row_number,
        )
    }

    /// Creates a record where either field may be missing.
    pub fn from_parts(
        employee_name: impl Into<String>,
        timestamp: Option<NaiveDateTime>,
        shift_duration_minutes: Option<i64>,
        row_number: usize,
    ) -> Self {
        Self {
            employee_name: employee_name.into(),
            timestamp,
            shift_duration_minutes,
            row_number,
        }
    }

    /// The calendar date the shift started on.
    pub fn work_date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|ts| ts.date())
    }

    /// Returns true if every field parsed.
    pub fn is_complete(&self) -> bool {
        self.timestamp.is_some() && self.shift_duration_minutes.is_some()
    }

    /// Returns true if the record belongs to `employee` (exact match).
    pub fn belongs_to(&self, employee: &str) -> bool {
        self.employee_name == employee
    }
}
