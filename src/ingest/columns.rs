//! Header-to-index resolution for the required columns.

use crate::config::ColumnConfig;
use crate::error::{AuditError, AuditResult};

/// Positions of the required columns within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    /// Index of the employee name column.
    pub employee_name: usize,
    /// Index of the shift start date-time column.
    pub time: usize,
    /// Index of the hours-worked column.
    pub shift_duration: usize,
}

impl ColumnIndex {
    /// Locates every required column by exact header name.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::MissingColumn`] naming the first absent header.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_audit::config::ColumnConfig;
    /// use attendance_audit::ingest::ColumnIndex;
    ///
    /// let headers: Vec<String> = ["Position ID", "Time", "Employee Name", "Timecard Hours (as Time)"]
    ///     .iter()
    ///     .map(|h| h.to_string())
    ///     .collect();
    ///
    /// let index = ColumnIndex::resolve(&headers, &ColumnConfig::default()).unwrap();
    /// assert_eq!(index.employee_name, 2);
    /// assert_eq!(index.time, 1);
    /// assert_eq!(index.shift_duration, 3);
    /// ```
    pub fn resolve(headers: &[String], columns: &ColumnConfig) -> AuditResult<Self> {
        Ok(Self {
            employee_name: position(headers, &columns.employee_name)?,
            time: position(headers, &columns.time)?,
            shift_duration: position(headers, &columns.shift_duration)?,
        })
    }
}

fn position(headers: &[String], name: &str) -> AuditResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| AuditError::MissingColumn {
            column: name.to_string(),
        })
}
