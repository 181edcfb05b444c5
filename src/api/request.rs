//! Request types for the attendance audit API.

use serde::{Deserialize, Serialize};

use crate::config::ColumnConfig;

/// Request body for the `/analyze` endpoint.
///
/// Field values are the raw text of an attendance export and go through the
/// same normalization as CSV rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Attendance rows in chronological order.
    pub records: Vec<RecordRequest>,
}

/// One attendance row in an analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    /// The employee the shift belongs to.
    pub employee_name: String,
    /// Shift start, e.g. `"10/02/2023 09:00 AM"`.
    pub time: String,
    /// Hours worked as `H:MM`.
    pub timecard_hours: String,
}

impl AnalysisRequest {
    /// Converts the request into rows of field text, header first, using the
    /// configured column names.
    pub fn into_rows(self, columns: &ColumnConfig) -> Vec<Vec<String>> {
        let header = vec![
            columns.employee_name.clone(),
            columns.time.clone(),
            columns.shift_duration.clone(),
        ];

        std::iter::once(header)
            .chain(
                self.records
                    .into_iter()
                    .map(|r| vec![r.employee_name, r.time, r.timecard_hours]),
            )
            .collect()
    }
}
