//! Conversion of raw rows into attendance records.

use tracing::{debug, warn};

use crate::config::{AnalysisConfig, DurationMode};
use crate::error::{AuditError, AuditResult};
use crate::models::{AttendanceRecord, SkippedRow};
use crate::parsing::{parse_date_time, parse_duration_minutes};

use super::columns::ColumnIndex;
use super::csv_source::{RawRow, RawTable};

/// Records built from a table, plus the rows that could not be fully used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRows {
    /// One record per data row, in source order.
    pub records: Vec<AttendanceRecord>,
    /// Rows with at least one unusable field, in source order.
    pub skipped: Vec<SkippedRow>,
}

impl NormalizedRows {
    /// Number of rows whose every field was usable.
    pub fn complete(&self) -> usize {
        self.records.len() - self.skipped.len()
    }
}

/// Normalizes every data row of `table`.
///
/// Columns are resolved once up front. Every data row becomes a record so
/// that row adjacency survives; a field that is missing or does not parse is
/// left empty on the record and the row is listed in
/// [`NormalizedRows::skipped`]. Each rule then passes over only the records
/// lacking a field it reads. A blank employee name belongs to no one. A
/// table with no header row (an unreadable or empty source) yields no
/// records.
///
/// # Errors
///
/// Returns [`AuditError::MissingColumn`] when a required header is absent.
pub fn normalize_rows(table: &RawTable, config: &AnalysisConfig) -> AuditResult<NormalizedRows> {
    if table.headers.is_empty() {
        debug!("No header row, nothing to normalize");
        return Ok(NormalizedRows::default());
    }

    let index = ColumnIndex::resolve(&table.headers, &config.columns)?;
    let duration_mode = config.rules.long_shift.duration_mode;

    let mut normalized = NormalizedRows::default();
    for raw in &table.rows {
        let (record, problems) = normalize_row(raw, &index, config, duration_mode);
        if !problems.is_empty() {
            let reason = problems
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(row = raw.row, error = %reason, "Attendance row has unusable fields");
            normalized.skipped.push(SkippedRow {
                row: raw.row,
                reason,
            });
        }
        normalized.records.push(record);
    }

    Ok(normalized)
}

fn normalize_row(
    raw: &RawRow,
    index: &ColumnIndex,
    config: &AnalysisConfig,
    duration_mode: DurationMode,
) -> (AttendanceRecord, Vec<AuditError>) {
    let columns = &config.columns;
    let field = |idx: usize, name: &str| {
        raw.fields
            .get(idx)
            .map(String::as_str)
            .ok_or_else(|| AuditError::RowParseError {
                row: raw.row,
                message: format!("missing field '{}'", name),
            })
    };
    let mut problems = Vec::new();

    let employee_name = match field(index.employee_name, columns.employee_name.as_str()) {
        Ok(name) if name.trim().is_empty() => {
            problems.push(AuditError::RowParseError {
                row: raw.row,
                message: "employee name is blank".to_string(),
            });
            ""
        }
        Ok(name) => name.trim(),
        Err(err) => {
            problems.push(err);
            ""
        }
    };

    let timestamp = match field(index.time, columns.time.as_str()).and_then(parse_date_time) {
        Ok(ts) => Some(ts),
        Err(err) => {
            problems.push(err);
            None
        }
    };

    let minutes = match field(index.shift_duration, columns.shift_duration.as_str())
        .and_then(|raw| parse_duration_minutes(raw, duration_mode))
    {
        Ok(minutes) => Some(minutes),
        Err(err) => {
            problems.push(err);
            None
        }
    };

    (
        AttendanceRecord::from_parts(employee_name, timestamp, minutes, raw.row),
        problems,
    )
}
