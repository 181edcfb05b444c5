//! Analysis report model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AnalysisOutcome;

/// A source row that was left out of the analysis, or out of the rules that
/// read one of its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// 1-based data row number (the header is row 0).
    pub row: usize,
    /// Why the row was skipped.
    pub reason: String,
}

/// The complete output of one analysis run.
///
/// Wraps the pure [`AnalysisOutcome`] with run metadata. Two runs over the
/// same input differ only in `id` and `analyzed_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique identifier for this run.
    pub id: Uuid,
    /// When the analysis was performed.
    pub analyzed_at: DateTime<Utc>,
    /// Where the rows came from (a path or a request label).
    pub source: String,
    /// Data rows read from the source, excluding the header.
    pub rows_read: usize,
    /// Rows whose every field was usable.
    pub records_analyzed: usize,
    /// Rows left out of at least one rule, with reasons.
    pub skipped_rows: Vec<SkippedRow>,
    /// Per-rule results.
    pub results: AnalysisOutcome,
}

impl AnalysisReport {
    /// Creates a report stamped with a fresh id and the current time.
    pub fn new(
        source: impl Into<String>,
        rows_read: usize,
        records_analyzed: usize,
        skipped_rows: Vec<SkippedRow>,
        results: AnalysisOutcome,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            source: source.into(),
            rows_read,
            records_analyzed,
            skipped_rows,
            results,
        }
    }
}
