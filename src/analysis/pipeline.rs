//! End-to-end analysis: raw rows in, report out.

use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::config::AnalysisConfig;
use crate::error::AuditResult;
use crate::ingest::{RawTable, load_table, normalize_rows, read_table};
use crate::models::AnalysisReport;

use super::coordinator::analyze;

/// Analyzes an already-read table.
///
/// # Errors
///
/// Returns [`AuditError::MissingColumn`](crate::error::AuditError::MissingColumn)
/// before any rule runs when a required header is absent. Row-level problems
/// are reported in [`AnalysisReport::skipped_rows`] instead.
pub fn analyze_table(
    table: &RawTable,
    source: &str,
    config: &AnalysisConfig,
) -> AuditResult<AnalysisReport> {
    info!(source, rows = table.rows_read(), "Starting attendance analysis");

    let normalized = normalize_rows(table, config)?;
    let results = analyze(&normalized.records, &config.rules);

    let mut skipped_rows = table.rejected.clone();
    skipped_rows.extend(normalized.skipped.iter().cloned());
    skipped_rows.sort_by_key(|s| s.row);

    let report = AnalysisReport::new(
        source,
        table.rows_read(),
        normalized.complete(),
        skipped_rows,
        results,
    );

    info!(
        source,
        analysis_id = %report.id,
        records = report.records_analyzed,
        skipped = report.skipped_rows.len(),
        consecutive_days = report.results.consecutive_days.count(),
        shift_gap = report.results.shift_gap.count(),
        long_shift = report.results.long_shift.count(),
        "Attendance analysis complete"
    );

    Ok(report)
}

/// Analyzes rows of raw field text where row 0 is the header.
pub fn analyze_rows(rows: &[Vec<String>], config: &AnalysisConfig) -> AuditResult<AnalysisReport> {
    analyze_table(&RawTable::from_rows(rows.to_vec()), "rows", config)
}

/// Analyzes comma-separated text from any reader.
pub fn analyze_reader<R: Read>(
    reader: R,
    source: &str,
    config: &AnalysisConfig,
) -> AuditResult<AnalysisReport> {
    analyze_table(&read_table(reader), source, config)
}

/// Analyzes a CSV file.
///
/// An unreadable file is logged and analyzed as an empty dataset, giving
/// empty results for all three rules.
///
/// # Example
///
/// ```no_run
/// use attendance_audit::analysis::analyze_file;
/// use attendance_audit::config::AnalysisConfig;
///
/// let report = analyze_file("attendance.csv", &AnalysisConfig::default())?;
/// println!("{} employees with long shifts", report.results.long_shift.count());
/// # Ok::<(), attendance_audit::error::AuditError>(())
/// ```
pub fn analyze_file<P: AsRef<Path>>(
    path: P,
    config: &AnalysisConfig,
) -> AuditResult<AnalysisReport> {
    let path = path.as_ref();
    let source = path.display().to_string();
    analyze_table(&load_table(path), &source, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsecutiveDaysMode;
    use crate::error::AuditError;

    fn rows(lines: &[&[&str]]) -> Vec<Vec<String>> {
        lines
            .iter()
            .map(|r| r.iter().map(|f| f.to_string()).collect())
            .collect()
    }

    const HEADER: &[&str] = &["Employee Name", "Time", "Timecard Hours (as Time)"];

    #[test]
    fn test_analyze_rows_end_to_end() {
        let rows = rows(&[
            HEADER,
            &["Bob", "10/02/2023 08:00 AM", "2:00"],
            &["Bob", "10/02/2023 11:00 AM", "6:00"],
            &["Carol", "10/02/2023 06:00 AM", "15:00"],
            &["Dave", "", ""],
        ]);

        let report = analyze_rows(&rows, &AnalysisConfig::default()).unwrap();

        assert_eq!(report.rows_read, 4);
        assert_eq!(report.records_analyzed, 3);
        assert_eq!(report.skipped_rows.len(), 1);
        assert_eq!(report.skipped_rows[0].row, 4);
        assert!(report.results.shift_gap.contains("Bob"));
        assert!(report.results.long_shift.contains("Carol"));
        assert!(!report.results.long_shift.contains("Dave"));
    }

    #[test]
    fn test_open_timecard_keeps_calendar_run() {
        let mut lines: Vec<Vec<String>> = vec![HEADER.iter().map(|h| h.to_string()).collect()];
        for day in 2..=8 {
            let hours = if day == 5 { "" } else { "8:00" };
            lines.push(vec![
                "Alice".to_string(),
                format!("10/0{}/2023 09:00 AM", day),
                hours.to_string(),
            ]);
        }

        let report = analyze_rows(&lines, &AnalysisConfig::default()).unwrap();

        assert!(report.results.consecutive_days.contains("Alice"));
        assert_eq!(report.records_analyzed, 6);
        assert_eq!(report.skipped_rows.len(), 1);
        assert_eq!(report.skipped_rows[0].row, 4);
    }

    #[test]
    fn test_unusable_row_still_separates_row_windows() {
        const ALICE: &[&str] = &["Alice", "10/02/2023 09:00 AM", "8:00"];
        const BOB_OPEN: &[&str] = &["Bob", "10/02/2023 10:00 AM", ""];

        let mut lines = vec![HEADER];
        lines.extend([ALICE; 4]);
        lines.push(BOB_OPEN);
        lines.extend([ALICE; 3]);

        let mut config = AnalysisConfig::default();
        config.rules.consecutive_days.mode = ConsecutiveDaysMode::RowWindow;
        let report = analyze_rows(&rows(&lines), &config).unwrap();

        assert!(!report.results.consecutive_days.contains("Alice"));
        assert_eq!(report.skipped_rows.len(), 1);
    }

    #[test]
    fn test_bad_time_only_affects_time_rules() {
        let rows = rows(&[
            HEADER,
            &["Carol", "sometime", "15:00"],
            &["Bob", "10/02/2023 08:00 AM", "2:00"],
            &["Bob", "", "2:00"],
            &["Bob", "10/02/2023 11:00 AM", "2:00"],
        ]);

        let report = analyze_rows(&rows, &AnalysisConfig::default()).unwrap();

        assert!(report.results.long_shift.contains("Carol"));
        // Sorted by time, the timeless row goes first and Bob's two shifts meet.
        assert!(report.results.shift_gap.contains("Bob"));
    }

    #[test]
    fn test_latin1_header_cell_does_not_hide_columns() {
        let mut bytes = b"Employee Name,Time,Timecard Hours (as Time),Dur\xe9e\n".to_vec();
        bytes.extend_from_slice(b"Carol,10/02/2023 06:00 AM,15:00,1\n");

        let report =
            analyze_reader(bytes.as_slice(), "upload", &AnalysisConfig::default()).unwrap();

        assert_eq!(report.rows_read, 1);
        assert!(report.results.long_shift.contains("Carol"));
    }

    #[test]
    fn test_blank_rows_are_counted_as_skipped() {
        let rows = rows(&[
            HEADER,
            &["Carol", "10/02/2023 06:00 AM", "15:00"],
            &["", "", ""],
        ]);

        let report = analyze_rows(&rows, &AnalysisConfig::default()).unwrap();

        assert_eq!(report.rows_read, 2);
        assert_eq!(report.records_analyzed, 1);
        assert_eq!(report.skipped_rows.len(), 1);
        assert_eq!(report.skipped_rows[0].row, 2);
    }

    #[test]
    fn test_missing_column_aborts_run() {
        let rows = rows(&[&["Employee Name", "Time"], &["Bob", "10/02/2023 08:00 AM"]]);

        assert!(matches!(
            analyze_rows(&rows, &AnalysisConfig::default()),
            Err(AuditError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_unreadable_file_gives_empty_results() {
        let report = analyze_file("/nonexistent/attendance.csv", &AnalysisConfig::default()).unwrap();

        assert_eq!(report.rows_read, 0);
        assert_eq!(report.results.consecutive_days.count(), 0);
        assert_eq!(report.results.shift_gap.count(), 0);
        assert_eq!(report.results.long_shift.count(), 0);
    }

    #[test]
    fn test_reader_and_csv_rejects_are_merged() {
        let mut bytes = b"Employee Name,Time,Timecard Hours (as Time)\n".to_vec();
        bytes.extend_from_slice(b"Carol,10/02/2023 06:00 AM,15:00\n");
        bytes.extend_from_slice(b"B\xffb,10/02/2023 06:00 AM,15:00\n");
        bytes.extend_from_slice(b"Eve,10/02/2023 06:00 AM,later\n");

        let report =
            analyze_reader(bytes.as_slice(), "upload", &AnalysisConfig::default()).unwrap();

        assert_eq!(report.source, "upload");
        assert_eq!(report.rows_read, 3);
        let skipped: Vec<usize> = report.skipped_rows.iter().map(|s| s.row).collect();
        assert_eq!(skipped, vec![2, 3]);
        assert_eq!(report.results.long_shift.count(), 1);
    }
}
