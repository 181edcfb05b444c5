//! CSV reading with row-level error isolation.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, error, warn};

use crate::error::{AuditError, AuditResult};
use crate::models::SkippedRow;

/// One data row of raw field text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based data row number (the header is row 0).
    pub row: usize,
    /// Field values in column order.
    pub fields: Vec<String>,
}

/// The raw contents of an attendance source: a header row, the data rows
/// that could be read, and the rows that could not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Header cells, trimmed. Empty when the source had no rows at all.
    pub headers: Vec<String>,
    /// Data rows in source order.
    pub rows: Vec<RawRow>,
    /// Rows the CSV reader rejected.
    pub rejected: Vec<SkippedRow>,
}

impl RawTable {
    /// Builds a table from pre-split rows where row 0 is the header.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_audit::ingest::RawTable;
    ///
    /// let table = RawTable::from_rows(vec![
    ///     vec!["Employee Name".to_string(), "Time".to_string()],
    ///     vec!["Alice".to_string(), "10/02/2023 09:00 AM".to_string()],
    /// ]);
    /// assert_eq!(table.headers[1], "Time");
    /// assert_eq!(table.rows[0].row, 1);
    /// ```
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let mut iter = rows.into_iter();
        let headers = iter
            .next()
            .map(|cells| clean_headers(&cells))
            .unwrap_or_default();
        let rows = iter
            .enumerate()
            .map(|(idx, fields)| RawRow {
                row: idx + 1,
                fields,
            })
            .collect();

        Self {
            headers,
            rows,
            rejected: Vec::new(),
        }
    }

    /// Number of data rows the source held, readable or not.
    pub fn rows_read(&self) -> usize {
        self.rows.len() + self.rejected.len()
    }

    /// Flattens the table back into rows of strings, header first.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        if self.headers.is_empty() && self.rows.is_empty() {
            return Vec::new();
        }
        std::iter::once(self.headers)
            .chain(self.rows.into_iter().map(|r| r.fields))
            .collect()
    }
}

/// Loads the rows of a CSV file, header first.
///
/// Malformed rows are logged and skipped. An unreadable file is logged and
/// yields no rows rather than an error.
pub fn load_rows<P: AsRef<Path>>(path: P) -> Vec<Vec<String>> {
    load_table(path).into_rows()
}

/// Loads a CSV file into a [`RawTable`], tolerating an unreadable file.
pub fn load_table<P: AsRef<Path>>(path: P) -> RawTable {
    match read_table_from_path(path) {
        Ok(table) => table,
        Err(err) => {
            error!(error = %err, "Attendance file unreadable, continuing with no rows");
            RawTable::default()
        }
    }
}

/// Reads a CSV file into a [`RawTable`].
///
/// # Errors
///
/// Returns [`AuditError::FileReadError`] when the file cannot be opened.
/// Individual malformed rows are never an error; they end up in
/// [`RawTable::rejected`].
pub fn read_table_from_path<P: AsRef<Path>>(path: P) -> AuditResult<RawTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AuditError::FileReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!(path = %path.display(), "Reading attendance file");
    Ok(read_table(file))
}

/// Reads comma-separated text into a [`RawTable`].
///
/// Rows may have differing lengths. Header cells that are not valid UTF-8
/// are decoded lossily so the header row is never lost; a data row that is
/// not valid UTF-8 is rejected on its own.
pub fn read_table<R: Read>(reader: R) -> RawTable {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut table = RawTable::default();
    let mut header_seen = false;

    for (idx, result) in reader.byte_records().enumerate() {
        let decoded = result.map_err(|e| e.to_string()).and_then(|record| {
            if header_seen {
                StringRecord::from_byte_record(record)
                    .map(|r| r.iter().map(str::to_string).collect::<Vec<_>>())
                    .map_err(|e| e.to_string())
            } else {
                Ok(record
                    .iter()
                    .map(|cell| String::from_utf8_lossy(cell).into_owned())
                    .collect())
            }
        });

        match decoded {
            Ok(fields) if !header_seen => {
                table.headers = clean_headers(&fields);
                header_seen = true;
            }
            Ok(fields) => table.rows.push(RawRow { row: idx, fields }),
            Err(message) => {
                let row = AuditError::RowParseError { row: idx, message };
                if !header_seen {
                    error!(error = %row, "Header row unreadable, no rows will be analyzed");
                    table.rejected.push(SkippedRow {
                        row: idx,
                        reason: row.to_string(),
                    });
                    break;
                }
                warn!(row = idx, error = %row, "Skipping malformed CSV row");
                table.rejected.push(SkippedRow {
                    row: idx,
                    reason: row.to_string(),
                });
            }
        }
    }

    table
}

fn clean_headers(cells: &[String]) -> Vec<String> {
    cells
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "Employee Name,Time,Timecard Hours (as Time)\n\
Alice,10/02/2023 09:00 AM,8:00\n\
Bob,10/02/2023 10:00 AM,7:30\n";

    #[test]
    fn test_read_table_splits_header_and_rows() {
        let table = read_table(SAMPLE.as_bytes());

        assert_eq!(
            table.headers,
            vec!["Employee Name", "Time", "Timecard Hours (as Time)"]
        );
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].row, 1);
        assert_eq!(table.rows[1].fields[0], "Bob");
        assert!(table.rejected.is_empty());
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let csv = "Employee Name,Time\n\"Smith, Jane\",10/02/2023 09:00 AM\n";
        let table = read_table(csv.as_bytes());
        assert_eq!(table.rows[0].fields[0], "Smith, Jane");
    }

    #[test]
    fn test_ragged_and_blank_rows() {
        let csv = "A,B,C\n1,2\n,,\n4,5,6,7\n";
        let table = read_table(csv.as_bytes());

        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].fields, vec!["1", "2"]);
        assert_eq!(table.rows[1].fields, vec!["", "", ""]);
        assert_eq!(table.rows[2].row, 3);
        assert_eq!(table.rows_read(), 3);
    }

    #[test]
    fn test_non_utf8_header_is_kept() {
        let mut bytes = b"Employee Name,Time,Timecard Hours (as Time),Dur\xe9e\n".to_vec();
        bytes.extend_from_slice(b"Carol,10/02/2023 06:00 AM,15:00,x\n");

        let table = read_table(bytes.as_slice());

        assert_eq!(table.headers[0], "Employee Name");
        assert_eq!(table.headers[3], "Dur\u{fffd}e");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].fields[0], "Carol");
        assert!(table.rejected.is_empty());
    }

    #[test]
    fn test_invalid_utf8_row_is_rejected_not_fatal() {
        let mut bytes = b"Employee Name,Time\nAlice,x\n".to_vec();
        bytes.extend_from_slice(b"B\xffb,y\nCarol,z\n");

        let table = read_table(bytes.as_slice());

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1].fields[0], "Carol");
        assert_eq!(table.rows[1].row, 3);
        assert_eq!(table.rejected.len(), 1);
        assert_eq!(table.rejected[0].row, 2);
        assert_eq!(table.rows_read(), 3);
    }

    #[test]
    fn test_headers_are_trimmed() {
        let csv = "\u{feff} Employee Name , Time \nAlice,x\n";
        let table = read_table(csv.as_bytes());
        assert_eq!(table.headers, vec!["Employee Name", "Time"]);
    }

    #[test]
    fn test_load_rows_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();

        let rows = load_rows(file.path());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "Employee Name");
        assert_eq!(rows[2][2], "7:30");
    }

    #[test]
    fn test_missing_file_yields_no_rows() {
        assert!(load_rows("/nonexistent/attendance.csv").is_empty());
    }

    #[test]
    fn test_strict_read_reports_file_error() {
        match read_table_from_path("/nonexistent/attendance.csv") {
            Err(AuditError::FileReadError { path, .. }) => {
                assert!(path.contains("attendance.csv"));
            }
            other => panic!("Expected FileReadError, got {:?}", other),
        }
    }

    #[test]
    fn test_from_rows_numbers_data_rows() {
        let table = RawTable::from_rows(vec![
            vec!["Employee Name".to_string()],
            vec!["Alice".to_string()],
            vec![" ".to_string()],
            vec!["Bob".to_string()],
        ]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1].fields, vec![" "]);
        assert_eq!(table.rows[2].row, 3);
        assert!(RawTable::from_rows(Vec::new()).headers.is_empty());
    }
}
