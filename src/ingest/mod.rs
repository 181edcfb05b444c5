//! Attendance ingestion.
//!
//! This module reads comma-separated attendance exports, resolves the
//! required columns by header name, and normalizes each data row into an
//! [`AttendanceRecord`](crate::models::AttendanceRecord). Problems with a
//! single row never stop the load; they are logged and reported as skipped
//! rows.

mod columns;
mod csv_source;
mod normalize;

pub use columns::ColumnIndex;
pub use csv_source::{
    RawRow, RawTable, load_rows, load_table, read_table, read_table_from_path,
};
pub use normalize::{NormalizedRows, normalize_rows};
