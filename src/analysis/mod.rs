//! Analysis coordination.
//!
//! This module ties ingestion, normalization and the rule detectors together.
//! [`analyze`] is the pure core over a record sequence; the `analyze_*`
//! pipeline functions accept raw rows, readers or file paths and wrap the
//! outcome in an [`AnalysisReport`](crate::models::AnalysisReport).

mod coordinator;
mod pipeline;

pub use coordinator::{analyze, sorted_by_employee_then_time};
pub use pipeline::{analyze_file, analyze_reader, analyze_rows, analyze_table};
