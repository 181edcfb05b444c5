//! Core data models for the attendance audit engine.
//!
//! This module contains all the domain models used throughout the engine.

mod analysis_report;
mod attendance_record;
mod rule_result;

pub use analysis_report::{AnalysisReport, SkippedRow};
pub use attendance_record::AttendanceRecord;
pub use rule_result::{AnalysisOutcome, Rule, RuleFinding, RuleResult};
