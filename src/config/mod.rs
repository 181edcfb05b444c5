//! Configuration loading and management for the attendance audit engine.
//!
//! This module loads rule thresholds, compatibility modes and column header
//! names from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_audit::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Gap window: {:?}", config.rules().shift_gap);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AnalysisConfig, ColumnConfig, ConsecutiveDaysConfig, ConsecutiveDaysMode, DurationMode,
    LongShiftConfig, RuleConfig, ShiftGapConfig, ShiftGapOrdering,
};
