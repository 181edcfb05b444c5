//! Configuration types for attendance analysis.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every type has a
//! `Default` matching the built-in compliance thresholds, so an analysis can
//! run without any configuration on disk.

use serde::{Deserialize, Serialize};

/// How the consecutive-days rule decides that days are consecutive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsecutiveDaysMode {
    /// Distinct calendar dates of the employee's shifts form an unbroken run.
    #[default]
    CalendarDates,
    /// A window of consecutive rows across the whole file belongs entirely to
    /// the employee. Kept for output compatibility with row-per-day exports.
    RowWindow,
}

/// Ordering of the record sequence handed to the shift-gap rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftGapOrdering {
    /// Stable sort by employee name, then by timestamp.
    #[default]
    EmployeeThenTime,
    /// Rows exactly as they appear in the source.
    FileOrder,
}

/// How an `H:MM` hours-worked field becomes minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationMode {
    /// Only the hour component counts; minutes are truncated.
    #[default]
    WholeHours,
    /// Hours and minutes both count.
    HoursAndMinutes,
}

/// Settings for the consecutive-days rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsecutiveDaysConfig {
    /// Number of consecutive days that triggers the rule.
    #[serde(default = "default_threshold_days")]
    pub threshold_days: usize,
    /// Run detection strategy.
    #[serde(default)]
    pub mode: ConsecutiveDaysMode,
}

impl Default for ConsecutiveDaysConfig {
    fn default() -> Self {
        Self {
            threshold_days: default_threshold_days(),
            mode: ConsecutiveDaysMode::default(),
        }
    }
}

fn default_threshold_days() -> usize {
    7
}

/// Settings for the shift-gap rule. Both bounds are exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftGapConfig {
    /// Gaps must be strictly longer than this many minutes.
    #[serde(default = "default_min_gap")]
    pub min_minutes: i64,
    /// Gaps must be strictly shorter than this many minutes.
    #[serde(default = "default_max_gap")]
    pub max_minutes: i64,
    /// Ordering applied before adjacent pairs are compared.
    #[serde(default)]
    pub ordering: ShiftGapOrdering,
}

impl Default for ShiftGapConfig {
    fn default() -> Self {
        Self {
            min_minutes: default_min_gap(),
            max_minutes: default_max_gap(),
            ordering: ShiftGapOrdering::default(),
        }
    }
}

fn default_min_gap() -> i64 {
    60
}

fn default_max_gap() -> i64 {
    600
}

/// Settings for the long-shift rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongShiftConfig {
    /// Shifts strictly longer than this many minutes trigger the rule.
    #[serde(default = "default_max_shift")]
    pub max_minutes: i64,
    /// Parsing of the hours-worked column.
    #[serde(default)]
    pub duration_mode: DurationMode,
}

impl Default for LongShiftConfig {
    fn default() -> Self {
        Self {
            max_minutes: default_max_shift(),
            duration_mode: DurationMode::default(),
        }
    }
}

fn default_max_shift() -> i64 {
    840
}

/// Rule settings (`rules.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Consecutive-days rule.
    #[serde(default)]
    pub consecutive_days: ConsecutiveDaysConfig,
    /// Shift-gap rule.
    #[serde(default)]
    pub shift_gap: ShiftGapConfig,
    /// Long-shift rule.
    #[serde(default)]
    pub long_shift: LongShiftConfig,
}

/// Header names of the required attendance columns (`columns.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Header of the employee name column.
    #[serde(default = "default_employee_column")]
    pub employee_name: String,
    /// Header of the shift start date-time column.
    #[serde(default = "default_time_column")]
    pub time: String,
    /// Header of the hours-worked column.
    #[serde(default = "default_duration_column")]
    pub shift_duration: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            employee_name: default_employee_column(),
            time: default_time_column(),
            shift_duration: default_duration_column(),
        }
    }
}

fn default_employee_column() -> String {
    "Employee Name".to_string()
}

fn default_time_column() -> String {
    "Time".to_string()
}

fn default_duration_column() -> String {
    "Timecard Hours (as Time)".to_string()
}

/// The complete analysis configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Rule thresholds and modes.
    pub rules: RuleConfig,
    /// Column header names.
    pub columns: ColumnConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_compliance_thresholds() {
        let config = AnalysisConfig::default();
        assert_eq!(config.rules.consecutive_days.threshold_days, 7);
        assert_eq!(
            config.rules.consecutive_days.mode,
            ConsecutiveDaysMode::CalendarDates
        );
        assert_eq!(config.rules.shift_gap.min_minutes, 60);
        assert_eq!(config.rules.shift_gap.max_minutes, 600);
        assert_eq!(
            config.rules.shift_gap.ordering,
            ShiftGapOrdering::EmployeeThenTime
        );
        assert_eq!(config.rules.long_shift.max_minutes, 840);
        assert_eq!(config.rules.long_shift.duration_mode, DurationMode::WholeHours);
        assert_eq!(config.columns.employee_name, "Employee Name");
        assert_eq!(config.columns.time, "Time");
        assert_eq!(config.columns.shift_duration, "Timecard Hours (as Time)");
    }

    #[test]
    fn test_partial_rules_yaml_fills_defaults() {
        let yaml = r#"
consecutive_days:
  mode: row_window
long_shift:
  duration_mode: hours_and_minutes
"#;
        let rules: RuleConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rules.consecutive_days.mode, ConsecutiveDaysMode::RowWindow);
        assert_eq!(rules.consecutive_days.threshold_days, 7);
        assert_eq!(rules.shift_gap, ShiftGapConfig::default());
        assert_eq!(
            rules.long_shift.duration_mode,
            DurationMode::HoursAndMinutes
        );
        assert_eq!(rules.long_shift.max_minutes, 840);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let yaml = "consecutive_days:\n  mode: fortnightly\n";
        let result: Result<RuleConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
