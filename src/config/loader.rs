//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading analysis
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AuditError, AuditResult};

use super::types::{AnalysisConfig, ColumnConfig, RuleConfig};

/// Loads and validates analysis configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// checks that the rule thresholds are usable before handing them out.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── rules.yaml    # Rule thresholds and compatibility modes
/// └── columns.yaml  # Header names of the required CSV columns
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_audit::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Long shift threshold: {} min", loader.rules().long_shift.max_minutes);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AnalysisConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing ([`AuditError::ConfigNotFound`])
    /// - Either file contains invalid YAML ([`AuditError::ConfigParseError`])
    /// - A threshold is out of range ([`AuditError::InvalidConfig`])
    pub fn load<P: AsRef<Path>>(path: P) -> AuditResult<Self> {
        let path = path.as_ref();

        let rules = Self::load_yaml::<RuleConfig>(&path.join("rules.yaml"))?;
        let columns = Self::load_yaml::<ColumnConfig>(&path.join("columns.yaml"))?;

        let config = AnalysisConfig { rules, columns };
        Self::validate(&config)?;

        debug!(path = %path.display(), "Loaded analysis configuration");
        Ok(Self { config })
    }

    /// Wraps an in-memory configuration after validating it.
    pub fn from_config(config: AnalysisConfig) -> AuditResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> AuditResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AuditError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AuditError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &AnalysisConfig) -> AuditResult<()> {
        let rules = &config.rules;

        if rules.consecutive_days.threshold_days == 0 {
            return Err(AuditError::InvalidConfig {
                message: "consecutive_days.threshold_days must be at least 1".to_string(),
            });
        }

        if rules.shift_gap.min_minutes >= rules.shift_gap.max_minutes {
            return Err(AuditError::InvalidConfig {
                message: format!(
                    "shift_gap.min_minutes ({}) must be below shift_gap.max_minutes ({})",
                    rules.shift_gap.min_minutes, rules.shift_gap.max_minutes
                ),
            });
        }

        if rules.long_shift.max_minutes < 0 {
            return Err(AuditError::InvalidConfig {
                message: "long_shift.max_minutes cannot be negative".to_string(),
            });
        }

        let columns = &config.columns;
        for (key, header) in [
            ("employee_name", &columns.employee_name),
            ("time", &columns.time),
            ("shift_duration", &columns.shift_duration),
        ] {
            if header.trim().is_empty() {
                return Err(AuditError::InvalidConfig {
                    message: format!("columns.{} cannot be empty", key),
                });
            }
        }

        Ok(())
    }

    /// Returns the underlying analysis configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Returns the rule settings.
    pub fn rules(&self) -> &RuleConfig {
        &self.config.rules
    }

    /// Returns the column header names.
    pub fn columns(&self) -> &ColumnConfig {
        &self.config.columns
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AnalysisConfig {
        self.config
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }
}
