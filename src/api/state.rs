//! Application state for the attendance audit API.

use std::sync::Arc;

use crate::config::{AnalysisConfig, ConfigLoader};

/// Shared application state.
///
/// Holds the immutable analysis configuration; every request runs its own
/// analysis against it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AnalysisConfig>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(loader: ConfigLoader) -> Self {
        Self {
            config: Arc::new(loader.into_config()),
        }
    }

    /// Returns the analysis configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
}
