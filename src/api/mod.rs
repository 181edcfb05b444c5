//! HTTP API module for the attendance audit engine.
//!
//! This module provides REST endpoints that run an analysis over attendance
//! rows posted as JSON or as raw CSV text.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AnalysisRequest, RecordRequest};
pub use response::ApiError;
pub use state::AppState;
