//! HTTP request handlers for the attendance audit API.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{analyze_reader, analyze_table};
use crate::error::AuditResult;
use crate::ingest::RawTable;
use crate::models::AnalysisReport;

use super::request::AnalysisRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/analyze/csv", post(analyze_csv_handler))
        .with_state(state)
}

/// Handler for POST /analyze.
///
/// Accepts attendance rows as JSON and returns the analysis report.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing JSON analysis request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let config = state.config();
    let table = RawTable::from_rows(request.into_rows(&config.columns));

    let start_time = Instant::now();
    let result = analyze_table(&table, "request", config);
    respond(result, correlation_id, start_time)
}

/// Handler for POST /analyze/csv.
///
/// Accepts a raw CSV body with a header row and returns the analysis report.
async fn analyze_csv_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        bytes = body.len(),
        "Processing CSV analysis request"
    );

    let start_time = Instant::now();
    let result = analyze_reader(body.as_ref(), "upload", state.config());
    respond(result, correlation_id, start_time)
}

fn respond(
    result: AuditResult<AnalysisReport>,
    correlation_id: Uuid,
    start_time: Instant,
) -> Response {
    match result {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                analysis_id = %report.id,
                records = report.records_analyzed,
                duration_us = start_time.elapsed().as_micros(),
                "Analysis completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Analysis failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
