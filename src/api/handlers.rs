//! HTTP request handlers for the Hours Allocation Engine API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::allocation::{allocate_batch, summarize};
use crate::models::{FactorTable, LaborTable, RosterTable};

use super::request::AllocationRequest;
use super::response::{AllocationResponse, ApiError};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/allocate", post(allocate_handler))
        .with_state(state)
}

/// Handler for POST /allocate.
///
/// Accepts the four materialized input tables and returns the allocation
/// records plus the validation summary. The core never rejects a malformed
/// row; only an unparseable request body produces an error response.
async fn allocate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AllocationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing allocation request");

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
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
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

    let rules = state.config().rules();
    let factors = FactorTable::from_rows(request.factors);
    let roster = RosterTable::from_entries(request.roster);
    let labor = LaborTable::from_entries(request.labor_codes);

    let start_time = Instant::now();
    let records = allocate_batch(&request.timesheet, &factors, &roster, &labor, rules);
    let validation = summarize(&records);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        timesheet_rows = request.timesheet.len(),
        records = records.len(),
        factor_keys = factors.len(),
        duration_us = duration.as_micros(),
        "Allocation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(AllocationResponse {
            records,
            validation,
        }),
    )
        .into_response()
}
