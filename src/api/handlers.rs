//! HTTP request handlers for the Wage Gap Resolution Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{five_year_impact, project_impact, resolve};
use crate::models::AnalysisInput;
use crate::provider::acquire_estimate;

use super::request::AnalyzeRequest;
use super::response::{
    AnalysisResponse, ApiError, ApiErrorResponse, HealthResponse, InflationYear, ReferenceResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .route("/reference", get(reference_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        reference_version: state.reference().metadata().version.clone(),
        market_data_provider: state.provider().map(|p| p.provider_name().to_string()),
    })
}

/// Handler for GET /reference.
///
/// Lists the jobs, locations and base years the reference tables cover.
async fn reference_handler(State(state): State<AppState>) -> Json<ReferenceResponse> {
    let reference = state.reference();
    let metadata = reference.metadata();

    Json(ReferenceResponse {
        name: metadata.name.clone(),
        version: metadata.version.clone(),
        reference_year: metadata.reference_year,
        source_url: metadata.source_url.clone(),
        jobs: reference.jobs().into_iter().map(str::to_string).collect(),
        locations: reference.locations().into_iter().map(str::to_string).collect(),
        years: reference
            .inflation_years()
            .into_iter()
            .map(|(year, cumulative_inflation)| InflationYear {
                year,
                cumulative_inflation,
            })
            .collect(),
    })
}

/// Handler for POST /analyze.
///
/// Validates the request, makes one best-effort attempt at a live market
/// estimate, and resolves the analysis. Provider failures never fail the
/// request; they surface as a `notice` on a 200 response.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis request");

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
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let projection_years = match request.projection_years() {
        Ok(years) => years,
        Err(err) => return error_response(correlation_id, err.into()),
    };

    let input: AnalysisInput = request.into();
    if let Err(err) = input.validate() {
        return error_response(correlation_id, err.into());
    }

    let start_time = Instant::now();
    let outcome = acquire_estimate(state.provider(), &input).await;
    let result = resolve(&input, outcome.estimate.as_ref(), state.reference());
    let projection = project_impact(&result, projection_years);
    let five_year_impact = five_year_impact(&result);
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        correlation_id = %correlation_id,
        job = %input.job,
        location = %input.location,
        primary_benchmark = result.primary_benchmark.as_str(),
        total_impact = %result.total_impact,
        fallback = outcome.notice.is_some(),
        duration_us,
        "Analysis completed successfully"
    );

    let response = AnalysisResponse {
        analysis_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        reference_version: state.reference().metadata().version.clone(),
        notice: outcome.notice,
        result,
        projection,
        five_year_impact,
        duration_us,
    };
    json_response(StatusCode::OK, response)
}

fn error_response(correlation_id: Uuid, api_error: ApiErrorResponse) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = %api_error.error.code,
        message = %api_error.error.message,
        "Analysis rejected"
    );
    api_error.into_response()
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
