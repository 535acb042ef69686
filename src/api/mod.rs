//! HTTP API module for the Wage Gap Resolution Engine.
//!
//! Exposes `POST /analyze`, `GET /reference` and `GET /health` over axum.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AnalyzeRequest;
pub use response::{
    AnalysisResponse, ApiError, ApiErrorResponse, HealthResponse, InflationYear, ReferenceResponse,
};
pub use state::AppState;
