//! Request types for the Wage Gap Resolution Engine API.
//!
//! This module defines the JSON request structure for the `/analyze` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DEFAULT_PROJECTION_YEARS, MAX_PROJECTION_YEARS};
use crate::error::{EngineError, EngineResult};
use crate::models::AnalysisInput;

/// Request body for the `/analyze` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Current hourly wage.
    pub wage: Decimal,
    /// Year of the last raise or promotion.
    pub year: i32,
    /// Job title.
    pub job: String,
    /// Location.
    pub location: String,
    /// Scheduled hours per week.
    pub hours_per_week: Decimal,
    /// Whether the last wage change was a promotion.
    #[serde(default)]
    pub was_promotion: bool,
    /// Projection horizon in years (defaults to five).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection_years: Option<u32>,
}

impl AnalyzeRequest {
    /// The requested projection horizon, validated.
    pub fn projection_years(&self) -> EngineResult<u32> {
        let years = self.projection_years.unwrap_or(DEFAULT_PROJECTION_YEARS);
        if years > MAX_PROJECTION_YEARS {
            return Err(EngineError::invalid_input(
                "projection_years",
                format!("must not exceed {}", MAX_PROJECTION_YEARS),
            ));
        }
        Ok(years)
    }
}

impl From<AnalyzeRequest> for AnalysisInput {
    fn from(req: AnalyzeRequest) -> Self {
        AnalysisInput {
            wage: req.wage,
            year: req.year,
            job: req.job,
            location: req.location,
            hours_per_week: req.hours_per_week,
            was_promotion: req.was_promotion,
        }
    }
}
