//! Core data models for the Wage Gap Resolution Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod analysis_input;
mod analysis_result;
mod external_estimate;

pub use analysis_input::{AnalysisInput, MAX_HOURLY_WAGE, MAX_HOURS_PER_WEEK, WEEKS_PER_YEAR};
pub use analysis_result::{
    AnalysisResult, AuditStep, ImpactProjection, InflationSource, MarketRateSource,
    PrimaryBenchmark,
};
pub use external_estimate::ExternalEstimate;
