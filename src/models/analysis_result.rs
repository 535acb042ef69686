//! Analysis result models for the Wage Gap Resolution Engine.
//!
//! This module contains the [`AnalysisResult`] type and its associated
//! structures that capture every output of a wage gap analysis, including
//! the benchmark provenance and an audit trace of each selection decision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which benchmark was selected as the target wage.
///
/// # Example
///
/// ```
/// use wage_gap_engine::models::PrimaryBenchmark;
///
/// let json = serde_json::to_string(&PrimaryBenchmark::MarketOnly).unwrap();
/// assert_eq!(json, "\"market-only\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimaryBenchmark {
    /// Inflation parity was the higher (or equal) benchmark.
    Inflation,
    /// The current market rate was strictly higher.
    Market,
    /// The last wage change was a promotion; only the market rate applies.
    MarketOnly,
}

impl PrimaryBenchmark {
    /// The wire tag for this benchmark.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryBenchmark::Inflation => "inflation",
            PrimaryBenchmark::Market => "market",
            PrimaryBenchmark::MarketOnly => "market-only",
        }
    }
}

/// Where the applied inflation rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InflationSource {
    /// The external estimate supplied a rate.
    ExternalEstimate,
    /// The cumulative inflation table had a row for the input year.
    StaticTable,
    /// Neither source had a value; no adjustment was applied.
    None,
}

/// Where the raw market rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketRateSource {
    /// A live, non-zero quote from the external estimate.
    ExternalEstimate,
    /// The market wage table for the job and location.
    StaticTable,
    /// The fixed safety-fallback rate.
    SafetyFallback,
}

impl MarketRateSource {
    /// Whether the rate is already current and needs no projection.
    pub fn is_live(&self) -> bool {
        matches!(self, MarketRateSource::ExternalEstimate)
    }
}

/// A single step in the audit trace recording a resolution decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete, immutable result of a wage gap analysis.
///
/// All gap and impact values follow one sign convention: positive means the
/// benchmark exceeds the current wage (the worker is underpaid against it),
/// negative means the current wage is already ahead of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Current hourly wage.
    pub wage: Decimal,
    /// Year of the last wage-setting event.
    pub year: i32,
    /// Job title for display (normalized by the estimate when available).
    pub job: String,
    /// Location for display (normalized by the estimate when available).
    pub location: String,
    /// Scheduled hours per week.
    pub hours_per_week: Decimal,
    /// Whether the last wage change was a promotion.
    pub was_promotion: bool,
    /// `hours_per_week × 52`.
    pub annual_working_hours: Decimal,

    /// Inflation percent applied to the wage.
    pub inflation_rate: Decimal,
    /// Where `inflation_rate` came from.
    pub inflation_source: InflationSource,
    /// Wage that would have kept pace with inflation.
    pub inflation_adjusted_wage: Decimal,

    /// Market rate before any current-year adjustment.
    pub raw_market_rate: Decimal,
    /// Where `raw_market_rate` came from.
    pub market_rate_source: MarketRateSource,
    /// Current-year adjustment percent applied to the raw market rate.
    pub market_adjustment_percent: Decimal,
    /// Market rate projected to the reference year.
    pub current_market_rate: Decimal,

    /// `inflation_adjusted_wage − wage`.
    pub inflation_gap: Decimal,
    /// `current_market_rate − wage`.
    pub market_gap: Decimal,
    /// `target_wage − wage`.
    pub total_gap: Decimal,

    /// `inflation_gap × annual_working_hours`.
    pub inflation_impact: Decimal,
    /// `market_gap × annual_working_hours`.
    pub market_impact: Decimal,
    /// `total_gap × annual_working_hours`.
    pub total_impact: Decimal,

    /// The operative target wage.
    pub target_wage: Decimal,
    /// Which benchmark produced `target_wage`.
    pub primary_benchmark: PrimaryBenchmark,

    /// Economic summary of `year`; never empty.
    pub year_context: String,
    /// Methodology note from the external estimate, if one was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_explanation: Option<String>,

    /// Every resolution decision, in order.
    pub audit_trace: Vec<AuditStep>,
}

/// Cumulative impact of the current gaps after a number of years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactProjection {
    /// Years from now (0 is the present).
    pub year: u32,
    /// `total_impact × year`.
    pub cumulative_total: Decimal,
    /// `inflation_impact × year`.
    pub cumulative_inflation: Decimal,
    /// `market_impact × year`.
    pub cumulative_market: Decimal,
}
