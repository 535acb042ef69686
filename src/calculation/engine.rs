//! The wage gap resolution entry point.

use tracing::debug;

use crate::config::ReferenceData;
use crate::models::{AnalysisInput, AnalysisResult, ExternalEstimate};

use super::benchmark_resolver::resolve_benchmarks;
use super::gap_calculator::calculate_gaps;
use super::year_context::resolve_year_context;

fn display_name(standard: Option<&str>, raw: &str) -> String {
    standard
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(raw)
        .to_string()
}

/// Resolves a complete wage gap analysis.
///
/// Pure and total: performs no I/O, never fails, and returns the same result
/// for the same arguments. Any external estimate must be acquired and
/// validated by the caller beforehand; pass `None` when there is none.
///
/// # Examples
///
/// ```no_run
/// use wage_gap_engine::calculation::resolve;
/// use wage_gap_engine::config::ReferenceLoader;
/// use wage_gap_engine::models::{AnalysisInput, PrimaryBenchmark};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let reference = ReferenceLoader::load("./config/reference")?.into_data();
/// let input = AnalysisInput {
///     wage: Decimal::from_str("22.50").unwrap(),
///     year: 2021,
///     job: "Retail Supervisor".to_string(),
///     location: "Chicago, IL".to_string(),
///     hours_per_week: Decimal::from(40),
///     was_promotion: false,
/// };
///
/// let result = resolve(&input, None, &reference);
/// assert_eq!(result.primary_benchmark, PrimaryBenchmark::Market);
/// # Ok::<(), wage_gap_engine::error::EngineError>(())
/// ```
pub fn resolve(
    input: &AnalysisInput,
    estimate: Option<&ExternalEstimate>,
    reference: &ReferenceData,
) -> AnalysisResult {
    let mut step_number: u32 = 1;

    let benchmarks = resolve_benchmarks(input, estimate, reference, step_number);
    step_number += benchmarks.step_count();

    let gaps = calculate_gaps(input, &benchmarks, step_number);
    step_number += gaps.audit_steps.len() as u32;

    let year_context = resolve_year_context(input.year, estimate, reference, step_number);

    let mut audit_trace = benchmarks.audit_steps();
    audit_trace.extend(gaps.audit_steps);
    audit_trace.push(year_context.audit_step);

    debug!(
        inflation_source = ?benchmarks.inflation.source,
        market_source = ?benchmarks.market.source,
        primary_benchmark = gaps.primary_benchmark.as_str(),
        total_gap = %gaps.total_gap,
        "Resolved wage gap analysis"
    );

    AnalysisResult {
        wage: input.wage,
        year: input.year,
        job: display_name(estimate.and_then(|e| e.standard_job.as_deref()), &input.job),
        location: display_name(
            estimate.and_then(|e| e.standard_location.as_deref()),
            &input.location,
        ),
        hours_per_week: input.hours_per_week,
        was_promotion: input.was_promotion,
        annual_working_hours: gaps.annual_working_hours,

        inflation_rate: benchmarks.inflation.rate,
        inflation_source: benchmarks.inflation.source,
        inflation_adjusted_wage: benchmarks.inflation.adjusted_wage,

        raw_market_rate: benchmarks.market.raw_market_rate,
        market_rate_source: benchmarks.market.source,
        market_adjustment_percent: benchmarks.market.adjustment_percent,
        current_market_rate: benchmarks.market.current_market_rate,

        inflation_gap: gaps.inflation_gap,
        market_gap: gaps.market_gap,
        total_gap: gaps.total_gap,

        inflation_impact: gaps.inflation_impact,
        market_impact: gaps.market_impact,
        total_impact: gaps.total_impact,

        target_wage: gaps.target_wage,
        primary_benchmark: gaps.primary_benchmark,

        year_context: year_context.context,
        ai_explanation: estimate.and_then(|e| e.explanation.clone()),

        audit_trace,
    }
}
