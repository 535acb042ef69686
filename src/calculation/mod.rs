//! Calculation logic for the Wage Gap Resolution Engine.
//!
//! This module contains the benchmark resolver (inflation parity wage and
//! current market rate), the gap calculator (gaps, annualized impact and
//! target-wage selection), year context resolution, cumulative impact
//! projection, and the [`resolve`] entry point that composes them.

mod benchmark_resolver;
mod engine;
mod gap_calculator;
mod projection;
mod year_context;

pub use benchmark_resolver::{
    DEFAULT_MARKET_ADJUSTMENT_PERCENT, InflationAdjustmentResult, MarketRateResult,
    ResolvedBenchmarks, SAFETY_FALLBACK_MARKET_RATE, apply_percent, resolve_benchmarks,
    resolve_inflation_adjustment, resolve_market_rate,
};
pub use engine::resolve;
pub use gap_calculator::{GapCalculation, TargetWageSelection, calculate_gaps, select_target_wage};
pub use projection::{
    DEFAULT_PROJECTION_YEARS, MAX_PROJECTION_YEARS, five_year_impact, project_impact,
};
pub use year_context::{GENERIC_YEAR_CONTEXT, YearContextResult, resolve_year_context};
