//! Gap calculation functionality.
//!
//! This module derives the three wage gaps and their annualized impact from
//! resolved benchmarks, and applies the target-wage selection policy.

use rust_decimal::Decimal;

use crate::models::{AnalysisInput, AuditStep, PrimaryBenchmark};

use super::benchmark_resolver::ResolvedBenchmarks;

/// The selected target wage, including the audit step.
#[derive(Debug, Clone)]
pub struct TargetWageSelection {
    /// The operative target wage.
    pub target_wage: Decimal,
    /// Which benchmark produced it.
    pub primary_benchmark: PrimaryBenchmark,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Selects the target wage from the two benchmarks.
///
/// After a promotion the wage was deliberately reset, so only the market
/// rate is relevant and the benchmark is [`PrimaryBenchmark::MarketOnly`].
/// Otherwise the higher of the two benchmarks is the target; an exact tie
/// goes to [`PrimaryBenchmark::Inflation`].
///
/// # Examples
///
/// ```
/// use wage_gap_engine::calculation::select_target_wage;
/// use wage_gap_engine::models::PrimaryBenchmark;
/// use rust_decimal::Decimal;
///
/// let selection = select_target_wage(Decimal::from(25), Decimal::from(25), false, 1);
/// assert_eq!(selection.primary_benchmark, PrimaryBenchmark::Inflation);
/// ```
pub fn select_target_wage(
    inflation_adjusted_wage: Decimal,
    current_market_rate: Decimal,
    was_promotion: bool,
    step_number: u32,
) -> TargetWageSelection {
    let (target_wage, primary_benchmark) = if was_promotion {
        (current_market_rate, PrimaryBenchmark::MarketOnly)
    } else if inflation_adjusted_wage >= current_market_rate {
        (inflation_adjusted_wage, PrimaryBenchmark::Inflation)
    } else {
        (current_market_rate, PrimaryBenchmark::Market)
    };

    let reasoning = match primary_benchmark {
        PrimaryBenchmark::MarketOnly => format!(
            "Last change was a promotion; targeting market rate ${}",
            current_market_rate.normalize()
        ),
        PrimaryBenchmark::Inflation => format!(
            "Inflation parity ${} >= market rate ${}; targeting inflation parity",
            inflation_adjusted_wage.normalize(),
            current_market_rate.normalize()
        ),
        PrimaryBenchmark::Market => format!(
            "Market rate ${} > inflation parity ${}; targeting market rate",
            current_market_rate.normalize(),
            inflation_adjusted_wage.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "target_wage_selection".to_string(),
        rule_name: "Target Wage Selection".to_string(),
        input: serde_json::json!({
            "inflation_adjusted_wage": inflation_adjusted_wage.normalize().to_string(),
            "current_market_rate": current_market_rate.normalize().to_string(),
            "was_promotion": was_promotion
        }),
        output: serde_json::json!({
            "target_wage": target_wage.normalize().to_string(),
            "primary_benchmark": primary_benchmark
        }),
        reasoning,
    };

    TargetWageSelection {
        target_wage,
        primary_benchmark,
        audit_step,
    }
}

/// Gap and impact figures for an analysis, including audit steps.
#[derive(Debug, Clone)]
pub struct GapCalculation {
    /// `hours_per_week × 52`.
    pub annual_working_hours: Decimal,
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
    /// Which benchmark produced the target wage.
    pub primary_benchmark: PrimaryBenchmark,
    /// Audit steps for target selection and annualization.
    pub audit_steps: Vec<AuditStep>,
}

/// Derives gaps and annualized impacts from resolved benchmarks.
///
/// Gaps are benchmark minus wage and are never clamped: a negative gap means
/// the worker is already ahead of that benchmark.
pub fn calculate_gaps(
    input: &AnalysisInput,
    benchmarks: &ResolvedBenchmarks,
    step_number: u32,
) -> GapCalculation {
    let inflation_adjusted_wage = benchmarks.inflation.adjusted_wage;
    let current_market_rate = benchmarks.market.current_market_rate;

    let inflation_gap = inflation_adjusted_wage - input.wage;
    let market_gap = current_market_rate - input.wage;

    let selection = select_target_wage(
        inflation_adjusted_wage,
        current_market_rate,
        input.was_promotion,
        step_number,
    );
    let total_gap = selection.target_wage - input.wage;

    let annual_working_hours = input.annual_working_hours();
    let inflation_impact = inflation_gap * annual_working_hours;
    let market_impact = market_gap * annual_working_hours;
    let total_impact = total_gap * annual_working_hours;

    let annualization_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "gap_annualization".to_string(),
        rule_name: "Annual Gap Impact".to_string(),
        input: serde_json::json!({
            "wage": input.wage.normalize().to_string(),
            "hours_per_week": input.hours_per_week.normalize().to_string(),
            "annual_working_hours": annual_working_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "inflation_gap": inflation_gap.normalize().to_string(),
            "market_gap": market_gap.normalize().to_string(),
            "total_gap": total_gap.normalize().to_string(),
            "inflation_impact": inflation_impact.normalize().to_string(),
            "market_impact": market_impact.normalize().to_string(),
            "total_impact": total_impact.normalize().to_string()
        }),
        reasoning: format!(
            "${} x {} hours = ${} per year",
            total_gap.normalize(),
            annual_working_hours.normalize(),
            total_impact.normalize()
        ),
    };

    GapCalculation {
        annual_working_hours,
        inflation_gap,
        market_gap,
        total_gap,
        inflation_impact,
        market_impact,
        total_impact,
        target_wage: selection.target_wage,
        primary_benchmark: selection.primary_benchmark,
        audit_steps: vec![selection.audit_step, annualization_step],
    }
}
