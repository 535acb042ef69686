//! Benchmark resolution functionality.
//!
//! This module determines the two comparison wages for an analysis: the
//! inflation-adjusted parity wage and the current market rate. Each is taken
//! from the external estimate when it has a usable value and from the static
//! reference tables otherwise. Every missing value degrades to a documented
//! fallback, so resolution never fails.

use rust_decimal::Decimal;

use crate::config::ReferenceData;
use crate::models::{AnalysisInput, AuditStep, ExternalEstimate, InflationSource, MarketRateSource};

/// Hourly market rate used when neither the estimate nor the market table has a value.
pub const SAFETY_FALLBACK_MARKET_RATE: Decimal = Decimal::from_parts(1850, 0, 0, false, 2);

/// Current-year adjustment percent used when the reference year has no annual inflation row.
pub const DEFAULT_MARKET_ADJUSTMENT_PERCENT: Decimal = Decimal::from_parts(29, 0, 0, false, 1);

/// Scales `amount` up by `percent` percent.
///
/// # Examples
///
/// ```
/// use wage_gap_engine::calculation::apply_percent;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let adjusted = apply_percent(Decimal::from_str("28.00").unwrap(), Decimal::from_str("2.9").unwrap());
/// assert_eq!(adjusted, Decimal::from_str("28.812").unwrap());
/// ```
pub fn apply_percent(amount: Decimal, percent: Decimal) -> Decimal {
    amount * (Decimal::ONE + percent / Decimal::ONE_HUNDRED)
}

/// The resolved inflation benchmark, including the audit step.
#[derive(Debug, Clone)]
pub struct InflationAdjustmentResult {
    /// The inflation percent applied.
    pub rate: Decimal,
    /// Where the rate came from.
    pub source: InflationSource,
    /// `wage × (1 + rate / 100)`.
    pub adjusted_wage: Decimal,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves the inflation-adjusted parity wage.
///
/// The rate is selected in this order:
/// 1. The estimate's inflation rate, used exactly when present (zero included)
/// 2. The cumulative inflation table row for the input year
/// 3. Zero, meaning no adjustment
pub fn resolve_inflation_adjustment(
    input: &AnalysisInput,
    estimate: Option<&ExternalEstimate>,
    reference: &ReferenceData,
    step_number: u32,
) -> InflationAdjustmentResult {
    let (rate, source) = match estimate.and_then(|e| e.inflation_rate) {
        Some(rate) => (rate, InflationSource::ExternalEstimate),
        None => match reference.cumulative_inflation(input.year) {
            Some(rate) => (rate, InflationSource::StaticTable),
            None => (Decimal::ZERO, InflationSource::None),
        },
    };

    let adjusted_wage = apply_percent(input.wage, rate);

    let reasoning = match source {
        InflationSource::ExternalEstimate => format!(
            "External estimate reports {}% inflation since {}: ${} x {} = ${}",
            rate.normalize(),
            input.year,
            input.wage.normalize(),
            (Decimal::ONE + rate / Decimal::ONE_HUNDRED).normalize(),
            adjusted_wage.normalize()
        ),
        InflationSource::StaticTable => format!(
            "Reference table reports {}% inflation since {}: ${} x {} = ${}",
            rate.normalize(),
            input.year,
            input.wage.normalize(),
            (Decimal::ONE + rate / Decimal::ONE_HUNDRED).normalize(),
            adjusted_wage.normalize()
        ),
        InflationSource::None => format!(
            "No inflation data for {}; wage ${} left unadjusted",
            input.year,
            input.wage.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "inflation_adjustment".to_string(),
        rule_name: "Inflation Parity Wage".to_string(),
        input: serde_json::json!({
            "wage": input.wage.normalize().to_string(),
            "year": input.year,
            "estimate_rate": estimate
                .and_then(|e| e.inflation_rate)
                .map(|r| r.normalize().to_string())
        }),
        output: serde_json::json!({
            "rate": rate.normalize().to_string(),
            "source": source,
            "inflation_adjusted_wage": adjusted_wage.normalize().to_string()
        }),
        reasoning,
    };

    InflationAdjustmentResult {
        rate,
        source,
        adjusted_wage,
        audit_step,
    }
}

/// The resolved market benchmark, including audit steps.
#[derive(Debug, Clone)]
pub struct MarketRateResult {
    /// The market rate before any current-year adjustment.
    pub raw_market_rate: Decimal,
    /// Where the raw rate came from.
    pub source: MarketRateSource,
    /// The current-year adjustment percent applied.
    pub adjustment_percent: Decimal,
    /// `raw_market_rate × (1 + adjustment_percent / 100)`.
    pub current_market_rate: Decimal,
    /// Audit steps for source selection and the current-year adjustment.
    pub audit_steps: Vec<AuditStep>,
}

/// Resolves the raw and current market rate.
///
/// The raw rate is selected in strict precedence order:
/// 1. A live (non-zero) market rate from the estimate
/// 2. The market wage table row for the input's job and location
/// 3. [`SAFETY_FALLBACK_MARKET_RATE`]
///
/// A live quote is already current and is not adjusted. Any other rate is
/// projected to the reference year by that year's annual inflation, or by
/// [`DEFAULT_MARKET_ADJUSTMENT_PERCENT`] when the year has no row.
///
/// The table is always keyed by the caller's raw job and location, never by
/// the estimate's normalized names.
pub fn resolve_market_rate(
    input: &AnalysisInput,
    estimate: Option<&ExternalEstimate>,
    reference: &ReferenceData,
    step_number: u32,
) -> MarketRateResult {
    let (raw_market_rate, source) = match estimate.and_then(ExternalEstimate::live_market_rate) {
        Some(rate) => (rate, MarketRateSource::ExternalEstimate),
        None => match reference.market_wage(&input.job, &input.location) {
            Some(rate) => (rate, MarketRateSource::StaticTable),
            None => (SAFETY_FALLBACK_MARKET_RATE, MarketRateSource::SafetyFallback),
        },
    };

    let selection_reasoning = match source {
        MarketRateSource::ExternalEstimate => format!(
            "Using live market quote ${} for '{}' in '{}'",
            raw_market_rate.normalize(),
            input.job,
            input.location
        ),
        MarketRateSource::StaticTable => format!(
            "No live quote; reference table rate for '{}' in '{}' is ${}",
            input.job,
            input.location,
            raw_market_rate.normalize()
        ),
        MarketRateSource::SafetyFallback => format!(
            "No live quote or reference rate for '{}' in '{}'; using safety fallback ${}",
            input.job,
            input.location,
            raw_market_rate.normalize()
        ),
    };

    let selection_step = AuditStep {
        step_number,
        rule_id: "market_rate_selection".to_string(),
        rule_name: "Market Rate Selection".to_string(),
        input: serde_json::json!({
            "job": input.job,
            "location": input.location,
            "estimate_rate": estimate
                .and_then(|e| e.market_rate)
                .map(|r| r.normalize().to_string())
        }),
        output: serde_json::json!({
            "raw_market_rate": raw_market_rate.normalize().to_string(),
            "source": source
        }),
        reasoning: selection_reasoning,
    };

    let reference_year = reference.reference_year();
    let adjustment_percent = if source.is_live() {
        Decimal::ZERO
    } else {
        reference
            .annual_inflation(reference_year)
            .unwrap_or(DEFAULT_MARKET_ADJUSTMENT_PERCENT)
    };
    let current_market_rate = apply_percent(raw_market_rate, adjustment_percent);

    let adjustment_reasoning = if source.is_live() {
        format!(
            "Live quote ${} is already current; no adjustment applied",
            raw_market_rate.normalize()
        )
    } else {
        format!(
            "Projected to {}: ${} x {} = ${}",
            reference_year,
            raw_market_rate.normalize(),
            (Decimal::ONE + adjustment_percent / Decimal::ONE_HUNDRED).normalize(),
            current_market_rate.normalize()
        )
    };

    let adjustment_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "market_rate_adjustment".to_string(),
        rule_name: "Current-Year Market Adjustment".to_string(),
        input: serde_json::json!({
            "raw_market_rate": raw_market_rate.normalize().to_string(),
            "source": source,
            "reference_year": reference_year
        }),
        output: serde_json::json!({
            "adjustment_percent": adjustment_percent.normalize().to_string(),
            "current_market_rate": current_market_rate.normalize().to_string()
        }),
        reasoning: adjustment_reasoning,
    };

    MarketRateResult {
        raw_market_rate,
        source,
        adjustment_percent,
        current_market_rate,
        audit_steps: vec![selection_step, adjustment_step],
    }
}

/// Both resolved benchmarks for an analysis.
#[derive(Debug, Clone)]
pub struct ResolvedBenchmarks {
    /// The inflation parity benchmark.
    pub inflation: InflationAdjustmentResult,
    /// The market benchmark.
    pub market: MarketRateResult,
}

impl ResolvedBenchmarks {
    /// Number of audit steps recorded during resolution.
    pub fn step_count(&self) -> u32 {
        1 + self.market.audit_steps.len() as u32
    }

    /// Audit steps in the order they were recorded.
    pub fn audit_steps(&self) -> Vec<AuditStep> {
        let mut steps = Vec::with_capacity(self.step_count() as usize);
        steps.push(self.inflation.audit_step.clone());
        steps.extend(self.market.audit_steps.iter().cloned());
        steps
    }
}

/// Resolves both benchmarks for an analysis.
pub fn resolve_benchmarks(
    input: &AnalysisInput,
    estimate: Option<&ExternalEstimate>,
    reference: &ReferenceData,
    step_number: u32,
) -> ResolvedBenchmarks {
    let inflation = resolve_inflation_adjustment(input, estimate, reference, step_number);
    let market = resolve_market_rate(input, estimate, reference, step_number + 1);

    ResolvedBenchmarks { inflation, market }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InflationTables, ReferenceMetadata};
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_reference(annual_2024: Option<&str>) -> ReferenceData {
        let mut annual = HashMap::new();
        if let Some(rate) = annual_2024 {
            annual.insert(2024, dec(rate));
        }

        let mut market_wages = HashMap::new();
        market_wages.insert(
            "Retail Supervisor".to_string(),
            HashMap::from([("Chicago, IL".to_string(), dec("28.00"))]),
        );

        ReferenceData::new(
            ReferenceMetadata {
                name: "test".to_string(),
                version: "1".to_string(),
                reference_year: 2024,
                source_url: "https://example.com".to_string(),
            },
            InflationTables {
                cumulative: HashMap::from([(2021, dec("21.4"))]),
                annual,
            },
            market_wages,
            HashMap::new(),
        )
    }

    fn create_test_input(job: &str, location: &str, year: i32) -> AnalysisInput {
        AnalysisInput {
            wage: dec("22.50"),
            year,
            job: job.to_string(),
            location: location.to_string(),
            hours_per_week: dec("40"),
            was_promotion: false,
        }
    }

    #[test]
    fn test_static_inflation_for_known_year() {
        let reference = create_test_reference(Some("2.9"));
        let input = create_test_input("Retail Supervisor", "Chicago, IL", 2021);

        let result = resolve_inflation_adjustment(&input, None, &reference, 1);

        assert_eq!(result.rate, dec("21.4"));
        assert_eq!(result.source, InflationSource::StaticTable);
        assert_eq!(result.adjusted_wage, dec("27.315"));
        assert_eq!(result.audit_step.rule_id, "inflation_adjustment");
        assert!(result.audit_step.reasoning.contains("27.315"));
    }

    #[test]
    fn test_unknown_year_means_no_adjustment() {
        let reference = create_test_reference(Some("2.9"));
        let input = create_test_input("Retail Supervisor", "Chicago, IL", 1987);

        let result = resolve_inflation_adjustment(&input, None, &reference, 1);

        assert_eq!(result.rate, Decimal::ZERO);
        assert_eq!(result.source, InflationSource::None);
        assert_eq!(result.adjusted_wage, dec("22.50"));
    }

    #[test]
    fn test_estimate_inflation_overrides_table() {
        let reference = create_test_reference(Some("2.9"));
        let input = create_test_input("Retail Supervisor", "Chicago, IL", 2021);
        let estimate = ExternalEstimate::default().with_inflation_rate(dec("15"));

        let result = resolve_inflation_adjustment(&input, Some(&estimate), &reference, 1);

        assert_eq!(result.source, InflationSource::ExternalEstimate);
        assert_eq!(result.adjusted_wage, dec("22.50") * dec("1.15"));
    }

    #[test]
    fn test_zero_estimate_inflation_is_used_exactly() {
        let reference = create_test_reference(Some("2.9"));
        let input = create_test_input("Retail Supervisor", "Chicago, IL", 2021);
        let estimate = ExternalEstimate::default().with_inflation_rate(Decimal::ZERO);

        let result = resolve_inflation_adjustment(&input, Some(&estimate), &reference, 1);

        assert_eq!(result.source, InflationSource::ExternalEstimate);
        assert_eq!(result.rate, Decimal::ZERO);
        assert_eq!(result.adjusted_wage, dec("22.50"));
    }

    #[test]
    fn test_negative_estimate_inflation_lowers_parity_wage() {
        let reference = create_test_reference(Some("2.9"));
        let input = create_test_input("Retail Supervisor", "Chicago, IL", 2021);
        let estimate = ExternalEstimate::default().with_inflation_rate(dec("-2"));

        let result = resolve_inflation_adjustment(&input, Some(&estimate), &reference, 1);

        assert_eq!(result.adjusted_wage, dec("22.05"));
    }

    #[test]
    fn test_static_market_rate_is_adjusted() {
        let reference = create_test_reference(Some("2.9"));
        let input = create_test_input("Retail Supervisor", "Chicago, IL", 2021);

        let result = resolve_market_rate(&input, None, &reference, 2);

        assert_eq!(result.raw_market_rate, dec("28.00"));
        assert_eq!(result.source, MarketRateSource::StaticTable);
        assert_eq!(result.adjustment_percent, dec("2.9"));
        assert_eq!(result.current_market_rate, dec("28.812"));
        assert_eq!(result.audit_steps.len(), 2);
        assert_eq!(result.audit_steps[0].step_number, 2);
        assert_eq!(result.audit_steps[1].step_number, 3);
    }

    #[test]
    fn test_live_quote_is_not_adjusted() {
        let reference = create_test_reference(Some("2.9"));
        let input = create_test_input("Retail Supervisor", "Chicago, IL", 2021);
        let estimate = ExternalEstimate::default().with_market_rate(dec("30"));

        let result = resolve_market_rate(&input, Some(&estimate), &reference, 2);

        assert_eq!(result.source, MarketRateSource::ExternalEstimate);
        assert_eq!(result.raw_market_rate, dec("30"));
        assert_eq!(result.adjustment_percent, Decimal::ZERO);
        assert_eq!(result.current_market_rate, dec("30"));
    }

    #[test]
    fn test_zero_quote_falls_through_to_table() {
        let reference = create_test_reference(Some("2.9"));
        let input = create_test_input("Retail Supervisor", "Chicago, IL", 2021);
        let estimate = ExternalEstimate::default().with_market_rate(Decimal::ZERO);

        let result = resolve_market_rate(&input, Some(&estimate), &reference, 2);

        assert_eq!(result.source, MarketRateSource::StaticTable);
        assert_eq!(result.current_market_rate, dec("28.812"));
    }

    #[test]
    fn test_unknown_job_uses_safety_fallback() {
        let reference = create_test_reference(Some("2.9"));
        let input = create_test_input("Lighthouse Keeper", "Chicago, IL", 2021);

        let result = resolve_market_rate(&input, None, &reference, 2);

        assert_eq!(result.source, MarketRateSource::SafetyFallback);
        assert_eq!(result.raw_market_rate, dec("18.50"));
        assert_eq!(result.current_market_rate, dec("18.50") * dec("1.029"));
    }

    #[test]
    fn test_missing_reference_year_uses_default_adjustment() {
        let reference = create_test_reference(Some("4.0"));
        let input = create_test_input("Retail Supervisor", "Chicago, IL", 2021);
        let custom = resolve_market_rate(&input, None, &reference, 2);
        assert_eq!(custom.adjustment_percent, dec("4.0"));

        let reference = create_test_reference(None);
        let result = resolve_market_rate(&input, None, &reference, 2);

        assert_eq!(result.adjustment_percent, DEFAULT_MARKET_ADJUSTMENT_PERCENT);
        assert_eq!(result.current_market_rate, dec("28.812"));
    }

    #[test]
    fn test_normalized_names_do_not_change_table_lookup() {
        let reference = create_test_reference(Some("2.9"));
        let input = create_test_input("retail supv", "chicago", 2021);
        let estimate =
            ExternalEstimate::default().with_standard_names("Retail Supervisor", "Chicago, IL");

        let result = resolve_market_rate(&input, Some(&estimate), &reference, 2);

        assert_eq!(result.source, MarketRateSource::SafetyFallback);
    }

    #[test]
    fn test_resolve_benchmarks_numbers_steps_sequentially() {
        let reference = create_test_reference(Some("2.9"));
        let input = create_test_input("Retail Supervisor", "Chicago, IL", 2021);

        let benchmarks = resolve_benchmarks(&input, None, &reference, 1);
        let steps = benchmarks.audit_steps();

        assert_eq!(benchmarks.step_count(), 3);
        let numbers: Vec<u32> = steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_constants() {
        assert_eq!(SAFETY_FALLBACK_MARKET_RATE, dec("18.50"));
        assert_eq!(DEFAULT_MARKET_ADJUSTMENT_PERCENT, dec("2.9"));
    }
}
