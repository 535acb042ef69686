//! Property tests for the resolution engine.
//!
//! These check the arithmetic relationships every `AnalysisResult` must
//! satisfy, over random wages, hours, years and estimates.

use proptest::prelude::*;
use rust_decimal::Decimal;

use wage_gap_engine::calculation::{SAFETY_FALLBACK_MARKET_RATE, project_impact, resolve};
use wage_gap_engine::config::{ReferenceData, ReferenceLoader};
use wage_gap_engine::models::{
    AnalysisInput, ExternalEstimate, MAX_HOURLY_WAGE, MarketRateSource, PrimaryBenchmark,
    WEEKS_PER_YEAR,
};
use wage_gap_engine::provider::{CUMULATIVE_INFLATION_RANGE, HOURLY_RATE_RANGE, MarketDataResponse};

fn reference() -> ReferenceData {
    ReferenceLoader::load("./config/reference")
        .expect("Failed to load reference data")
        .into_data()
}

fn jobs() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        Just(("Retail Supervisor".to_string(), "Chicago, IL".to_string())),
        Just(("Registered Nurse".to_string(), "Los Angeles, CA".to_string())),
        Just(("Warehouse Associate".to_string(), "Phoenix, AZ".to_string())),
        Just(("Astronaut".to_string(), "Houston, TX".to_string())),
    ]
}

prop_compose! {
    fn analysis_input()(
        wage_cents in 1i64..=20_000,
        year in 2010i32..=2026,
        (job, location) in jobs(),
        hours_tenths in 1i64..=1_680,
        was_promotion in any::<bool>(),
    ) -> AnalysisInput {
        AnalysisInput {
            wage: Decimal::new(wage_cents, 2),
            year,
            job,
            location,
            hours_per_week: Decimal::new(hours_tenths, 1),
            was_promotion,
        }
    }
}

prop_compose! {
    fn external_estimate()(
        market_cents in 0i64..=15_000,
        inflation_tenths in -100i64..=600,
    ) -> ExternalEstimate {
        ExternalEstimate::default()
            .with_market_rate(Decimal::new(market_cents, 2))
            .with_inflation_rate(Decimal::new(inflation_tenths, 1))
            .with_explanation("generated")
            .with_year_context("generated")
            .with_standard_names("Generated Job", "Generated Location")
    }
}

prop_compose! {
    fn boundary_input()(
        wage_cents in 1i64..=1_000_000,
        hours_tenths in 1i64..=1_680,
        year in 2010i32..=2026,
        was_promotion in any::<bool>(),
    ) -> AnalysisInput {
        AnalysisInput {
            wage: Decimal::new(wage_cents, 2),
            year,
            job: "Software Developer".to_string(),
            location: "New York, NY".to_string(),
            hours_per_week: Decimal::new(hours_tenths, 1),
            was_promotion,
        }
    }
}

proptest! {
    #[test]
    fn accepted_extremes_resolve_without_overflow(
        input in boundary_input(),
        hourly_rate in (HOURLY_RATE_RANGE.0 as f64)..=(HOURLY_RATE_RANGE.1 as f64),
        inflation in (CUMULATIVE_INFLATION_RANGE.0 as f64)..=(CUMULATIVE_INFLATION_RANGE.1 as f64),
    ) {
        prop_assert!(input.validate().is_ok());
        prop_assert!(input.wage <= MAX_HOURLY_WAGE);

        let response = MarketDataResponse {
            standard_job_title: Some("Software Developers".to_string()),
            standard_location: Some("New York, NY".to_string()),
            hourly_rate: Some(hourly_rate),
            cumulative_inflation: Some(inflation),
            year_context: Some("generated".to_string()),
            explanation: Some("generated".to_string()),
        };
        let estimate = response.into_estimate().unwrap();

        let result = resolve(&input, Some(&estimate), &reference());
        let projection = project_impact(&result, 40);
        prop_assert_eq!(projection[40].cumulative_total, result.total_impact * Decimal::from(40));
    }

    #[test]
    fn annual_hours_are_weekly_hours_times_fifty_two(input in analysis_input()) {
        let result = resolve(&input, None, &reference());
        prop_assert_eq!(result.annual_working_hours, input.hours_per_week * WEEKS_PER_YEAR);
    }

    #[test]
    fn gaps_are_benchmark_minus_wage(
        input in analysis_input(),
        estimate in proptest::option::of(external_estimate()),
    ) {
        let result = resolve(&input, estimate.as_ref(), &reference());

        prop_assert_eq!(result.inflation_gap, result.inflation_adjusted_wage - input.wage);
        prop_assert_eq!(result.market_gap, result.current_market_rate - input.wage);
        prop_assert_eq!(result.total_gap, result.target_wage - input.wage);
    }

    #[test]
    fn impacts_are_gaps_times_annual_hours(
        input in analysis_input(),
        estimate in proptest::option::of(external_estimate()),
    ) {
        let result = resolve(&input, estimate.as_ref(), &reference());
        let hours = result.annual_working_hours;

        prop_assert_eq!(result.inflation_impact, result.inflation_gap * hours);
        prop_assert_eq!(result.market_impact, result.market_gap * hours);
        prop_assert_eq!(result.total_impact, result.total_gap * hours);
    }

    #[test]
    fn target_wage_follows_selection_rule(
        input in analysis_input(),
        estimate in proptest::option::of(external_estimate()),
    ) {
        let result = resolve(&input, estimate.as_ref(), &reference());

        if input.was_promotion {
            prop_assert_eq!(result.target_wage, result.current_market_rate);
            prop_assert_eq!(result.primary_benchmark, PrimaryBenchmark::MarketOnly);
        } else if result.inflation_adjusted_wage >= result.current_market_rate {
            prop_assert_eq!(result.target_wage, result.inflation_adjusted_wage);
            prop_assert_eq!(result.primary_benchmark, PrimaryBenchmark::Inflation);
        } else {
            prop_assert_eq!(result.target_wage, result.current_market_rate);
            prop_assert_eq!(result.primary_benchmark, PrimaryBenchmark::Market);
        }
    }

    #[test]
    fn live_market_rate_is_used_unadjusted(
        input in analysis_input(),
        estimate in external_estimate(),
    ) {
        let result = resolve(&input, Some(&estimate), &reference());

        match estimate.live_market_rate() {
            Some(rate) => {
                prop_assert_eq!(result.current_market_rate, rate);
                prop_assert_eq!(result.market_rate_source, MarketRateSource::ExternalEstimate);
            }
            None => prop_assert!(!result.market_rate_source.is_live()),
        }
    }

    #[test]
    fn unknown_pairs_use_safety_fallback(
        wage_cents in 1i64..=20_000,
        year in 2010i32..=2026,
    ) {
        let input = AnalysisInput {
            wage: Decimal::new(wage_cents, 2),
            year,
            job: "Lighthouse Keeper".to_string(),
            location: "Nowhere".to_string(),
            hours_per_week: Decimal::from(40),
            was_promotion: false,
        };

        let result = resolve(&input, None, &reference());

        prop_assert_eq!(result.raw_market_rate, SAFETY_FALLBACK_MARKET_RATE);
        prop_assert_eq!(result.market_rate_source, MarketRateSource::SafetyFallback);
        let factor = Decimal::ONE + result.market_adjustment_percent / Decimal::ONE_HUNDRED;
        prop_assert_eq!(result.current_market_rate, SAFETY_FALLBACK_MARKET_RATE * factor);
    }

    #[test]
    fn projection_is_linear_in_years(
        input in analysis_input(),
        years in 0u32..=40,
    ) {
        let result = resolve(&input, None, &reference());
        let projection = project_impact(&result, years);

        prop_assert_eq!(projection.len(), years as usize + 1);
        for point in &projection {
            prop_assert_eq!(point.cumulative_total, result.total_impact * Decimal::from(point.year));
        }
    }
}
