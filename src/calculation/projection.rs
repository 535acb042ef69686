//! Cumulative impact projection.
//!
//! Extends a result's annual impacts over a horizon of years, assuming the
//! gaps stay as they are today.

use rust_decimal::Decimal;

use crate::models::{AnalysisResult, ImpactProjection};

/// Default projection horizon in years.
pub const DEFAULT_PROJECTION_YEARS: u32 = 5;

/// Longest horizon accepted by the HTTP API.
pub const MAX_PROJECTION_YEARS: u32 = 40;

/// Projects cumulative impact for each year from `0` to `years` inclusive.
///
/// Year `n` carries `impact × n` for each of the three impacts, so the first
/// entry is always zero and signs follow the underlying gaps.
pub fn project_impact(result: &AnalysisResult, years: u32) -> Vec<ImpactProjection> {
    (0..=years)
        .map(|year| {
            let factor = Decimal::from(year);
            ImpactProjection {
                year,
                cumulative_total: result.total_impact * factor,
                cumulative_inflation: result.inflation_impact * factor,
                cumulative_market: result.market_impact * factor,
            }
        })
        .collect()
}

/// Total impact accumulated over [`DEFAULT_PROJECTION_YEARS`] years.
pub fn five_year_impact(result: &AnalysisResult) -> Decimal {
    result.total_impact * Decimal::from(DEFAULT_PROJECTION_YEARS)
}
