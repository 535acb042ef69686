//! External market-data estimate model.
//!
//! An [`ExternalEstimate`] is the validated, engine-facing form of whatever a
//! market-data provider returned. It is optional input to the engine and any
//! field of it may be missing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A best-effort market estimate folded into an analysis.
///
/// # Example
///
/// ```
/// use wage_gap_engine::models::ExternalEstimate;
/// use rust_decimal::Decimal;
///
/// let estimate = ExternalEstimate::default()
///     .with_market_rate(Decimal::from(30))
///     .with_inflation_rate(Decimal::from(15));
/// assert_eq!(estimate.live_market_rate(), Some(Decimal::from(30)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalEstimate {
    /// Quoted current hourly market rate.
    #[serde(default)]
    pub market_rate: Option<Decimal>,
    /// Cumulative inflation percent since the input year. May be negative.
    #[serde(default)]
    pub inflation_rate: Option<Decimal>,
    /// Free-text methodology or source attribution.
    #[serde(default)]
    pub explanation: Option<String>,
    /// Free-text economic summary of the input year.
    #[serde(default)]
    pub year_context: Option<String>,
    /// Normalized job title, for display only.
    #[serde(default)]
    pub standard_job: Option<String>,
    /// Normalized location, for display only.
    #[serde(default)]
    pub standard_location: Option<String>,
}

impl ExternalEstimate {
    /// The quoted market rate, if it counts as a live quote.
    ///
    /// A quote of exactly zero is never a meaningful market rate and is
    /// reported as absent. This differs from [`Self::inflation_rate`], where
    /// zero is a legitimate value.
    pub fn live_market_rate(&self) -> Option<Decimal> {
        self.market_rate.filter(|rate| !rate.is_zero())
    }

    /// Sets the quoted market rate.
    pub fn with_market_rate(mut self, rate: Decimal) -> Self {
        self.market_rate = Some(rate);
        self
    }

    /// Sets the cumulative inflation percent.
    pub fn with_inflation_rate(mut self, rate: Decimal) -> Self {
        self.inflation_rate = Some(rate);
        self
    }

    /// Sets the methodology explanation.
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Sets the year context summary.
    pub fn with_year_context(mut self, context: impl Into<String>) -> Self {
        self.year_context = Some(context.into());
        self
    }

    /// Sets the normalized job title and location.
    pub fn with_standard_names(
        mut self,
        job: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        self.standard_job = Some(job.into());
        self.standard_location = Some(location.into());
        self
    }
}
