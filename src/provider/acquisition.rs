//! Best-effort estimate acquisition.
//!
//! This is the boundary between the unreliable provider and the pure engine.
//! It makes a single attempt, validates whatever comes back, and always
//! resolves to either a fully validated estimate or no estimate at all.

use std::time::Instant;

use tracing::{info, warn};

use crate::models::{AnalysisInput, ExternalEstimate};

use super::market_data::MarketDataProvider;

/// Advisory shown to the user when live data could not be used.
pub const FALLBACK_NOTICE: &str =
    "Real-time market data is unavailable; using historical fallback data.";

/// What the boundary hands to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EstimateOutcome {
    /// The validated estimate, if the provider delivered one.
    pub estimate: Option<ExternalEstimate>,
    /// Advisory for the user when the provider failed.
    pub notice: Option<String>,
}

impl EstimateOutcome {
    fn fallback() -> Self {
        Self {
            estimate: None,
            notice: Some(FALLBACK_NOTICE.to_string()),
        }
    }
}

/// Fetches and validates an estimate for `input`.
///
/// Network failures, unparseable responses, missing fields and non-finite
/// numbers are all handled the same way: the partial result is discarded and
/// the outcome carries [`FALLBACK_NOTICE`]. With no provider configured the
/// outcome is empty and carries no notice.
pub async fn acquire_estimate(
    provider: Option<&dyn MarketDataProvider>,
    input: &AnalysisInput,
) -> EstimateOutcome {
    let Some(provider) = provider else {
        return EstimateOutcome::default();
    };

    let start_time = Instant::now();
    let fetched = provider
        .fetch_market_data(&input.job, &input.location, input.year)
        .await
        .and_then(|response| response.into_estimate());
    let duration_ms = start_time.elapsed().as_millis() as u64;

    match fetched {
        Ok(estimate) => {
            info!(
                provider = provider.provider_name(),
                duration_ms,
                "Market estimate acquired"
            );
            EstimateOutcome {
                estimate: Some(estimate),
                notice: None,
            }
        }
        Err(err) => {
            warn!(
                provider = provider.provider_name(),
                duration_ms,
                error = %err,
                "Market estimate unavailable, falling back to reference data"
            );
            EstimateOutcome::fallback()
        }
    }
}
