//! External market-data acquisition.
//!
//! This module holds the [`MarketDataProvider`] port, its Gemini and mock
//! implementations, and [`acquire_estimate`], the boundary that turns an
//! unreliable provider call into an optional, validated
//! [`ExternalEstimate`](crate::models::ExternalEstimate).

mod acquisition;
mod gemini;
mod market_data;
mod mock;

pub use acquisition::{EstimateOutcome, FALLBACK_NOTICE, acquire_estimate};
pub use gemini::{GeminiConfig, GeminiProvider};
pub use market_data::{
    CUMULATIVE_INFLATION_RANGE, HOURLY_RATE_RANGE, MarketDataProvider, MarketDataResponse,
    ProviderError, parse_market_data,
};
pub use mock::{MockCall, MockMarketDataProvider};
