//! Mock market-data provider for testing.
//!
//! Returns queued responses in order, can replay raw provider text through
//! the real parser, and records every call.
//!
//! # Example
//!
//! ```
//! use wage_gap_engine::provider::{MockMarketDataProvider, MarketDataResponse, ProviderError};
//!
//! let provider = MockMarketDataProvider::new()
//!     .with_error(ProviderError::Timeout { timeout_secs: 30 })
//!     .with_raw_text("{not json");
//! assert_eq!(provider.call_count(), 0);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::market_data::{
    MarketDataProvider, MarketDataResponse, ProviderError, parse_market_data,
};

/// A recorded provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    /// Job passed to the provider.
    pub job: String,
    /// Location passed to the provider.
    pub location: String,
    /// Base year passed to the provider.
    pub year: i32,
}

#[derive(Debug, Clone)]
enum MockReply {
    Data(MarketDataResponse),
    RawText(String),
    Error(ProviderError),
}

/// Configurable in-memory provider.
///
/// When the queue is empty, calls fail with [`ProviderError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct MockMarketDataProvider {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockMarketDataProvider {
    /// Creates a provider with an empty reply queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_response(self, response: MarketDataResponse) -> Self {
        self.push(MockReply::Data(response));
        self
    }

    /// Queues raw provider text, parsed the way a real adapter parses it.
    pub fn with_raw_text(self, text: impl Into<String>) -> Self {
        self.push(MockReply::RawText(text.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ProviderError) -> Self {
        self.push(MockReply::Error(error));
        self
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    /// All calls made so far, oldest first.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn push(&self, reply: MockReply) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }

    fn next_reply(&self) -> Option<MockReply> {
        self.replies.lock().ok()?.pop_front()
    }
}

#[async_trait]
impl MarketDataProvider for MockMarketDataProvider {
    async fn fetch_market_data(
        &self,
        job: &str,
        location: &str,
        year: i32,
    ) -> Result<MarketDataResponse, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(MockCall {
                job: job.to_string(),
                location: location.to_string(),
                year,
            });
        }

        match self.next_reply() {
            Some(MockReply::Data(response)) => Ok(response),
            Some(MockReply::RawText(text)) => parse_market_data(&text),
            Some(MockReply::Error(error)) => Err(error),
            None => Err(ProviderError::Unavailable(
                "no mock response configured".to_string(),
            )),
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
