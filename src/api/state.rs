//! Application state for the Wage Gap Resolution Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ReferenceData;
use crate::provider::MarketDataProvider;

/// Shared application state.
///
/// Holds the read-only reference tables and, optionally, the external
/// market-data provider. Without a provider every analysis runs on
/// reference data alone.
#[derive(Clone)]
pub struct AppState {
    reference: Arc<ReferenceData>,
    provider: Option<Arc<dyn MarketDataProvider>>,
}

impl AppState {
    /// Creates a new application state with no market-data provider.
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            reference: Arc::new(reference),
            provider: None,
        }
    }

    /// Attaches a market-data provider.
    pub fn with_provider(mut self, provider: Arc<dyn MarketDataProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Returns the reference tables.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Returns the market-data provider, if one is configured.
    pub fn provider(&self) -> Option<&dyn MarketDataProvider> {
        self.provider.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReferenceLoader;
    use crate::provider::MockMarketDataProvider;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_provider_is_optional() {
        let reference = ReferenceLoader::load("./config/reference")
            .unwrap()
            .into_data();

        let state = AppState::new(reference);
        assert!(state.provider().is_none());

        let state = state.with_provider(Arc::new(MockMarketDataProvider::new()));
        assert_eq!(state.provider().map(|p| p.provider_name()), Some("mock"));
    }
}
