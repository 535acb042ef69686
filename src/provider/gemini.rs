//! Gemini Provider - Implementation of MarketDataProvider for Google's Gemini API.
//!
//! Asks the model for standardized labour-market data using structured
//! output: the request carries a JSON response schema with the six required
//! fields, and the first candidate's text is parsed as [`MarketDataResponse`].
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-2.0-flash")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let provider = GeminiProvider::new(config)?;
//! ```
//!
//! A single attempt is made per call. There is no retry or backoff.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::market_data::{
    MarketDataProvider, MarketDataResponse, ProviderError, parse_market_data,
};

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.0-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Builds the economist prompt for one lookup.
    fn build_prompt(job: &str, location: &str, year: i32) -> String {
        let now = Utc::now();
        let current_year = now.format("%Y");
        let current_month = now.format("%B");

        format!(
            "As an expert labor economist, provide standardized market data and cumulative \
             inflation analysis for:\n\
             - Target Role: \"{job}\"\n\
             - Geographic Market: \"{location}\"\n\
             - Base Comparison Year: {year}\n\
             - Current Reference: {current_month} {current_year}\n\n\
             Required Steps:\n\
             1. Standardize the job title to the most relevant SOC (Standard Occupational Classification) title.\n\
             2. Normalize the location (City, State or Region).\n\
             3. Determine the current median hourly market rate based on BLS OEWS data and recent private sector benchmarks.\n\
             4. Calculate the total cumulative CPI-U inflation percentage change from {year} to {current_year}.\n\
             5. Provide a one-sentence historical economic context for {year}."
        )
    }

    fn to_request(job: &str, location: &str, year: i32) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(Self::build_prompt(job, location, year)),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        }
    }

    async fn send_request(&self, request: &GenerateContentRequest) -> Result<Response, ProviderError> {
        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    ProviderError::Network(format!("Connection failed: {}", e))
                } else {
                    ProviderError::Network(e.to_string())
                }
            })
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, ProviderError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(ProviderError::AuthenticationFailed),
            429 => Err(ProviderError::Unavailable(format!(
                "Rate limited: {}",
                error_body
            ))),
            500..=599 => Err(ProviderError::Unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(ProviderError::Network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    async fn parse_response(&self, response: Response) -> Result<MarketDataResponse, ProviderError> {
        let response = self.handle_response_status(response).await?;

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("Failed to parse response: {}", e)))?;

        let text = first_candidate_text(body).ok_or(ProviderError::EmptyResponse)?;
        parse_market_data(&text)
    }
}

#[async_trait]
impl MarketDataProvider for GeminiProvider {
    async fn fetch_market_data(
        &self,
        job: &str,
        location: &str,
        year: i32,
    ) -> Result<MarketDataResponse, ProviderError> {
        let request = Self::to_request(job, location, year);
        debug!(model = %self.config.model, job, location, year, "Requesting market data");

        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

fn first_candidate_text(body: GenerateContentResponse) -> Option<String> {
    body.candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .find_map(|part| part.text)
}

fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "standardJobTitle": { "type": "STRING", "description": "Standardized professional title." },
            "standardLocation": { "type": "STRING", "description": "Standardized City, State or Region." },
            "hourlyRate": { "type": "NUMBER", "description": "Current median hourly rate in USD." },
            "cumulativeInflation": { "type": "NUMBER", "description": "Total % inflation since the base year (e.g., 21.4)." },
            "yearContext": { "type": "STRING", "description": "Short economic summary of the base year." },
            "explanation": { "type": "STRING", "description": "Brief source or methodology attribution." }
        },
        "required": [
            "standardJobTitle",
            "standardLocation",
            "hourlyRate",
            "cumulativeInflation",
            "yearContext",
            "explanation"
        ]
    })
}

// ----------------------------------------------------------------------------
// Gemini API types
// ----------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}
