//! Market Data Port - Interface for external market-data providers.
//!
//! A provider takes a job, location and base year and returns a best-effort
//! market estimate. Providers are unreliable by assumption: every call may
//! fail, time out, or return something unusable. The engine never talks to a
//! provider directly; see [`super::acquire_estimate`].

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ExternalEstimate;

/// Port for external market-data providers.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetches a market estimate for `job` in `location`, with inflation
    /// measured from `year` to the present.
    async fn fetch_market_data(
        &self,
        job: &str,
        location: &str,
        year: i32,
    ) -> Result<MarketDataResponse, ProviderError>;

    /// Short provider name for logs.
    fn provider_name(&self) -> &str;
}

/// Errors a market-data provider can report.
///
/// The acquisition boundary treats all of them the same way, so they exist
/// mainly for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The request could not be sent or the connection failed.
    #[error("Network error: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout {
        /// The configured timeout.
        timeout_secs: u64,
    },

    /// The provider rejected the credentials.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// The provider is rate limiting or failing server-side.
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    /// The provider returned no content.
    #[error("Provider returned an empty response")]
    EmptyResponse,

    /// The response was not valid market-data JSON.
    #[error("Failed to parse market data: {0}")]
    Parse(String),

    /// A required field was missing from the response.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: &'static str,
    },

    /// A numeric field was NaN or infinite.
    #[error("Field '{field}' is not a finite number")]
    NonFiniteValue {
        /// The offending field name.
        field: &'static str,
    },

    /// A numeric field was finite but outside its plausible range.
    #[error("Field '{field}' value {value} is outside [{min}, {max}]")]
    OutOfRange {
        /// The offending field name.
        field: &'static str,
        /// The reported value, as text.
        value: String,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
}

/// Plausible bounds for a reported hourly rate.
pub const HOURLY_RATE_RANGE: (i64, i64) = (0, 10_000);

/// Plausible bounds for reported cumulative inflation, in percent.
pub const CUMULATIVE_INFLATION_RANGE: (i64, i64) = (-100, 10_000);

/// Market data as a provider reports it, before validation.
///
/// Every field is optional here so that a missing field is reported as
/// [`ProviderError::MissingField`] rather than a generic parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDataResponse {
    /// Standardized occupational title.
    #[serde(default)]
    pub standard_job_title: Option<String>,
    /// Normalized city, state or region.
    #[serde(default)]
    pub standard_location: Option<String>,
    /// Current median hourly rate.
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    /// Cumulative inflation percent since the base year.
    #[serde(default, alias = "cumulativeInflationPercent")]
    pub cumulative_inflation: Option<f64>,
    /// One-line economic summary of the base year.
    #[serde(default)]
    pub year_context: Option<String>,
    /// Source or methodology attribution.
    #[serde(default)]
    pub explanation: Option<String>,
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ProviderError> {
    value.ok_or(ProviderError::MissingField { field })
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, ProviderError> {
    required(value, field).and_then(|text| {
        if text.trim().is_empty() {
            Err(ProviderError::MissingField { field })
        } else {
            Ok(text)
        }
    })
}

fn bounded_decimal(
    value: f64,
    field: &'static str,
    (min, max): (i64, i64),
) -> Result<Decimal, ProviderError> {
    if !value.is_finite() {
        return Err(ProviderError::NonFiniteValue { field });
    }
    if value < min as f64 || value > max as f64 {
        return Err(ProviderError::OutOfRange {
            field,
            value: value.to_string(),
            min,
            max,
        });
    }
    Decimal::try_from(value).map_err(|_| ProviderError::NonFiniteValue { field })
}

impl MarketDataResponse {
    /// Validates the response and converts it into an [`ExternalEstimate`].
    ///
    /// All six fields are required. Both numbers must be finite and inside
    /// [`HOURLY_RATE_RANGE`] and [`CUMULATIVE_INFLATION_RANGE`]. A response
    /// that fails any check must be discarded in full.
    pub fn into_estimate(self) -> Result<ExternalEstimate, ProviderError> {
        let standard_job = required_text(self.standard_job_title, "standardJobTitle")?;
        let standard_location = required_text(self.standard_location, "standardLocation")?;
        let hourly_rate = required(self.hourly_rate, "hourlyRate")?;
        let cumulative_inflation = required(self.cumulative_inflation, "cumulativeInflation")?;
        let year_context = required_text(self.year_context, "yearContext")?;
        let explanation = required_text(self.explanation, "explanation")?;

        Ok(ExternalEstimate {
            market_rate: Some(bounded_decimal(hourly_rate, "hourlyRate", HOURLY_RATE_RANGE)?),
            inflation_rate: Some(bounded_decimal(
                cumulative_inflation,
                "cumulativeInflation",
                CUMULATIVE_INFLATION_RANGE,
            )?),
            explanation: Some(explanation),
            year_context: Some(year_context),
            standard_job: Some(standard_job),
            standard_location: Some(standard_location),
        })
    }
}

/// Parses the JSON text a provider produced into a [`MarketDataResponse`].
pub fn parse_market_data(text: &str) -> Result<MarketDataResponse, ProviderError> {
    if text.trim().is_empty() {
        return Err(ProviderError::EmptyResponse);
    }
    serde_json::from_str(text).map_err(|e| ProviderError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn complete_response() -> MarketDataResponse {
        MarketDataResponse {
            standard_job_title: Some("Registered Nurses".to_string()),
            standard_location: Some("Chicago, IL".to_string()),
            hourly_rate: Some(43.85),
            cumulative_inflation: Some(21.4),
            year_context: Some("Reopening year.".to_string()),
            explanation: Some("BLS OEWS May 2024".to_string()),
        }
    }

    #[test]
    fn test_complete_response_converts() {
        let estimate = complete_response().into_estimate().unwrap();

        assert_eq!(estimate.market_rate, Some(dec("43.85")));
        assert_eq!(estimate.inflation_rate, Some(dec("21.4")));
        assert_eq!(estimate.standard_job.as_deref(), Some("Registered Nurses"));
        assert_eq!(estimate.explanation.as_deref(), Some("BLS OEWS May 2024"));
    }

    #[test]
    fn test_missing_field_is_reported() {
        let mut response = complete_response();
        response.year_context = None;

        assert_eq!(
            response.into_estimate(),
            Err(ProviderError::MissingField {
                field: "yearContext"
            })
        );
    }

    #[test]
    fn test_blank_text_field_counts_as_missing() {
        let mut response = complete_response();
        response.explanation = Some("   ".to_string());

        assert_eq!(
            response.into_estimate(),
            Err(ProviderError::MissingField {
                field: "explanation"
            })
        );
    }

    #[test]
    fn test_non_finite_rate_is_rejected() {
        let mut response = complete_response();
        response.hourly_rate = Some(f64::NAN);
        assert_eq!(
            response.into_estimate(),
            Err(ProviderError::NonFiniteValue {
                field: "hourlyRate"
            })
        );

        let mut response = complete_response();
        response.cumulative_inflation = Some(f64::INFINITY);
        assert_eq!(
            response.into_estimate(),
            Err(ProviderError::NonFiniteValue {
                field: "cumulativeInflation"
            })
        );
    }

    #[test]
    fn test_implausible_rate_is_rejected() {
        let mut response = complete_response();
        response.hourly_rate = Some(1e26);
        assert!(matches!(
            response.into_estimate(),
            Err(ProviderError::OutOfRange {
                field: "hourlyRate",
                ..
            })
        ));

        let mut response = complete_response();
        response.hourly_rate = Some(-3.0);
        assert!(matches!(
            response.into_estimate(),
            Err(ProviderError::OutOfRange {
                field: "hourlyRate",
                ..
            })
        ));
    }

    #[test]
    fn test_implausible_inflation_is_rejected() {
        let mut response = complete_response();
        response.cumulative_inflation = Some(-100.5);
        assert!(matches!(
            response.into_estimate(),
            Err(ProviderError::OutOfRange {
                field: "cumulativeInflation",
                ..
            })
        ));

        let mut response = complete_response();
        response.cumulative_inflation = Some(1e12);
        assert!(matches!(
            response.into_estimate(),
            Err(ProviderError::OutOfRange {
                field: "cumulativeInflation",
                ..
            })
        ));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let mut response = complete_response();
        response.hourly_rate = Some(10_000.0);
        response.cumulative_inflation = Some(-100.0);

        let estimate = response.into_estimate().unwrap();
        assert_eq!(estimate.market_rate, Some(dec("10000")));
        assert_eq!(estimate.inflation_rate, Some(dec("-100")));
    }

    #[test]
    fn test_parse_accepts_both_inflation_keys() {
        let text = r#"{
            "standardJobTitle": "Cashiers",
            "standardLocation": "Austin, TX",
            "hourlyRate": 15.5,
            "cumulativeInflationPercent": 5.9,
            "yearContext": "Cooling inflation.",
            "explanation": "BLS"
        }"#;

        let response = parse_market_data(text).unwrap();
        assert_eq!(response.cumulative_inflation, Some(5.9));
        assert!(response.into_estimate().is_ok());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_market_data("not json at all"),
            Err(ProviderError::Parse(_))
        ));
        assert_eq!(parse_market_data("  "), Err(ProviderError::EmptyResponse));
    }

    #[test]
    fn test_parse_rejects_wrongly_typed_rate() {
        let text = r#"{"hourlyRate": "about twenty"}"#;
        assert!(matches!(parse_market_data(text), Err(ProviderError::Parse(_))));
    }
}
