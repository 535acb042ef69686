//! Reference data types for wage gap analysis.
//!
//! This module contains the strongly-typed tables that are deserialized from
//! the YAML files of a reference data directory.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Metadata about a reference data set.
///
/// Identifies the data set and pins the "present" year that static market
/// rates are projected forward to.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceMetadata {
    /// The human-readable name of the data set.
    pub name: String,
    /// The version of the data set.
    pub version: String,
    /// The year treated as current when adjusting static market rates.
    pub reference_year: i32,
    /// URL to the upstream data source.
    pub source_url: String,
}

/// Structure of `inflation.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct InflationTables {
    /// Cumulative inflation percent from a base year to the reference year.
    #[serde(default)]
    pub cumulative: HashMap<i32, Decimal>,
    /// Year-over-year inflation percent.
    #[serde(default)]
    pub annual: HashMap<i32, Decimal>,
}

/// Structure of `market_wages.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketWagesConfig {
    /// Map of job title to location to median hourly rate.
    pub market_wages: HashMap<String, HashMap<String, Decimal>>,
}

/// Structure of `year_contexts.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct YearContextsConfig {
    /// Map of year to a one-line economic summary of that year.
    pub year_contexts: HashMap<i32, String>,
}

/// Read-only reference tables queried by the resolution engine.
///
/// Every lookup returns an `Option`: a missing key is a normal state that the
/// engine resolves through its documented fallbacks.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    metadata: ReferenceMetadata,
    cumulative_inflation: HashMap<i32, Decimal>,
    annual_inflation: HashMap<i32, Decimal>,
    market_wages: HashMap<String, HashMap<String, Decimal>>,
    year_contexts: HashMap<i32, String>,
}

impl ReferenceData {
    /// Creates a new ReferenceData from its component parts.
    pub fn new(
        metadata: ReferenceMetadata,
        inflation: InflationTables,
        market_wages: HashMap<String, HashMap<String, Decimal>>,
        year_contexts: HashMap<i32, String>,
    ) -> Self {
        Self {
            metadata,
            cumulative_inflation: inflation.cumulative,
            annual_inflation: inflation.annual,
            market_wages,
            year_contexts,
        }
    }

    /// Returns the data set metadata.
    pub fn metadata(&self) -> &ReferenceMetadata {
        &self.metadata
    }

    /// Returns the year static market rates are projected to.
    pub fn reference_year(&self) -> i32 {
        self.metadata.reference_year
    }

    /// Cumulative inflation percent since `year`.
    pub fn cumulative_inflation(&self, year: i32) -> Option<Decimal> {
        self.cumulative_inflation.get(&year).copied()
    }

    /// Year-over-year inflation percent for `year`.
    pub fn annual_inflation(&self, year: i32) -> Option<Decimal> {
        self.annual_inflation.get(&year).copied()
    }

    /// Median hourly rate for a job at a location; both keys must match exactly.
    pub fn market_wage(&self, job: &str, location: &str) -> Option<Decimal> {
        self.market_wages.get(job)?.get(location).copied()
    }

    /// Economic summary for `year`.
    pub fn year_context(&self, year: i32) -> Option<&str> {
        self.year_contexts.get(&year).map(String::as_str)
    }

    /// Years with a cumulative inflation figure, oldest first.
    pub fn inflation_years(&self) -> Vec<(i32, Decimal)> {
        let mut years: Vec<(i32, Decimal)> = self
            .cumulative_inflation
            .iter()
            .map(|(year, rate)| (*year, *rate))
            .collect();
        years.sort_unstable_by_key(|(year, _)| *year);
        years
    }

    /// Job titles with at least one market rate, sorted.
    pub fn jobs(&self) -> Vec<&str> {
        let mut jobs: Vec<&str> = self.market_wages.keys().map(String::as_str).collect();
        jobs.sort_unstable();
        jobs
    }

    /// Locations appearing under any job, sorted and deduplicated.
    pub fn locations(&self) -> Vec<&str> {
        let mut locations: Vec<&str> = self
            .market_wages
            .values()
            .flat_map(|by_location| by_location.keys().map(String::as_str))
            .collect();
        locations.sort_unstable();
        locations.dedup();
        locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample() -> ReferenceData {
        let mut chicago = HashMap::new();
        chicago.insert("Chicago, IL".to_string(), dec("28.00"));
        let mut phoenix = HashMap::new();
        phoenix.insert("Phoenix, AZ".to_string(), dec("18.40"));
        phoenix.insert("Chicago, IL".to_string(), dec("20.15"));

        let mut market_wages = HashMap::new();
        market_wages.insert("Retail Supervisor".to_string(), chicago);
        market_wages.insert("Customer Service Representative".to_string(), phoenix);

        ReferenceData::new(
            ReferenceMetadata {
                name: "test".to_string(),
                version: "1".to_string(),
                reference_year: 2024,
                source_url: "https://example.com".to_string(),
            },
            InflationTables {
                cumulative: HashMap::from([(2021, dec("21.4"))]),
                annual: HashMap::from([(2024, dec("2.9"))]),
            },
            market_wages,
            HashMap::from([(2021, "Reopening year.".to_string())]),
        )
    }

    #[test]
    fn test_market_wage_requires_both_keys() {
        let data = sample();
        assert_eq!(
            data.market_wage("Retail Supervisor", "Chicago, IL"),
            Some(dec("28.00"))
        );
        assert_eq!(data.market_wage("Retail Supervisor", "Phoenix, AZ"), None);
        assert_eq!(data.market_wage("Astronaut", "Chicago, IL"), None);
    }

    #[test]
    fn test_missing_years_are_none() {
        let data = sample();
        assert_eq!(data.cumulative_inflation(2021), Some(dec("21.4")));
        assert_eq!(data.cumulative_inflation(1999), None);
        assert_eq!(data.annual_inflation(2023), None);
        assert_eq!(data.year_context(2030), None);
    }

    #[test]
    fn test_jobs_and_locations_are_sorted() {
        let data = sample();
        assert_eq!(
            data.jobs(),
            vec!["Customer Service Representative", "Retail Supervisor"]
        );
        assert_eq!(data.locations(), vec!["Chicago, IL", "Phoenix, AZ"]);
    }

    #[test]
    fn test_inflation_years_are_ordered() {
        let mut data = sample();
        data.cumulative_inflation.insert(2019, dec("25.2"));
        data.cumulative_inflation.insert(2023, dec("5.9"));

        assert_eq!(
            data.inflation_years(),
            vec![(2019, dec("25.2")), (2021, dec("21.4")), (2023, dec("5.9"))]
        );
    }
}
