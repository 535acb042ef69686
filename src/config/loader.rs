//! Reference data loading functionality.
//!
//! This module provides the [`ReferenceLoader`] type for loading the static
//! benchmark tables from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{
    InflationTables, MarketWagesConfig, ReferenceData, ReferenceMetadata, YearContextsConfig,
};

/// Loads the read-only reference tables used by the resolution engine.
///
/// # Directory Structure
///
/// ```text
/// config/reference/
/// ├── reference.yaml      # Data set metadata and reference year
/// ├── inflation.yaml      # Cumulative and annual inflation by year
/// ├── market_wages.yaml   # Median hourly rate by job and location
/// └── year_contexts.yaml  # Economic summary by year
/// ```
///
/// # Example
///
/// ```no_run
/// use wage_gap_engine::config::ReferenceLoader;
///
/// let loader = ReferenceLoader::load("./config/reference")?;
/// println!("Reference year: {}", loader.data().reference_year());
/// # Ok::<(), wage_gap_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReferenceLoader {
    data: ReferenceData,
}

impl ReferenceLoader {
    /// Loads reference data from the specified directory.
    ///
    /// Returns an error if any of the four files is missing or contains
    /// invalid YAML. Missing rows inside a file are not errors.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ReferenceMetadata>(&path.join("reference.yaml"))?;
        let inflation = Self::load_yaml::<InflationTables>(&path.join("inflation.yaml"))?;
        let market_wages = Self::load_yaml::<MarketWagesConfig>(&path.join("market_wages.yaml"))?;
        let year_contexts =
            Self::load_yaml::<YearContextsConfig>(&path.join("year_contexts.yaml"))?;

        info!(
            name = %metadata.name,
            version = %metadata.version,
            reference_year = metadata.reference_year,
            jobs = market_wages.market_wages.len(),
            "Loaded reference data"
        );

        let data = ReferenceData::new(
            metadata,
            inflation,
            market_wages.market_wages,
            year_contexts.year_contexts,
        );

        Ok(Self { data })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded reference tables.
    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    /// Consumes the loader, returning the reference tables.
    pub fn into_data(self) -> ReferenceData {
        self.data
    }
}
