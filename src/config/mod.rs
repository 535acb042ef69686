//! Static reference data for the Wage Gap Resolution Engine.
//!
//! This module loads the read-only benchmark tables (cumulative and annual
//! inflation, market wages by job and location, year context summaries) from
//! YAML files once at process start.
//!
//! # Example
//!
//! ```no_run
//! use wage_gap_engine::config::ReferenceLoader;
//!
//! let data = ReferenceLoader::load("./config/reference").unwrap().into_data();
//! println!("Loaded reference set: {}", data.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ReferenceLoader;
pub use types::{
    InflationTables, MarketWagesConfig, ReferenceData, ReferenceMetadata, YearContextsConfig,
};
