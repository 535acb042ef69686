//! Analysis input model.
//!
//! This module defines the [`AnalysisInput`] struct describing the worker
//! facts an analysis is run against.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Weeks per year used to annualize a weekly schedule.
pub const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

/// Upper bound on scheduled hours in a single week.
pub const MAX_HOURS_PER_WEEK: Decimal = Decimal::from_parts(168, 0, 0, false, 0);

/// Upper bound on the hourly wage an analysis accepts.
pub const MAX_HOURLY_WAGE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// The facts a worker supplies for a wage gap analysis.
///
/// Constructed once per request and never mutated. Callers should run
/// [`AnalysisInput::validate`] before handing it to the engine; the engine
/// itself assumes a valid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// Current hourly wage.
    pub wage: Decimal,
    /// Year of the last wage-setting event (raise or promotion).
    pub year: i32,
    /// Job title, used verbatim as the market table key.
    pub job: String,
    /// Location, used verbatim as the market table key.
    pub location: String,
    /// Scheduled hours per week.
    pub hours_per_week: Decimal,
    /// Whether the last wage change was a promotion.
    #[serde(default)]
    pub was_promotion: bool,
}

impl AnalysisInput {
    /// Total scheduled hours in a year (`hours_per_week × 52`).
    ///
    /// # Examples
    ///
    /// ```
    /// use wage_gap_engine::models::AnalysisInput;
    /// use rust_decimal::Decimal;
    ///
    /// let input = AnalysisInput {
    ///     wage: Decimal::new(2250, 2),
    ///     year: 2021,
    ///     job: "Retail Supervisor".to_string(),
    ///     location: "Chicago, IL".to_string(),
    ///     hours_per_week: Decimal::from(40),
    ///     was_promotion: false,
    /// };
    /// assert_eq!(input.annual_working_hours(), Decimal::from(2080));
    /// ```
    pub fn annual_working_hours(&self) -> Decimal {
        self.hours_per_week * WEEKS_PER_YEAR
    }

    /// Checks that every field is inside the domain the engine is defined on.
    ///
    /// Rejects wages outside `(0, 10_000]`, empty job or location, hours
    /// outside `(0, 168]`, and years that are not four digits. The bounds
    /// keep every product the engine forms well inside `Decimal` range.
    pub fn validate(&self) -> EngineResult<()> {
        if self.wage <= Decimal::ZERO {
            return Err(EngineError::invalid_input("wage", "must be greater than zero"));
        }

        if self.wage > MAX_HOURLY_WAGE {
            return Err(EngineError::invalid_input(
                "wage",
                format!("must not exceed {}", MAX_HOURLY_WAGE),
            ));
        }

        if !(1000..=9999).contains(&self.year) {
            return Err(EngineError::invalid_input(
                "year",
                format!("must be a four-digit year, got {}", self.year),
            ));
        }

        if self.job.trim().is_empty() {
            return Err(EngineError::invalid_input("job", "must not be empty"));
        }

        if self.location.trim().is_empty() {
            return Err(EngineError::invalid_input("location", "must not be empty"));
        }

        if self.hours_per_week <= Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "hours_per_week",
                "must be greater than zero",
            ));
        }

        if self.hours_per_week > MAX_HOURS_PER_WEEK {
            return Err(EngineError::invalid_input(
                "hours_per_week",
                format!("must not exceed {}", MAX_HOURS_PER_WEEK),
            ));
        }

        Ok(())
    }
}
