//! Error types for the Wage Gap Resolution Engine.
//!
//! The resolution engine itself is total and never fails. These errors cover
//! the edges around it: loading the reference tables at startup and rejecting
//! invalid caller input before an analysis is attempted.

use thiserror::Error;

/// The main error type for the Wage Gap Resolution Engine.
///
/// # Example
///
/// ```
/// use wage_gap_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/inflation.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/inflation.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An analysis input field was outside its valid domain.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
