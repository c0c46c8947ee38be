//! Error types for the Hours Allocation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that per-row data problems (missing factors, missing roster or
//! labor-code matches, unparseable numerics) are absorbed by defaulting
//! inside the allocation core and never surface here; the error enum covers
//! the configuration surface, where failing loudly is the right behavior.

use thiserror::Error;

/// The main error type for the Hours Allocation Engine.
///
/// # Example
///
/// ```
/// use allocation_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
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

    /// The allocation rules document was structurally valid but unusable.
    #[error("Invalid allocation rules: {message}")]
    InvalidRules {
        /// A description of what made the rules invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
