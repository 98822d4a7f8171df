// ABOUTME: Engine error types for malformed input and configuration failures
// ABOUTME: Degenerate data (too few points, flat spans) is a value, never an error

//! Error types for the trend engine.
//!
//! Every "not enough information" condition (short series, zero elapsed-day
//! variance, diverging goal trend) is represented as a typed absent result.
//! The variants here cover the only two genuine failure modes: non-finite
//! numbers reaching the engine, which indicate an upstream data-integrity
//! bug, and tunables that fail validation.

use thiserror::Error;

/// Errors surfaced by the trend engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A sample value or goal target was NaN or infinite.
    #[error("non-finite value {value} for {context}")]
    NonFiniteValue {
        /// Where the value came from (sample date, goal target, ...).
        context: String,
        /// The offending value.
        value: f64,
    },

    /// Engine tunables failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl EngineError {
    /// Build a [`EngineError::NonFiniteValue`] for the given source.
    #[must_use]
    pub fn non_finite(context: impl Into<String>, value: f64) -> Self {
        Self::NonFiniteValue {
            context: context.into(),
            value,
        }
    }

    /// Build an [`EngineError::InvalidConfiguration`] with the given message.
    #[must_use]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
