//! Error types for generation.

use thiserror::Error;

use scythe_theory::{EngineError, TheoryError};

/// Errors that can occur while generating material.
///
/// Generators themselves never fail on unknown style names; these errors
/// cover malformed note names and invalid sketch configuration.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Malformed theory input (note names, time signatures).
    #[error(transparent)]
    Theory(#[from] TheoryError),

    /// Sketch configuration could not be decoded.
    #[error("invalid sketch JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A sketch configuration value is out of range.
    #[error("invalid sketch field '{field}': {message}")]
    InvalidSpec { field: &'static str, message: String },
}

impl GenerateError {
    pub(crate) fn invalid_spec(field: &'static str, message: impl Into<String>) -> Self {
        GenerateError::InvalidSpec {
            field,
            message: message.into(),
        }
    }
}

impl EngineError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::Theory(inner) => inner.code(),
            GenerateError::InvalidSpec { .. } => "GENERATE_001",
            GenerateError::Json(_) => "GENERATE_002",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            GenerateError::Theory(inner) => inner.category(),
            _ => "generate",
        }
    }
}
