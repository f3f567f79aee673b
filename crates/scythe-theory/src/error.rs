//! Error types for music theory operations.

use thiserror::Error;

/// Common interface for errors surfaced by the engine crates.
///
/// Each error carries a stable machine-readable code so front ends can report
/// failures without matching on display strings.
pub trait EngineError: std::error::Error {
    /// Returns the stable error code (e.g., "THEORY_001").
    fn code(&self) -> &'static str;

    /// Returns the error category (e.g., "theory").
    fn category(&self) -> &'static str;
}

/// Errors that can occur while interpreting music theory input.
///
/// Unknown table keys (scale types, chord types, genres, styles) are never
/// errors; they fall back to documented defaults. Only malformed input that
/// the caller must fix is reported here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("invalid note name '{name}'")]
    InvalidNote { name: String },
    #[error("invalid time signature '{text}' (expected N/D with N, D > 0)")]
    InvalidTimeSignature { text: String },
}

impl TheoryError {
    pub(crate) fn invalid_note(name: impl Into<String>) -> Self {
        TheoryError::InvalidNote { name: name.into() }
    }
}

impl EngineError for TheoryError {
    fn code(&self) -> &'static str {
        match self {
            TheoryError::InvalidNote { .. } => "THEORY_001",
            TheoryError::InvalidTimeSignature { .. } => "THEORY_002",
        }
    }

    fn category(&self) -> &'static str {
        "theory"
    }
}
