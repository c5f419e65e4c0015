//! Error types for hotspot analysis operations.

use std::fmt;

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Pipeline stage that owns an `n × n` buffer, named in allocation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    DistanceMatrix,
    WeightMatrix,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::DistanceMatrix => "distance matrix",
            Stage::WeightMatrix => "weight matrix",
        };
        f.write_str(name)
    }
}

/// Error type for analysis operations
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Non-numeric value {raw:?} in column '{column}' at row {row}")]
    NonNumeric {
        column: String,
        row: usize,
        raw: String,
    },

    #[error("Non-finite value in column '{column}' at row {row}")]
    NonFinite { column: String, row: usize },

    #[error("Column '{column}' has {found} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("No data: {0}")]
    EmptyInput(String),

    #[error("Cannot allocate {stage} for n={n} points")]
    Allocation { stage: Stage, n: usize },

    #[error("Invalid coordinates: {message}")]
    InvalidCoordinates { message: String, input: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AnalysisError {
    /// The offending request text, for errors raised while parsing one.
    pub fn echoed_input(&self) -> Option<&str> {
        match self {
            AnalysisError::InvalidCoordinates { input, .. } => Some(input.as_str()),
            _ => None,
        }
    }
}
