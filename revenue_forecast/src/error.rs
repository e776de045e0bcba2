//! Error types for the revenue_forecast crate

use revenue_math::MathError;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the revenue_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The transaction source does not exist
    #[error("Transaction source not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed CSV structure (for example a row with the wrong field count)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Required columns are absent from the header
    #[error("Missing required column(s) {missing:?}; available columns: {available:?}")]
    SchemaError {
        missing: Vec<String>,
        available: Vec<String>,
    },

    /// A cell could not be parsed into the expected type
    #[error("Parse error at line {line}, column '{column}', value '{value}': {reason}")]
    ParseError {
        line: u64,
        column: String,
        value: String,
        reason: String,
    },

    /// No transactions to aggregate
    #[error("Cannot build a daily series from zero transactions")]
    EmptySeries,

    /// Not enough observations for the requested operation
    #[error("Insufficient data in {stage}: need at least {required} observations, got {actual}")]
    InsufficientData {
        stage: &'static str,
        required: usize,
        actual: usize,
    },

    /// The regression could not be solved
    #[error("Singular fit: {0}")]
    SingularFit(String),

    /// Two inputs that must line up do not
    #[error("Dimension mismatch in {stage}: expected {expected} values, got {actual}")]
    DimensionMismatch {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error loading configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ForecastError {
    /// Name of the pipeline stage the error belongs to
    pub fn stage(&self) -> &'static str {
        match self {
            Self::NotFound { .. }
            | Self::IoError(_)
            | Self::CsvError(_)
            | Self::SchemaError { .. }
            | Self::ParseError { .. } => "loader",
            Self::EmptySeries => "aggregator",
            Self::InsufficientData { stage, .. } | Self::DimensionMismatch { stage, .. } => *stage,
            Self::SingularFit(_) => "model",
            Self::InvalidParameter(_) | Self::ConfigError(_) => "configuration",
        }
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<MathError> for ForecastError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::SingularSystem(msg) => ForecastError::SingularFit(msg),
            MathError::InsufficientData(_) => ForecastError::InsufficientData {
                stage: "model",
                required: 1,
                actual: 0,
            },
            MathError::InvalidInput(msg) => ForecastError::InvalidParameter(msg),
        }
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::ConfigError(err.to_string())
    }
}
