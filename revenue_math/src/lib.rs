//! # Revenue Math
//!
//! Numerical kernels behind the revenue forecasting pipeline.
//! This crate knows nothing about dates or files: it solves least-squares
//! problems and scores predictions against observations.

use thiserror::Error;

pub mod least_squares;
pub mod regression;

/// Errors that can occur in numerical calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Singular system: {0}")]
    SingularSystem(String),
}

/// Result type for numerical operations
pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MathError::SingularSystem("svd did not converge".to_string());
        assert_eq!(err.to_string(), "Singular system: svd did not converge");
    }
}
