//! Error metrics for regression predictions
//!
//! All functions take `actual` first and `predicted` second and require two
//! non-empty slices of equal length.

use crate::{MathError, Result};

fn check_lengths(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.is_empty() {
        return Err(MathError::InsufficientData(
            "At least one observation is required".to_string(),
        ));
    }

    if actual.len() != predicted.len() {
        return Err(MathError::InvalidInput(format!(
            "Actual length ({}) doesn't match predicted length ({})",
            actual.len(),
            predicted.len()
        )));
    }

    Ok(())
}

/// Mean of `|predicted - actual|`
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (p - a).abs())
        .sum();

    Ok(sum / actual.len() as f64)
}

/// Mean of `(predicted - actual)²`
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_lengths(actual, predicted)?;

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (p - a).powi(2))
        .sum();

    Ok(sum / actual.len() as f64)
}

/// Square root of [`mean_squared_error`]
pub fn root_mean_squared_error(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    mean_squared_error(actual, predicted).map(f64::sqrt)
}

/// Coefficient of determination `1 - SS_res / SS_tot`.
///
/// Returns `Ok(None)` when every actual value is identical: the total sum of
/// squares is zero and the score is undefined.
pub fn r2_score(actual: &[f64], predicted: &[f64]) -> Result<Option<f64>> {
    check_lengths(actual, predicted)?;

    let first = actual[0];
    if actual.iter().all(|&a| a == first) {
        return Ok(None);
    }

    let mean = actual.iter().sum::<f64>() / actual.len() as f64;
    let ss_total: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();
    let ss_residual: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    Ok(Some(1.0 - ss_residual / ss_total))
}
