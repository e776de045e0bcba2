//! Chronological train/test partitioning

use crate::error::{ForecastError, Result};
use crate::series::DailyRevenue;
use chrono::NaiveDate;

/// Compute the train/test boundary for a series of `len` days.
///
/// The boundary is `floor(len * ratio)` clamped to `[1, len - 1]`, so both
/// segments are non-empty. Fails when `len < 2` or `ratio` is outside (0, 1).
pub fn split_index(len: usize, ratio: f64) -> Result<usize> {
    if !ratio.is_finite() || ratio <= 0.0 || ratio >= 1.0 {
        return Err(ForecastError::InvalidParameter(format!(
            "Split ratio must be between 0 and 1 (exclusive), got {}",
            ratio
        )));
    }

    if len < 2 {
        return Err(ForecastError::InsufficientData {
            stage: "splitter",
            required: 2,
            actual: len,
        });
    }

    let boundary = (len as f64 * ratio).floor() as usize;
    Ok(boundary.clamp(1, len - 1))
}

/// Borrowed view of a series split at a boundary index
#[derive(Debug, Clone, Copy)]
pub struct SeriesSplit<'a> {
    /// Index of the first test day
    pub boundary: usize,
    /// Days before the boundary
    pub train: &'a [DailyRevenue],
    /// Days from the boundary onwards
    pub test: &'a [DailyRevenue],
}

impl<'a> SeriesSplit<'a> {
    pub fn train_dates(&self) -> Vec<NaiveDate> {
        self.train.iter().map(|p| p.date).collect()
    }

    pub fn train_revenues(&self) -> Vec<f64> {
        self.train.iter().map(|p| p.revenue).collect()
    }

    pub fn test_dates(&self) -> Vec<NaiveDate> {
        self.test.iter().map(|p| p.date).collect()
    }

    pub fn test_revenues(&self) -> Vec<f64> {
        self.test.iter().map(|p| p.revenue).collect()
    }
}
