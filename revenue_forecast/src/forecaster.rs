//! Extrapolation of revenue beyond the last observed day

use crate::error::{ForecastError, Result};
use crate::features::build_features;
use crate::models::FittedRevenueModel;
use crate::utils::future_dates;
use chrono::NaiveDate;
use log::info;
use serde::Serialize;

/// Point forecast for one future day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub revenue: f64,
}

/// Forecast over a contiguous run of future days
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    points: Vec<ForecastPoint>,
}

impl ForecastResult {
    /// Pair dates with predictions; both must have the same length
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                stage: "forecaster",
                expected: dates.len(),
                actual: values.len(),
            });
        }

        Ok(Self {
            points: dates
                .into_iter()
                .zip(values)
                .map(|(date, revenue)| ForecastPoint { date, revenue })
                .collect(),
        })
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.revenue).collect()
    }

    /// Number of days forecasted
    pub fn horizon(&self) -> usize {
        self.points.len()
    }

    /// Sum of predicted revenue over the horizon
    pub fn total_revenue(&self) -> f64 {
        self.points.iter().map(|p| p.revenue).sum()
    }
}

/// Predicts future days with a fitted model
#[derive(Debug)]
pub struct Forecaster<'a, M: FittedRevenueModel> {
    model: &'a M,
}

impl<'a, M: FittedRevenueModel> Forecaster<'a, M> {
    pub fn new(model: &'a M) -> Self {
        Self { model }
    }

    /// Forecast the `horizon` days following `last_date`
    pub fn forecast(&self, last_date: NaiveDate, horizon: usize) -> Result<ForecastResult> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "Forecast horizon must be at least 1 day".to_string(),
            ));
        }

        let dates = future_dates(last_date, horizon)?;
        let features = build_features(&dates);
        let values = self.model.predict(&features)?;

        info!(
            "Forecast {} days with {} from {} to {}",
            horizon,
            self.model.name(),
            dates[0],
            dates[dates.len() - 1]
        );

        ForecastResult::new(dates, values)
    }
}
