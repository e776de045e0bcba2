//! End-to-end forecasting run
//!
//! Stages run strictly in order: load, aggregate, split, fit, evaluate,
//! forecast. The first failing stage aborts the run.

use crate::config::ForecastConfig;
use crate::data::{TransactionLoader, TransactionRecord};
use crate::error::Result;
use crate::features::build_features;
use crate::forecaster::{ForecastResult, Forecaster};
use crate::metrics::{evaluate, Metrics};
use crate::models::linear_regression::{FittedLinearRegression, LinearRegression};
use crate::models::{FittedRevenueModel, RevenueModel};
use crate::series::{DailyRevenue, DailySeries};
use log::info;
use serde::Serialize;
use std::path::Path;

/// Everything a run produces, for reporting and plotting
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// Full daily series
    pub series: DailySeries,
    /// Index of the first test day in `series`
    pub split_index: usize,
    /// Model predictions for the test days, aligned with [`PipelineReport::test`]
    pub test_predictions: Vec<f64>,
    /// Model fitted on the training days
    pub model: FittedLinearRegression,
    /// Test-segment metrics
    pub metrics: Metrics,
    /// Predictions beyond the last observed day
    pub forecast: ForecastResult,
}

impl PipelineReport {
    /// Training days
    pub fn train(&self) -> &[DailyRevenue] {
        &self.series.points()[..self.split_index]
    }

    /// Test days
    pub fn test(&self) -> &[DailyRevenue] {
        &self.series.points()[self.split_index..]
    }
}

/// Runs the forecasting stages with one configuration
#[derive(Debug, Clone, Default)]
pub struct ForecastPipeline {
    config: ForecastConfig,
}

impl ForecastPipeline {
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Load transactions from a CSV file and run every stage
    pub fn run_csv<P: AsRef<Path>>(&self, path: P) -> Result<PipelineReport> {
        let records = TransactionLoader::from_config(&self.config).load_csv(path)?;
        self.run(&records)
    }

    /// Aggregate transactions and run the remaining stages
    pub fn run(&self, records: &[TransactionRecord]) -> Result<PipelineReport> {
        let series = DailySeries::from_transactions(records)?;
        info!(
            "Daily series: {} days from {} to {}, total revenue {:.2}",
            series.len(),
            series.first_date(),
            series.last_date(),
            series.total_revenue()
        );
        self.run_series(series)
    }

    /// Split, fit, evaluate and forecast an already aggregated series
    pub fn run_series(&self, series: DailySeries) -> Result<PipelineReport> {
        let split = series.split(self.config.split_ratio)?;
        info!(
            "Chronological split at day {}: {} train, {} test",
            split.boundary,
            split.train.len(),
            split.test.len()
        );

        let train_features = build_features(&split.train_dates());
        let model = LinearRegression::new().fit(&train_features, &split.train_revenues())?;

        let test_features = build_features(&split.test_dates());
        let test_predictions = model.predict(&test_features)?;
        let metrics = evaluate(&test_predictions, &split.test_revenues())?;
        info!(
            "Test metrics: RMSE {:.2}, MAE {:.2}, R2 {:.2}",
            metrics.rmse, metrics.mae, metrics.r2
        );

        let forecast = Forecaster::new(&model).forecast(series.last_date(), self.config.horizon)?;
        let split_index = split.boundary;

        Ok(PipelineReport {
            series,
            split_index,
            test_predictions,
            model,
            metrics,
            forecast,
        })
    }
}
