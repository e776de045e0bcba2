//! # Revenue Forecast
//!
//! Daily revenue forecasting from per-order e-commerce transactions.
//!
//! ## Features
//!
//! - CSV loading of order date and revenue columns
//! - Aggregation into a contiguous, zero-filled daily series
//! - Calendar features (day of year, day of week, month, year)
//! - Chronological train/test split
//! - Linear regression fitted by SVD-based least squares
//! - RMSE, MAE and R2 on the test segment
//! - Point forecasts for the days after the last observation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use revenue_forecast::{ForecastConfig, ForecastPipeline};
//!
//! let pipeline = ForecastPipeline::new(ForecastConfig::default())?;
//! let report = pipeline.run_csv("orders.csv")?;
//!
//! println!("{}", report.metrics);
//! for point in report.forecast.points() {
//!     println!("{} {:.2}", point.date, point.revenue);
//! }
//! # Ok::<(), revenue_forecast::ForecastError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod features;
pub mod forecaster;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod series;
pub mod split;
pub mod utils;

// Re-export commonly used types
pub use crate::config::ForecastConfig;
pub use crate::data::{TransactionLoader, TransactionRecord};
pub use crate::error::ForecastError;
pub use crate::features::FeatureRow;
pub use crate::forecaster::{ForecastResult, Forecaster};
pub use crate::metrics::{Metrics, R2Score};
pub use crate::models::linear_regression::{FittedLinearRegression, LinearRegression};
pub use crate::models::{FittedRevenueModel, RevenueModel};
pub use crate::pipeline::{ForecastPipeline, PipelineReport};
pub use crate::series::{DailyRevenue, DailySeries};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
