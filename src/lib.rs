//! # Revenue Forecast Workspace
//!
//! Facade over the workspace crates: [`revenue_forecast`] for the
//! forecasting pipeline and [`revenue_math`] for its numerical kernels.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use revenue_forecast_workspace::{DailySeries, ForecastConfig, ForecastPipeline};
//!
//! let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
//! let series = DailySeries::new(start, vec![100.0, 110.0, 90.0, 120.0, 130.0]).unwrap();
//!
//! let pipeline = ForecastPipeline::new(ForecastConfig::new(0.8, 7).unwrap()).unwrap();
//! let report = pipeline.run_series(series).unwrap();
//!
//! assert_eq!(report.test().len(), 1);
//! assert_eq!(report.forecast.horizon(), 7);
//! ```

pub use revenue_forecast::*;
pub use revenue_math;
