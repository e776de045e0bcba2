//! Pipeline configuration

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Default name of the order date column
pub const DEFAULT_DATE_COLUMN: &str = "Order Date";
/// Default name of the revenue column
pub const DEFAULT_REVENUE_COLUMN: &str = "Revenue";
/// Default share of the daily series used for training
pub const DEFAULT_SPLIT_RATIO: f64 = 0.8;
/// Default number of days to forecast
pub const DEFAULT_HORIZON: usize = 30;

/// Settings for a single forecasting run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Column holding the order date
    pub date_column: String,
    /// Column holding the order revenue
    pub revenue_column: String,
    /// Fraction of days assigned to the training segment, in (0, 1)
    pub split_ratio: f64,
    /// Number of future days to forecast, at least 1
    pub horizon: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            date_column: DEFAULT_DATE_COLUMN.to_string(),
            revenue_column: DEFAULT_REVENUE_COLUMN.to_string(),
            split_ratio: DEFAULT_SPLIT_RATIO,
            horizon: DEFAULT_HORIZON,
        }
    }
}

impl ForecastConfig {
    /// Create a validated configuration with the default column names
    pub fn new(split_ratio: f64, horizon: usize) -> Result<Self> {
        let config = Self {
            split_ratio,
            horizon,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the column names used by the loader
    pub fn with_columns(mut self, date_column: &str, revenue_column: &str) -> Self {
        self.date_column = date_column.to_string();
        self.revenue_column = revenue_column.to_string();
        self
    }

    /// Load a configuration from a JSON file; absent keys take their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ForecastError::ConfigError(format!("Cannot open {}: {}", path.display(), e))
        })?;

        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every setting is within its allowed range
    pub fn validate(&self) -> Result<()> {
        if !self.split_ratio.is_finite() || self.split_ratio <= 0.0 || self.split_ratio >= 1.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "Split ratio must be between 0 and 1 (exclusive), got {}",
                self.split_ratio
            )));
        }

        if self.horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "Forecast horizon must be at least 1 day".to_string(),
            ));
        }

        if self.date_column.trim().is_empty() || self.revenue_column.trim().is_empty() {
            return Err(ForecastError::InvalidParameter(
                "Column names must not be empty".to_string(),
            ));
        }

        if self.date_column.trim() == self.revenue_column.trim() {
            return Err(ForecastError::InvalidParameter(format!(
                "Date and revenue columns must differ, both are '{}'",
                self.date_column
            )));
        }

        Ok(())
    }
}
