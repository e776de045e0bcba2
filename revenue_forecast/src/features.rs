//! Calendar features derived from a date
//!
//! [`FeatureRow::from_date`] is the only way dates become model inputs, for
//! history and forecast horizon alike, so both always share one schema.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of numeric features per row
pub const FEATURE_COUNT: usize = 4;

/// Feature names in the order of [`FeatureRow::values`]
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["day_of_year", "day_of_week", "month", "year"];

/// Calendar features for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureRow {
    pub date: NaiveDate,
    /// 1 to 366
    pub day_of_year: u32,
    /// Monday is 0, Sunday is 6
    pub day_of_week: u32,
    /// 1 to 12
    pub month: u32,
    pub year: i32,
}

impl FeatureRow {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            day_of_year: date.ordinal(),
            day_of_week: date.weekday().num_days_from_monday(),
            month: date.month(),
            year: date.year(),
        }
    }

    /// Numeric regressors, ordered as [`FEATURE_NAMES`]
    pub fn values(&self) -> [f64; FEATURE_COUNT] {
        [
            f64::from(self.day_of_year),
            f64::from(self.day_of_week),
            f64::from(self.month),
            f64::from(self.year),
        ]
    }
}

/// Feature rows for a sequence of dates, in the same order
pub fn build_features(dates: &[NaiveDate]) -> Vec<FeatureRow> {
    dates.iter().copied().map(FeatureRow::from_date).collect()
}
