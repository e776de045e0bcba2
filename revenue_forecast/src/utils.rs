//! Date helpers shared by the loader and the forecaster

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

/// Date-only layouts, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Date-time layouts, tried in order; the time of day is dropped
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse an order date into a calendar date.
///
/// Slash-separated dates are read month first. Any time component, including
/// an RFC 3339 offset, is discarded.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// The `horizon` consecutive days following `last_date`
pub fn future_dates(last_date: NaiveDate, horizon: usize) -> Result<Vec<NaiveDate>> {
    (1..=horizon as u64)
        .map(|offset| {
            last_date.checked_add_days(Days::new(offset)).ok_or_else(|| {
                ForecastError::InvalidParameter(format!(
                    "Forecast date {} days after {} is out of range",
                    offset, last_date
                ))
            })
        })
        .collect()
}
