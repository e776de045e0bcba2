//! Transaction loading from CSV sources

use crate::config::{ForecastConfig, DEFAULT_DATE_COLUMN, DEFAULT_REVENUE_COLUMN};
use crate::error::{ForecastError, Result};
use crate::utils::parse_date;
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// A single order: when it was placed and how much it brought in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Calendar date of the order
    pub order_date: NaiveDate,
    /// Order revenue, never negative
    pub revenue: f64,
}

impl TransactionRecord {
    /// Create a record, rejecting negative or non-finite revenue
    pub fn new(order_date: NaiveDate, revenue: f64) -> Result<Self> {
        if !revenue.is_finite() || revenue < 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "Revenue must be a finite non-negative number, got {}",
                revenue
            )));
        }

        Ok(Self {
            order_date,
            revenue,
        })
    }
}

/// Loader for transaction records
#[derive(Debug, Clone)]
pub struct TransactionLoader {
    date_column: String,
    revenue_column: String,
}

impl Default for TransactionLoader {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_COLUMN, DEFAULT_REVENUE_COLUMN)
    }
}

impl TransactionLoader {
    /// Create a loader reading the given date and revenue columns
    pub fn new(date_column: &str, revenue_column: &str) -> Self {
        Self {
            date_column: date_column.trim().to_string(),
            revenue_column: revenue_column.trim().to_string(),
        }
    }

    /// Create a loader using the column names of a configuration
    pub fn from_config(config: &ForecastConfig) -> Self {
        Self::new(&config.date_column, &config.revenue_column)
    }

    /// Load transactions from a CSV file with the default column names
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<TransactionRecord>> {
        Self::default().load_csv(path)
    }

    /// Load transactions from a CSV file
    pub fn load_csv<P: AsRef<Path>>(&self, path: P) -> Result<Vec<TransactionRecord>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ForecastError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ForecastError::IoError(e),
        })?;

        info!("Loading transactions from {}", path.display());
        let records = self.load_reader(file)?;
        info!("Loaded {} transactions", records.len());
        Ok(records)
    }

    /// Load transactions from any CSV reader
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Vec<TransactionRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().trim_matches('"').to_string())
            .collect();
        debug!("CSV headers: {:?}", headers);

        let date_idx = headers.iter().position(|h| *h == self.date_column);
        let revenue_idx = headers.iter().position(|h| *h == self.revenue_column);

        let (date_idx, revenue_idx) = match (date_idx, revenue_idx) {
            (Some(d), Some(r)) => (d, r),
            (d, r) => {
                let mut missing = Vec::new();
                if d.is_none() {
                    missing.push(self.date_column.clone());
                }
                if r.is_none() {
                    missing.push(self.revenue_column.clone());
                }
                return Err(ForecastError::SchemaError {
                    missing,
                    available: headers,
                });
            }
        };

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            let raw_date = row.get(date_idx).unwrap_or("");
            let order_date = parse_date(raw_date).ok_or_else(|| ForecastError::ParseError {
                line,
                column: self.date_column.clone(),
                value: raw_date.to_string(),
                reason: "unrecognised date format".to_string(),
            })?;

            let raw_revenue = row.get(revenue_idx).unwrap_or("");
            let revenue = parse_revenue(raw_revenue).map_err(|reason| ForecastError::ParseError {
                line,
                column: self.revenue_column.clone(),
                value: raw_revenue.to_string(),
                reason,
            })?;

            records.push(TransactionRecord {
                order_date,
                revenue,
            });
        }

        Ok(records)
    }
}

fn parse_revenue(value: &str) -> std::result::Result<f64, String> {
    let revenue: f64 = value
        .trim()
        .trim_matches('"')
        .parse()
        .map_err(|e: std::num::ParseFloatError| e.to_string())?;

    if !revenue.is_finite() {
        return Err("revenue must be finite".to_string());
    }
    if revenue < 0.0 {
        return Err("revenue must not be negative".to_string());
    }

    Ok(revenue)
}
