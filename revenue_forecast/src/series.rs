//! Daily revenue series built from transactions

use crate::data::TransactionRecord;
use crate::error::{ForecastError, Result};
use crate::split::{split_index, SeriesSplit};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Revenue for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: f64,
}

/// Contiguous, gap-free daily revenue series.
///
/// Every date is exactly one day after its predecessor. Days without
/// transactions carry zero revenue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    points: Vec<DailyRevenue>,
}

impl DailySeries {
    /// Aggregate transactions into daily totals over `[min_date, max_date]`, both inclusive
    pub fn from_transactions(transactions: &[TransactionRecord]) -> Result<Self> {
        let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for tx in transactions {
            *totals.entry(tx.order_date).or_insert(0.0) += tx.revenue;
        }

        let (first, last) = match (totals.keys().next(), totals.keys().next_back()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Err(ForecastError::EmptySeries),
        };

        let points: Vec<DailyRevenue> = first
            .iter_days()
            .take_while(|date| *date <= last)
            .map(|date| DailyRevenue {
                date,
                revenue: totals.get(&date).copied().unwrap_or(0.0),
            })
            .collect();

        debug!(
            "Aggregated {} transactions into {} days ({} with sales) from {} to {}",
            transactions.len(),
            points.len(),
            totals.len(),
            first,
            last
        );

        Ok(Self { points })
    }

    /// Build a series from consecutive daily revenues starting at `start`
    pub fn new(start: NaiveDate, revenues: Vec<f64>) -> Result<Self> {
        if revenues.is_empty() {
            return Err(ForecastError::EmptySeries);
        }

        if let Some(bad) = revenues.iter().find(|r| !r.is_finite() || **r < 0.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "Daily revenue must be a finite non-negative number, got {}",
                bad
            )));
        }

        let points = start
            .iter_days()
            .zip(revenues)
            .map(|(date, revenue)| DailyRevenue { date, revenue })
            .collect::<Vec<_>>();

        Ok(Self { points })
    }

    /// All days in order
    pub fn points(&self) -> &[DailyRevenue] {
        &self.points
    }

    /// Dates in order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Revenues in date order
    pub fn revenues(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.revenue).collect()
    }

    /// First observed day
    pub fn first_date(&self) -> NaiveDate {
        self.points[0].date
    }

    /// Last observed day
    pub fn last_date(&self) -> NaiveDate {
        self.points[self.points.len() - 1].date
    }

    /// Sum of revenue across all days
    pub fn total_revenue(&self) -> f64 {
        self.points.iter().map(|p| p.revenue).sum()
    }

    /// Number of days in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; an empty series cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Partition chronologically into train and test segments
    pub fn split(&self, ratio: f64) -> Result<SeriesSplit<'_>> {
        let boundary = split_index(self.len(), ratio)?;
        let (train, test) = self.points.split_at(boundary);
        Ok(SeriesSplit {
            boundary,
            train,
            test,
        })
    }
}
