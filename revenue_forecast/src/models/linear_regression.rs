//! Ordinary least squares regression on calendar features

use crate::error::{ForecastError, Result};
use crate::features::{FeatureRow, FEATURE_COUNT, FEATURE_NAMES};
use crate::models::{FittedRevenueModel, RevenueModel};
use log::{debug, warn};
use ndarray::{Array1, Array2};
use revenue_math::least_squares::ordinary_least_squares;
use serde::{Deserialize, Serialize};

/// Linear regression with intercept over [`FeatureRow::values`]
#[derive(Debug, Clone, Default)]
pub struct LinearRegression;

/// Fitted linear regression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedLinearRegression {
    /// Coefficients aligned with [`FEATURE_NAMES`]
    coefficients: [f64; FEATURE_COUNT],
    /// Intercept term
    intercept: f64,
    /// Numerical rank of the centred training design
    rank: usize,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self
    }
}

fn design_matrix(features: &[FeatureRow]) -> Result<Array2<f64>> {
    let flat: Vec<f64> = features.iter().flat_map(|row| row.values()).collect();
    Array2::from_shape_vec((features.len(), FEATURE_COUNT), flat)
        .map_err(|e| ForecastError::SingularFit(format!("Cannot shape design matrix: {}", e)))
}

impl RevenueModel for LinearRegression {
    type Fitted = FittedLinearRegression;

    fn fit(&self, features: &[FeatureRow], revenue: &[f64]) -> Result<Self::Fitted> {
        if features.is_empty() {
            return Err(ForecastError::InsufficientData {
                stage: "model",
                required: 1,
                actual: 0,
            });
        }

        if features.len() != revenue.len() {
            return Err(ForecastError::DimensionMismatch {
                stage: "model",
                expected: features.len(),
                actual: revenue.len(),
            });
        }

        let design = design_matrix(features)?;
        let target = Array1::from(revenue.to_vec());
        let fit = ordinary_least_squares(design.view(), target.view())?;

        let mut coefficients = [0.0; FEATURE_COUNT];
        coefficients.copy_from_slice(&fit.coefficients);

        if !fit.is_full_rank() {
            warn!(
                "Training features are rank deficient (rank {} of {}); using minimum-norm coefficients",
                fit.rank, FEATURE_COUNT
            );
        }
        debug!(
            "Fitted {} rows: intercept={:.4}, coefficients={:?}",
            features.len(),
            fit.intercept,
            FEATURE_NAMES.iter().zip(coefficients.iter()).collect::<Vec<_>>()
        );

        Ok(FittedLinearRegression {
            coefficients,
            intercept: fit.intercept,
            rank: fit.rank,
        })
    }

    fn name(&self) -> &str {
        "Linear Regression"
    }
}

impl FittedLinearRegression {
    /// Coefficients aligned with [`FEATURE_NAMES`]
    pub fn coefficients(&self) -> &[f64; FEATURE_COUNT] {
        &self.coefficients
    }

    /// Coefficient for a named feature
    pub fn coefficient(&self, feature: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|name| *name == feature)
            .map(|idx| self.coefficients[idx])
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Numerical rank of the centred training design
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Prediction for a single row
    pub fn predict_row(&self, row: &FeatureRow) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(row.values().iter())
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

impl FittedRevenueModel for FittedLinearRegression {
    fn predict(&self, features: &[FeatureRow]) -> Result<Vec<f64>> {
        Ok(features.iter().map(|row| self.predict_row(row)).collect())
    }

    fn name(&self) -> &str {
        "Linear Regression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::build_features;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    fn dates(start: NaiveDate, days: usize) -> Vec<NaiveDate> {
        start.iter_days().take(days).collect()
    }

    #[test]
    fn test_recovers_day_of_year_slope() {
        // Spans January and February so month varies; year stays constant
        let rows = build_features(&dates(NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(), 45));
        let revenue: Vec<f64> = rows
            .iter()
            .map(|r| 2.0 * f64::from(r.day_of_year) + 5.0)
            .collect();

        let fitted = LinearRegression::new().fit(&rows, &revenue).unwrap();

        assert_abs_diff_eq!(fitted.coefficient("day_of_year").unwrap(), 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(fitted.coefficient("day_of_week").unwrap(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(fitted.coefficient("month").unwrap(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(fitted.coefficient("year").unwrap(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fitted.intercept(), 5.0, epsilon = 1e-4);
        assert_eq!(fitted.rank(), 3);

        let predicted = fitted.predict(&rows).unwrap();
        for (p, a) in predicted.iter().zip(revenue.iter()) {
            assert_abs_diff_eq!(*p, *a, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_constant_revenue() {
        let rows = build_features(&dates(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(), 10));
        let revenue = vec![42.0; rows.len()];

        let fitted = LinearRegression::new().fit(&rows, &revenue).unwrap();

        for c in fitted.coefficients() {
            assert_abs_diff_eq!(*c, 0.0, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(fitted.intercept(), 42.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fit_errors() {
        let rows = build_features(&dates(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(), 3));

        assert!(matches!(
            LinearRegression::new().fit(&[], &[]),
            Err(ForecastError::InsufficientData { .. })
        ));
        assert!(matches!(
            LinearRegression::new().fit(&rows, &[1.0, 2.0]),
            Err(ForecastError::DimensionMismatch { expected: 3, actual: 2, .. })
        ));
        assert!(matches!(
            LinearRegression::new().fit(&rows, &[1.0, f64::NAN, 2.0]),
            Err(ForecastError::SingularFit(_))
        ));
    }

    #[test]
    fn test_unknown_coefficient_name() {
        let fitted = FittedLinearRegression {
            coefficients: [1.0, 2.0, 3.0, 4.0],
            intercept: 0.0,
            rank: 4,
        };
        assert_eq!(fitted.coefficient("month"), Some(3.0));
        assert_eq!(fitted.coefficient("hour"), None);
    }
}
