//! Metrics for evaluating test-segment predictions

use crate::error::{ForecastError, Result};
use revenue_math::regression::{mean_absolute_error, r2_score, root_mean_squared_error};
use serde::{Serialize, Serializer};
use std::fmt;

/// Coefficient of determination, undefined when the actuals have no variance
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum R2Score {
    Defined(f64),
    Undefined,
}

impl R2Score {
    pub fn value(&self) -> Option<f64> {
        match self {
            R2Score::Defined(v) => Some(*v),
            R2Score::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, R2Score::Defined(_))
    }
}

impl fmt::Display for R2Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            R2Score::Defined(v) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v),
                None => write!(f, "{}", v),
            },
            R2Score::Undefined => f.write_str("undefined"),
        }
    }
}

impl Serialize for R2Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            R2Score::Defined(v) => serializer.serialize_f64(*v),
            R2Score::Undefined => serializer.serialize_str("undefined"),
        }
    }
}

/// Forecast performance metrics on the test segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Error
    pub mae: f64,
    /// Coefficient of determination
    pub r2: R2Score,
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RMSE: {:.2}", self.rmse)?;
        writeln!(f, "MAE: {:.2}", self.mae)?;
        write!(f, "R2 Score: {:.2}", self.r2)
    }
}

/// Score predictions against the actual test values
pub fn evaluate(predicted: &[f64], actual: &[f64]) -> Result<Metrics> {
    if actual.is_empty() {
        return Err(ForecastError::InsufficientData {
            stage: "evaluator",
            required: 1,
            actual: 0,
        });
    }

    if predicted.len() != actual.len() {
        return Err(ForecastError::DimensionMismatch {
            stage: "evaluator",
            expected: actual.len(),
            actual: predicted.len(),
        });
    }

    let r2 = match r2_score(actual, predicted)? {
        Some(v) => R2Score::Defined(v),
        None => R2Score::Undefined,
    };

    Ok(Metrics {
        rmse: root_mean_squared_error(actual, predicted)?,
        mae: mean_absolute_error(actual, predicted)?,
        r2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_evaluate() {
        let actual = [10.0, 20.0, 30.0, 40.0, 50.0];
        let predicted = [12.0, 18.0, 33.0, 37.0, 52.0];

        let metrics = evaluate(&predicted, &actual).unwrap();

        assert_abs_diff_eq!(metrics.mae, 2.4, epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.rmse, 6.0_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.r2.value().unwrap(), 0.97, epsilon = 1e-12);
    }

    #[test]
    fn test_undefined_r2() {
        let metrics = evaluate(&[4.0, 6.0], &[5.0, 5.0]).unwrap();

        assert_eq!(metrics.r2, R2Score::Undefined);
        assert!(!metrics.r2.is_defined());
        assert_abs_diff_eq!(metrics.mae, 1.0);
        assert_abs_diff_eq!(metrics.rmse, 1.0);
    }

    #[test]
    fn test_display() {
        let metrics = Metrics {
            rmse: 12.3456,
            mae: 7.0,
            r2: R2Score::Defined(-0.456),
        };
        assert_eq!(metrics.to_string(), "RMSE: 12.35\nMAE: 7.00\nR2 Score: -0.46");

        let undefined = Metrics {
            r2: R2Score::Undefined,
            ..metrics
        };
        assert!(undefined.to_string().ends_with("R2 Score: undefined"));
    }

    #[test]
    fn test_serialize_undefined_marker() {
        let metrics = Metrics {
            rmse: 1.0,
            mae: 0.5,
            r2: R2Score::Undefined,
        };
        let json = serde_json::to_value(metrics).unwrap();
        assert_eq!(json["r2"], "undefined");
        assert_eq!(json["rmse"], 1.0);
    }

    #[test]
    fn test_evaluate_errors() {
        assert!(matches!(
            evaluate(&[], &[]),
            Err(ForecastError::InsufficientData { stage: "evaluator", .. })
        ));
        assert!(matches!(
            evaluate(&[1.0], &[1.0, 2.0]),
            Err(ForecastError::DimensionMismatch { expected: 2, actual: 1, .. })
        ));
    }
}
