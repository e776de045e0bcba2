//! Regression models mapping calendar features to revenue

use crate::error::Result;
use crate::features::FeatureRow;
use std::fmt::Debug;

/// Fitted model able to predict revenue for feature rows
pub trait FittedRevenueModel: Debug {
    /// Predict revenue for each row, in order
    fn predict(&self, features: &[FeatureRow]) -> Result<Vec<f64>>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Model that can be fitted on feature rows and observed revenue
pub trait RevenueModel: Debug + Clone {
    /// The type of fitted model produced
    type Fitted: FittedRevenueModel;

    /// Fit the model in a single batch
    fn fit(&self, features: &[FeatureRow], revenue: &[f64]) -> Result<Self::Fitted>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

pub mod linear_regression;
