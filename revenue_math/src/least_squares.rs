//! Ordinary least squares through a singular value decomposition
//!
//! The design matrix is centred column by column so the intercept drops out of
//! the decomposition. The centred system is decomposed with a one-sided Jacobi
//! SVD and solved through its pseudo-inverse. Singular values below
//! `max(σ) · max(n, p) · ε` are treated as zero, which yields the minimum-norm
//! solution when columns are collinear or constant instead of a blow-up.

use crate::{MathError, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

/// Upper bound on Jacobi sweeps before the decomposition is declared stuck
const MAX_SWEEPS: usize = 64;

/// Result of an ordinary least squares fit with intercept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeastSquaresFit {
    /// Coefficients, one per design matrix column
    pub coefficients: Vec<f64>,
    /// Intercept term
    pub intercept: f64,
    /// Numerical rank of the centred design matrix
    pub rank: usize,
    /// Singular values of the centred design matrix, unsorted
    pub singular_values: Vec<f64>,
}

impl LeastSquaresFit {
    /// Whether every column contributed an independent direction
    pub fn is_full_rank(&self) -> bool {
        self.rank == self.coefficients.len()
    }

    /// Predict the response for a single row of regressors
    pub fn predict_row(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.coefficients.len() {
            return Err(MathError::InvalidInput(format!(
                "Row has {} values but the fit has {} coefficients",
                row.len(),
                self.coefficients.len()
            )));
        }

        Ok(self.intercept
            + self
                .coefficients
                .iter()
                .zip(row.iter())
                .map(|(c, x)| c * x)
                .sum::<f64>())
    }

    /// Predict the response for every row of a design matrix
    pub fn predict(&self, design: ArrayView2<f64>) -> Result<Array1<f64>> {
        if design.ncols() != self.coefficients.len() {
            return Err(MathError::InvalidInput(format!(
                "Design matrix has {} columns but the fit has {} coefficients",
                design.ncols(),
                self.coefficients.len()
            )));
        }

        let coefficients = ArrayView1::from(&self.coefficients[..]);
        Ok(design.dot(&coefficients) + self.intercept)
    }
}

/// Thin singular value decomposition `A = U · diag(σ) · Vᵀ`
#[derive(Debug, Clone)]
pub struct SingularValueDecomposition {
    /// Left singular vectors as columns (zero columns for zero singular values)
    pub u: Array2<f64>,
    /// Singular values, in column order of the input
    pub singular_values: Array1<f64>,
    /// Right singular vectors as columns
    pub v: Array2<f64>,
}

impl SingularValueDecomposition {
    /// Largest singular value, zero for an all-zero matrix
    pub fn max_singular_value(&self) -> f64 {
        self.singular_values.iter().fold(0.0_f64, |acc, &s| acc.max(s))
    }

    /// Minimum-norm solution of `A · x = b` ignoring singular values at or below `cutoff`.
    ///
    /// Returns the solution together with the number of singular values kept.
    pub fn solve(&self, rhs: ArrayView1<f64>, cutoff: f64) -> Result<(Array1<f64>, usize)> {
        if rhs.len() != self.u.nrows() {
            return Err(MathError::InvalidInput(format!(
                "Right-hand side has {} values but the matrix has {} rows",
                rhs.len(),
                self.u.nrows()
            )));
        }

        let mut solution = Array1::<f64>::zeros(self.v.nrows());
        let mut rank = 0;

        for (j, &sigma) in self.singular_values.iter().enumerate() {
            if sigma <= cutoff {
                continue;
            }
            rank += 1;
            let weight = self.u.column(j).dot(&rhs) / sigma;
            solution.scaled_add(weight, &self.v.column(j));
        }

        Ok((solution, rank))
    }
}

/// Compute a thin SVD with the one-sided (Hestenes) Jacobi method.
///
/// Columns of a working copy are rotated pairwise until every pair is
/// numerically orthogonal; the column norms are then the singular values.
pub fn jacobi_svd(matrix: ArrayView2<f64>) -> Result<SingularValueDecomposition> {
    let (rows, cols) = matrix.dim();
    let mut u = matrix.to_owned();
    let mut v = Array2::<f64>::eye(cols);
    let tolerance = rows.max(1) as f64 * f64::EPSILON;

    let mut converged = false;
    for _ in 0..MAX_SWEEPS {
        let mut rotated = false;

        for i in 0..cols {
            for j in (i + 1)..cols {
                let (alpha, beta, gamma) = {
                    let ci = u.column(i);
                    let cj = u.column(j);
                    (ci.dot(&ci), cj.dot(&cj), ci.dot(&cj))
                };

                if gamma == 0.0 || gamma.abs() <= tolerance * (alpha * beta).sqrt() {
                    continue;
                }
                rotated = true;

                let zeta = (beta - alpha) / (2.0 * gamma);
                let t = zeta.signum() / (zeta.abs() + zeta.hypot(1.0));
                let c = 1.0 / t.hypot(1.0);
                let s = c * t;

                rotate_columns(&mut u, i, j, c, s);
                rotate_columns(&mut v, i, j, c, s);
            }
        }

        if !rotated {
            converged = true;
            break;
        }
    }

    if !converged {
        return Err(MathError::SingularSystem(format!(
            "Jacobi SVD did not converge after {} sweeps",
            MAX_SWEEPS
        )));
    }

    let singular_values: Array1<f64> = u
        .columns()
        .into_iter()
        .map(|column| column.dot(&column).sqrt())
        .collect();

    for (mut column, &sigma) in u.columns_mut().into_iter().zip(singular_values.iter()) {
        if sigma > 0.0 {
            column.mapv_inplace(|x| x / sigma);
        }
    }

    Ok(SingularValueDecomposition {
        u,
        singular_values,
        v,
    })
}

fn rotate_columns(matrix: &mut Array2<f64>, i: usize, j: usize, c: f64, s: f64) {
    for mut row in matrix.rows_mut() {
        let a = row[i];
        let b = row[j];
        row[i] = c * a - s * b;
        row[j] = s * a + c * b;
    }
}

/// Fit `y ≈ intercept + X · β` by ordinary least squares.
///
/// Rank-deficient designs are solved in the minimum-norm sense; constant
/// columns receive a zero coefficient. Fails with
/// [`MathError::SingularSystem`] when inputs are non-finite, the
/// decomposition does not converge, or the solution is not finite.
pub fn ordinary_least_squares(
    design: ArrayView2<f64>,
    target: ArrayView1<f64>,
) -> Result<LeastSquaresFit> {
    let (rows, cols) = design.dim();

    if rows == 0 {
        return Err(MathError::InsufficientData(
            "Least squares needs at least one observation".to_string(),
        ));
    }

    if target.len() != rows {
        return Err(MathError::InvalidInput(format!(
            "Design matrix has {} rows but target has {} values",
            rows,
            target.len()
        )));
    }

    if design.iter().chain(target.iter()).any(|v| !v.is_finite()) {
        return Err(MathError::SingularSystem(
            "Design matrix or target contains non-finite values".to_string(),
        ));
    }

    let column_means = design.mean_axis(Axis(0)).ok_or_else(|| {
        MathError::InsufficientData("Cannot average an empty design matrix".to_string())
    })?;
    let target_mean = target
        .mean()
        .ok_or_else(|| MathError::InsufficientData("Cannot average an empty target".to_string()))?;

    let centred = &design - &column_means;
    let centred_target = target.mapv(|v| v - target_mean);

    let svd = jacobi_svd(centred.view())?;
    let cutoff = svd.max_singular_value() * rows.max(cols) as f64 * f64::EPSILON;
    let (coefficients, rank) = svd.solve(centred_target.view(), cutoff)?;

    let intercept = target_mean - column_means.dot(&coefficients);

    if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
        return Err(MathError::SingularSystem(
            "Least squares solution is not finite".to_string(),
        ));
    }

    Ok(LeastSquaresFit {
        coefficients: coefficients.to_vec(),
        intercept,
        rank,
        singular_values: svd.singular_values.to_vec(),
    })
}
