//! Point-set statistics: classical and robust covariance, principal axes.
//!
//! Conventions
//! - Point sets are `n×d` `DMatrix`es, one point per row, `n ≥ 1`.
//! - Covariances are biased (normalised by `n`, or by the weight sum).
//! - Everything is deterministic; the robust loop is bounded by `max_iter`.
//!
//! Cross-refs: `robust::{robust_covariance,robust_estimate}`, `eigen::eigendecompose`.

pub mod eigen;
pub mod robust;

pub use eigen::{
    eigendecompose, pca_normalize, sort_descending, symmetric_eigenpairs, to_rows, AxisLayout,
    EigenCfg, EigenPairs,
};
pub use robust::{mahalanobis_sq, robust_covariance, robust_estimate, RobustCfg, RobustEstimate};

use nalgebra::{DMatrix, DVector};

use crate::error::GeomError;

/// Mean of each column.
pub fn column_mean(x: &DMatrix<f64>) -> DVector<f64> {
    DVector::from_fn(x.ncols(), |j, _| x.column(j).mean())
}

/// Subtract the column mean from every row.
pub fn center_columns(x: &DMatrix<f64>) -> DMatrix<f64> {
    let mean = column_mean(x);
    DMatrix::from_fn(x.nrows(), x.ncols(), |i, j| x[(i, j)] - mean[j])
}

/// Biased sample covariance (normalised by `n`).
pub fn classical_covariance(x: &DMatrix<f64>) -> Result<DMatrix<f64>, GeomError> {
    if x.nrows() == 0 {
        return Err(GeomError::EmptyPointSet);
    }
    let mean = column_mean(x);
    Ok(weighted_covariance(
        x,
        &mean,
        &DVector::from_element(x.nrows(), 1.0),
    ))
}

pub(crate) fn weighted_mean(x: &DMatrix<f64>, w: &DVector<f64>) -> DVector<f64> {
    let total = w.sum();
    let mut acc = DVector::<f64>::zeros(x.ncols());
    for (row, wi) in x.row_iter().zip(w.iter()) {
        acc += row.transpose() * *wi;
    }
    acc / total
}

pub(crate) fn weighted_covariance(
    x: &DMatrix<f64>,
    mean: &DVector<f64>,
    w: &DVector<f64>,
) -> DMatrix<f64> {
    let total = w.sum();
    let d = x.ncols();
    let mut cov = DMatrix::<f64>::zeros(d, d);
    for (row, wi) in x.row_iter().zip(w.iter()) {
        let cp = row.transpose() - mean;
        let s = *wi / total;
        for a in 0..d {
            for b in 0..=a {
                cov[(a, b)] += s * cp[a] * cp[b];
            }
        }
    }
    // Mirror instead of accumulating twice: the result is exactly symmetric.
    cov.fill_upper_triangle_with_lower_triangle();
    cov
}
