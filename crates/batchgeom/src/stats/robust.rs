//! Huber-type M-estimator of covariance (iteratively reweighted).
//!
//! Model
//! - Start from the sample mean and the biased sample covariance.
//! - Each step inverts `Σ + 1e-6·I`, computes squared Mahalanobis distances
//!   `d²`, assigns weight 1 when `d² < c²` and `c²/d²` otherwise, then refits a
//!   weighted mean and weighted covariance (normalised by the weight sum).
//! - Stops once the mean moves less than `tol`, or after `max_iter` steps. The
//!   estimate at that point is returned either way; non-convergence is only
//!   visible through `RobustEstimate::converged`.
//! - The regularizer is used for the inversion only and never returned.

use nalgebra::{DMatrix, DVector};
use tracing::{debug, warn};

use super::{column_mean, weighted_covariance, weighted_mean};
use crate::cfg::COV_REGULARIZER;
use crate::error::GeomError;

/// Estimator tuning.
#[derive(Clone, Copy, Debug)]
pub struct RobustCfg {
    /// Huber cutoff on the Mahalanobis distance.
    pub c: f64,
    /// Convergence threshold on the Euclidean shift of the mean.
    pub tol: f64,
    pub max_iter: usize,
}

impl Default for RobustCfg {
    fn default() -> Self {
        Self {
            c: 1.5,
            tol: 1e-6,
            max_iter: 100,
        }
    }
}

/// Final loop state of the estimator.
#[derive(Clone, Debug)]
pub struct RobustEstimate {
    pub mean: DVector<f64>,
    pub covariance: DMatrix<f64>,
    /// Weights used for the final refit (all 1 if no step ran).
    pub weights: DVector<f64>,
    pub iterations: usize,
    pub converged: bool,
}

/// Robust covariance of an `n×d` point set.
pub fn robust_covariance(x: &DMatrix<f64>, cfg: RobustCfg) -> Result<DMatrix<f64>, GeomError> {
    Ok(robust_estimate(x, cfg)?.covariance)
}

/// Run the estimator and keep the full loop state.
pub fn robust_estimate(x: &DMatrix<f64>, cfg: RobustCfg) -> Result<RobustEstimate, GeomError> {
    let (n, d) = x.shape();
    if n == 0 {
        return Err(GeomError::EmptyPointSet);
    }
    let c2 = cfg.c * cfg.c;
    let mut mean = column_mean(x);
    let mut covariance = weighted_covariance(x, &mean, &DVector::from_element(n, 1.0));
    let mut weights = DVector::from_element(n, 1.0);
    let mut iterations = 0;
    let mut converged = false;
    let mut shift = f64::INFINITY;

    while iterations < cfg.max_iter && !converged {
        let regularized = &covariance + DMatrix::<f64>::identity(d, d) * COV_REGULARIZER;
        let Some(precision) = regularized.try_inverse() else {
            warn!(iterations, "regularized covariance is singular; keeping current estimate");
            break;
        };
        let w = huber_weights(x, &mean, &precision, c2);
        let next_mean = weighted_mean(x, &w);
        covariance = weighted_covariance(x, &next_mean, &w);
        shift = (&next_mean - &mean).norm();
        converged = shift < cfg.tol;
        mean = next_mean;
        weights = w;
        iterations += 1;
    }

    debug!(n, d, iterations, converged, shift, "robust covariance finished");
    Ok(RobustEstimate {
        mean,
        covariance,
        weights,
        iterations,
        converged,
    })
}

/// Squared Mahalanobis distance of each row from `mean` under `precision`.
pub fn mahalanobis_sq(
    x: &DMatrix<f64>,
    mean: &DVector<f64>,
    precision: &DMatrix<f64>,
) -> DVector<f64> {
    DVector::from_iterator(
        x.nrows(),
        x.row_iter().map(|row| {
            let diff = row.transpose() - mean;
            diff.dot(&(precision * &diff))
        }),
    )
}

fn huber_weights(
    x: &DMatrix<f64>,
    mean: &DVector<f64>,
    precision: &DMatrix<f64>,
    c2: f64,
) -> DVector<f64> {
    mahalanobis_sq(x, mean, precision).map(|m| if m < c2 { 1.0 } else { c2 / m })
}
