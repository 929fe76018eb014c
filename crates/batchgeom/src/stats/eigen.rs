//! Principal axes of a point set: covariance → eigenpairs, in fixed stages.
//!
//! Stages (each gated by an `EigenCfg` flag, applied in this order)
//! 1. `center_columns`: subtract the column mean.
//! 2. `robust_covariance` or `classical_covariance`.
//! 3. `symmetric_eigenpairs`: ascending eigenvalues, eigenvectors as columns.
//! 4. `pca_normalize`: eigenvalues as fractions of total variance. A zero
//!    total yields NaN; it is not replaced.
//! 5. `sort_descending`: stable, so ties keep their ascending-stage order.
//!    NaN eigenvalues are ordered by `f64::total_cmp` (sign decides the end).
//! 6. `to_rows`: one eigenvector per row.

use std::borrow::Cow;
use std::cmp::Ordering;

use nalgebra::{DMatrix, DVector, SymmetricEigen};
use tracing::trace;

use super::robust::{robust_covariance, RobustCfg};
use super::{center_columns, classical_covariance};
use crate::error::GeomError;

/// How eigenvectors are stored in `EigenPairs::vectors`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisLayout {
    Columns,
    Rows,
}

/// Eigenvalues with their eigenvectors (same order).
#[derive(Clone, Debug)]
pub struct EigenPairs {
    pub values: DVector<f64>,
    pub vectors: DMatrix<f64>,
    pub layout: AxisLayout,
}

impl EigenPairs {
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Eigenvector paired with `values[i]`, regardless of layout.
    pub fn axis(&self, i: usize) -> DVector<f64> {
        match self.layout {
            AxisLayout::Columns => self.vectors.column(i).into_owned(),
            AxisLayout::Rows => self.vectors.row(i).transpose(),
        }
    }

    fn permuted(self, order: &[usize]) -> Self {
        let values = DVector::from_fn(order.len(), |i, _| self.values[order[i]]);
        let (r, c) = self.vectors.shape();
        let vectors = match self.layout {
            AxisLayout::Columns => DMatrix::from_fn(r, c, |i, j| self.vectors[(i, order[j])]),
            AxisLayout::Rows => DMatrix::from_fn(r, c, |i, j| self.vectors[(order[i], j)]),
        };
        Self {
            values,
            vectors,
            layout: self.layout,
        }
    }
}

/// Pipeline switches.
#[derive(Clone, Copy, Debug)]
pub struct EigenCfg {
    /// M-estimator covariance instead of the classical biased one.
    pub robust: bool,
    pub center: bool,
    /// Scale eigenvalues to sum to 1.
    pub pca_normalize: bool,
    /// Descending eigenvalue order.
    pub sort: bool,
    /// Eigenvectors as rows.
    pub transpose: bool,
    pub robust_cfg: RobustCfg,
}

impl Default for EigenCfg {
    fn default() -> Self {
        Self {
            robust: true,
            center: false,
            pca_normalize: true,
            sort: true,
            transpose: true,
            robust_cfg: RobustCfg::default(),
        }
    }
}

/// Eigendecomposition of the covariance of `coords` (`n×d`).
pub fn eigendecompose(coords: &DMatrix<f64>, cfg: EigenCfg) -> Result<EigenPairs, GeomError> {
    if coords.nrows() == 0 {
        return Err(GeomError::EmptyPointSet);
    }
    let coords = if cfg.center {
        Cow::Owned(center_columns(coords))
    } else {
        Cow::Borrowed(coords)
    };
    let cov = if cfg.robust {
        robust_covariance(&coords, cfg.robust_cfg)?
    } else {
        classical_covariance(&coords)?
    };
    trace!(robust = cfg.robust, d = cov.nrows(), "covariance ready");

    let mut pairs = symmetric_eigenpairs(cov);
    if cfg.pca_normalize {
        pairs = pca_normalize(pairs);
    }
    if cfg.sort {
        pairs = sort_descending(pairs);
    }
    if cfg.transpose {
        pairs = to_rows(pairs);
    }
    Ok(pairs)
}

/// Eigenpairs of a symmetric matrix, ascending, eigenvectors as columns.
pub fn symmetric_eigenpairs(cov: DMatrix<f64>) -> EigenPairs {
    let eig = SymmetricEigen::new(cov);
    let pairs = EigenPairs {
        values: eig.eigenvalues,
        vectors: eig.eigenvectors,
        layout: AxisLayout::Columns,
    };
    // nalgebra leaves eigenvalues unordered.
    let order = stable_order(&pairs.values, |a, b| a.total_cmp(&b));
    pairs.permuted(&order)
}

/// Divide eigenvalues by their sum.
pub fn pca_normalize(pairs: EigenPairs) -> EigenPairs {
    let total = pairs.values.sum();
    EigenPairs {
        values: pairs.values / total,
        ..pairs
    }
}

/// Reorder to descending eigenvalues; equal values keep their relative order.
pub fn sort_descending(pairs: EigenPairs) -> EigenPairs {
    let order = stable_order(&pairs.values, |a, b| b.total_cmp(&a));
    pairs.permuted(&order)
}

/// Store eigenvectors as rows. No-op if they already are.
pub fn to_rows(pairs: EigenPairs) -> EigenPairs {
    match pairs.layout {
        AxisLayout::Rows => pairs,
        AxisLayout::Columns => EigenPairs {
            vectors: pairs.vectors.transpose(),
            layout: AxisLayout::Rows,
            values: pairs.values,
        },
    }
}

/// Stable argsort under a total order on `f64` (NaN included).
fn stable_order(values: &DVector<f64>, cmp: impl Fn(f64, f64) -> Ordering) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| cmp(values[i], values[j]));
    order
}
