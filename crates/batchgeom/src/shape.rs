//! Shape resolution: single vectors vs. batches, and the broadcasting rule.
//!
//! Purpose
//! - Give every geometric operation one explicit lift → compute → collapse path
//!   instead of relying on implicit array broadcasting.
//!
//! Conventions
//! - A batch is an `n×d` `DMatrix`, one vector per row.
//! - Two lifted arguments are compatible iff their batch sizes are equal or one
//!   of them is 1. The check is explicit and fails with `ShapeMismatch`.
//! - Size-1 arguments are replicated to the common batch size.
//! - Outputs collapse back to single form only when every argument that shapes
//!   the output was passed as a single vector.
//!
//! Cross-refs: `vector::{magnitude,distance}`, `angle::{reject,angle,signed_angle}`.

use nalgebra::{DMatrix, DVector};

use crate::error::GeomError;

/// A vector-valued argument: one vector, or a batch of row vectors.
#[derive(Clone, Debug, PartialEq)]
pub enum Vectors {
    Single(DVector<f64>),
    Batch(DMatrix<f64>),
}

impl Vectors {
    #[inline]
    pub fn single(xs: &[f64]) -> Self {
        Vectors::Single(DVector::from_column_slice(xs))
    }

    /// Build a batch from row slices. Rows must share one length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, GeomError> {
        let d = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * d);
        for r in rows {
            let r = r.as_ref();
            if r.len() != d {
                return Err(GeomError::DimMismatch {
                    left: d,
                    right: r.len(),
                });
            }
            data.extend_from_slice(r);
        }
        Ok(Vectors::Batch(DMatrix::from_row_slice(rows.len(), d, &data)))
    }

    #[inline]
    pub fn is_single(&self) -> bool {
        matches!(self, Vectors::Single(_))
    }

    /// Batch size after lifting (1 for a single vector).
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Vectors::Single(_) => 1,
            Vectors::Batch(m) => m.nrows(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Vector dimension `d`.
    #[inline]
    pub fn dim(&self) -> usize {
        match self {
            Vectors::Single(v) => v.len(),
            Vectors::Batch(m) => m.ncols(),
        }
    }

    /// Lift to batch form (`1×d` for a single vector).
    pub fn to_batch(&self) -> DMatrix<f64> {
        match self {
            Vectors::Single(v) => DMatrix::from_row_slice(1, v.len(), v.as_slice()),
            Vectors::Batch(m) => m.clone(),
        }
    }

    /// Row `i` of the lifted batch.
    pub fn row(&self, i: usize) -> Option<DVector<f64>> {
        match self {
            Vectors::Single(v) if i == 0 => Some(v.clone()),
            Vectors::Single(_) => None,
            Vectors::Batch(m) if i < m.nrows() => Some(m.row(i).transpose()),
            Vectors::Batch(_) => None,
        }
    }

    pub(crate) fn from_lifted(m: DMatrix<f64>, collapse: bool) -> Self {
        if collapse && m.nrows() == 1 {
            Vectors::Single(m.row(0).transpose())
        } else {
            Vectors::Batch(m)
        }
    }
}

impl From<DVector<f64>> for Vectors {
    fn from(v: DVector<f64>) -> Self {
        Vectors::Single(v)
    }
}

impl From<DMatrix<f64>> for Vectors {
    fn from(m: DMatrix<f64>) -> Self {
        Vectors::Batch(m)
    }
}

/// Scalar-valued output: one value, or one value per batch row.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalars {
    Single(f64),
    Batch(DVector<f64>),
}

impl Scalars {
    #[inline]
    pub fn as_single(&self) -> Option<f64> {
        match self {
            Scalars::Single(x) => Some(*x),
            Scalars::Batch(_) => None,
        }
    }

    #[inline]
    pub fn as_batch(&self) -> Option<&DVector<f64>> {
        match self {
            Scalars::Single(_) => None,
            Scalars::Batch(v) => Some(v),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Scalars::Single(_) => 1,
            Scalars::Batch(v) => v.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Scalars::Single(x) => vec![*x],
            Scalars::Batch(v) => v.iter().copied().collect(),
        }
    }

    /// Elementwise map that keeps the single/batch form.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            Scalars::Single(x) => Scalars::Single(f(x)),
            Scalars::Batch(v) => Scalars::Batch(v.map(f)),
        }
    }

    pub(crate) fn from_lifted(v: DVector<f64>, collapse: bool) -> Self {
        if collapse && v.len() == 1 {
            Scalars::Single(v[0])
        } else {
            Scalars::Batch(v)
        }
    }
}

/// Raw row-major array of any rank.
///
/// Only the rank-policy entry points (`magnitude_nd`, `normalize_nd`) accept it;
/// everything else takes `Vectors`, whose rank is 1 or 2 by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayNd {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl ArrayNd {
    pub fn new(shape: Vec<usize>, data: Vec<f64>) -> Result<Self, GeomError> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(GeomError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Interpret as a single vector (rank 1) or batch (rank 2).
    pub fn to_vectors(&self) -> Result<Vectors, GeomError> {
        match self.shape.as_slice() {
            [_] => Ok(Vectors::single(&self.data)),
            [n, d] => Ok(Vectors::Batch(DMatrix::from_row_slice(*n, *d, &self.data))),
            _ => Err(GeomError::Dimension { rank: self.rank() }),
        }
    }
}

impl From<&Vectors> for ArrayNd {
    fn from(v: &Vectors) -> Self {
        match v {
            Vectors::Single(x) => Self {
                shape: vec![x.len()],
                data: x.iter().copied().collect(),
            },
            Vectors::Batch(m) => Self {
                shape: vec![m.nrows(), m.ncols()],
                data: m.transpose().iter().copied().collect(),
            },
        }
    }
}

/// Common batch size of the arguments under the broadcasting rule.
///
/// Every pair must have equal sizes or contain a size of 1.
pub fn resolve_batch(args: &[&Vectors]) -> Result<usize, GeomError> {
    let mut n = 1usize;
    for a in args {
        let m = a.len();
        if m == 1 {
            continue;
        }
        if n == 1 {
            n = m;
        } else if n != m {
            return Err(GeomError::ShapeMismatch { left: n, right: m });
        }
    }
    Ok(n)
}

/// Common vector dimension of the arguments.
pub(crate) fn resolve_dim(args: &[&Vectors]) -> Result<usize, GeomError> {
    let d = args.first().map_or(0, |a| a.dim());
    for a in args {
        if a.dim() != d {
            return Err(GeomError::DimMismatch {
                left: d,
                right: a.dim(),
            });
        }
    }
    Ok(d)
}

/// Resolved broadcast plan for one call.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Broadcast {
    pub n: usize,
    pub d: usize,
    /// True when every output-shaping argument was a single vector.
    pub collapse: bool,
}

impl Broadcast {
    pub fn new(args: &[&Vectors]) -> Result<Self, GeomError> {
        let n = resolve_batch(args)?;
        let d = resolve_dim(args)?;
        let collapse = args.iter().all(|a| a.is_single());
        Ok(Self { n, d, collapse })
    }

    /// Lift `v` and replicate a size-1 batch to `n` rows.
    pub fn expand(&self, v: &Vectors) -> DMatrix<f64> {
        let m = v.to_batch();
        if m.nrows() == self.n {
            return m;
        }
        debug_assert_eq!(m.nrows(), 1, "expand called on an unresolved argument");
        DMatrix::from_fn(self.n, m.ncols(), |_, j| m[(0, j)])
    }
}
