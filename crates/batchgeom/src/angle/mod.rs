//! Rejection and the angle family (unsigned, signed, minimal line angle).
//!
//! Purpose
//! - Measure angles between vectors or batches, optionally inside the plane
//!   orthogonal to a normal (both inputs are rejected against it first).
//!
//! Conventions
//! - Broadcasting follows `crate::shape` (equal sizes or a size of 1); failures
//!   are `GeomError::ShapeMismatch`, never NaN.
//! - Denominators are ε-regularized (`1e-10`); cosines are clamped to [-1, 1].
//! - Signed angles use sign((v1 × v2)·n). A zero sign (collinear inputs) counts
//!   as positive. Only 3D vectors are accepted there.
//! - `minimal_line_signed_angle` treats `v2` as an undirected line and folds the
//!   result into [-π/2, π/2]. Exactly ±π/2 is left unfolded.
//!
//! Cross-refs: `shape::Broadcast`, `vector::{row_norms,row_dots}`.

mod signed;
mod unsigned;

pub use signed::{minimal_line_signed_angle, signed_angle};
pub use unsigned::{angle, reject};

/// Options for `angle`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AngleCfg {
    /// Use the raw dot product as the cosine (inputs are known unit vectors).
    pub assume_normalized: bool,
    /// Return degrees instead of radians.
    pub to_degree: bool,
}
