use std::borrow::Cow;

use nalgebra::{DMatrix, DVector};

use super::AngleCfg;
use crate::cfg::{COSINE_EPS, REJECT_EPS};
use crate::error::GeomError;
use crate::shape::{Broadcast, Scalars, Vectors};
use crate::vector::{row_dots, row_norms};

/// Component of `v` orthogonal to `from_v`: `v - (v·f / (f·f + ε)) f`.
///
/// Single output only when both inputs are single vectors.
pub fn reject(v: &Vectors, from_v: &Vectors) -> Result<Vectors, GeomError> {
    let plan = Broadcast::new(&[v, from_v])?;
    let out = reject_rows(&plan.expand(v), &plan.expand(from_v));
    Ok(Vectors::from_lifted(out, plan.collapse))
}

/// Unsigned angle between `v1` and `v2`, optionally measured in the plane
/// orthogonal to `plane_normal`.
///
/// Returns a single value iff both `v1` and `v2` are single vectors (and a
/// batch normal did not widen the result).
pub fn angle(
    v1: &Vectors,
    v2: &Vectors,
    plane_normal: Option<&Vectors>,
    cfg: AngleCfg,
) -> Result<Scalars, GeomError> {
    let collapse = v1.is_single() && v2.is_single();
    let (p1, p2): (Cow<'_, Vectors>, Cow<'_, Vectors>) = match plane_normal {
        Some(n) => (Cow::Owned(reject(v1, n)?), Cow::Owned(reject(v2, n)?)),
        None => (Cow::Borrowed(v1), Cow::Borrowed(v2)),
    };
    let plan = Broadcast::new(&[&*p1, &*p2])?;
    let rad = angle_rows(&plan.expand(&p1), &plan.expand(&p2), cfg.assume_normalized);
    let out = if cfg.to_degree {
        rad.map(f64::to_degrees)
    } else {
        rad
    };
    Ok(Scalars::from_lifted(out, collapse))
}

pub(super) fn reject_rows(v: &DMatrix<f64>, from_v: &DMatrix<f64>) -> DMatrix<f64> {
    let mut out = v.clone();
    for (i, mut row) in out.row_iter_mut().enumerate() {
        let f = from_v.row(i);
        let k = row.dot(&f) / (f.dot(&f) + REJECT_EPS);
        row -= f * k;
    }
    out
}

/// Row-wise unsigned angle in radians; inputs already broadcast.
pub(super) fn angle_rows(
    a: &DMatrix<f64>,
    b: &DMatrix<f64>,
    assume_normalized: bool,
) -> DVector<f64> {
    let dots = row_dots(a, b);
    let cos = if assume_normalized {
        dots
    } else {
        let mags = row_norms(a).component_mul(&row_norms(b));
        dots.zip_map(&mags, |d, m| d / (m + COSINE_EPS))
    };
    cos.map(|c| c.clamp(-1.0, 1.0).acos())
}
