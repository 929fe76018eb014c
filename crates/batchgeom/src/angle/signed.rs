use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{DMatrix, DVector, Vector3};

use super::unsigned::{angle_rows, reject_rows};
use crate::error::GeomError;
use crate::shape::{Broadcast, Scalars, Vectors};

/// Signed angle from `v1` to `v2` inside the plane orthogonal to `plane_normal`.
///
/// Sign is sign((v1 × v2)·n) with 0 counted as positive. All three arguments
/// broadcast together; the result is single iff all three are single.
pub fn signed_angle(
    v1: &Vectors,
    v2: &Vectors,
    plane_normal: &Vectors,
    to_degree: bool,
) -> Result<Scalars, GeomError> {
    let rad = signed_angle_rad(v1, v2, plane_normal)?;
    Ok(if to_degree {
        rad.map(f64::to_degrees)
    } else {
        rad
    })
}

/// Signed angle between `v1` and the undirected line spanned by `v2`, in
/// [-π/2, π/2].
pub fn minimal_line_signed_angle(
    v1: &Vectors,
    v2: &Vectors,
    plane_normal: &Vectors,
    to_degree: bool,
) -> Result<Scalars, GeomError> {
    let folded = signed_angle_rad(v1, v2, plane_normal)?.map(fold_to_line);
    Ok(if to_degree {
        folded.map(f64::to_degrees)
    } else {
        folded
    })
}

fn signed_angle_rad(
    v1: &Vectors,
    v2: &Vectors,
    plane_normal: &Vectors,
) -> Result<Scalars, GeomError> {
    let plan = Broadcast::new(&[v1, v2, plane_normal])?;
    if plan.d != 3 {
        return Err(GeomError::CrossDim { dim: plan.d });
    }
    let a = plan.expand(v1);
    let b = plan.expand(v2);
    let n = plan.expand(plane_normal);
    let unsigned = angle_rows(&reject_rows(&a, &n), &reject_rows(&b, &n), false);
    // The normal component of a × b is unchanged by the rejection.
    let signed = DVector::from_fn(plan.n, |i, _| {
        let s = row3(&a, i).cross(&row3(&b, i)).dot(&row3(&n, i));
        sign_or_positive(s) * unsigned[i]
    });
    Ok(Scalars::from_lifted(signed, plan.collapse))
}

#[inline]
fn row3(m: &DMatrix<f64>, i: usize) -> Vector3<f64> {
    Vector3::new(m[(i, 0)], m[(i, 1)], m[(i, 2)])
}

#[inline]
fn sign_or_positive(s: f64) -> f64 {
    if s.is_nan() {
        f64::NAN
    } else if s < 0.0 {
        -1.0
    } else {
        1.0
    }
}

#[inline]
fn fold_to_line(theta: f64) -> f64 {
    if theta.abs() > FRAC_PI_2 {
        theta - theta.signum() * PI
    } else {
        theta
    }
}
