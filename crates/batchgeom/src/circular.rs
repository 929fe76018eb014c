//! Circular statistics over angles in radians.
//!
//! Model
//! - Each angle is a unit vector `(cos θ, sin θ)`; the (weighted) mean of
//!   those vectors has direction `mean_direction` and length `resultant_length`.
//! - Weights must match the angles in length. All-zero weights are treated
//!   as uniform.

use crate::error::GeomError;

/// Weighted mean direction in `(−π, π]`.
pub fn mean_direction(angles: &[f64], weights: Option<&[f64]>) -> Result<f64, GeomError> {
    let (s, c, _) = resultant(angles, weights)?;
    Ok(s.atan2(c))
}

/// Mean resultant length `R ∈ [0, 1]` (1: all angles equal; ~0: spread out).
pub fn resultant_length(angles: &[f64], weights: Option<&[f64]>) -> Result<f64, GeomError> {
    let (s, c, total) = resultant(angles, weights)?;
    Ok(s.hypot(c) / total)
}

/// `(Σ w sin θ, Σ w cos θ, Σ w)`.
fn resultant(angles: &[f64], weights: Option<&[f64]>) -> Result<(f64, f64, f64), GeomError> {
    if angles.is_empty() {
        return Err(GeomError::EmptyPointSet);
    }
    let weights = match weights {
        Some(w) if w.len() != angles.len() => {
            return Err(GeomError::ShapeMismatch {
                left: angles.len(),
                right: w.len(),
            })
        }
        Some(w) if w.iter().any(|x| *x != 0.0) => Some(w),
        _ => None,
    };
    let mut acc = (0.0, 0.0, 0.0);
    for (i, theta) in angles.iter().enumerate() {
        let w = weights.map_or(1.0, |w| w[i]);
        acc.0 += w * theta.sin();
        acc.1 += w * theta.cos();
        acc.2 += w;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn mean_of_symmetric_pair() {
        let m = mean_direction(&[0.1, -0.1], None).unwrap();
        assert!(m.abs() < 1e-12);
        let r = resultant_length(&[0.1, -0.1], None).unwrap();
        assert!((r - 0.1f64.cos()).abs() < 1e-12);
    }

    #[test]
    fn mean_wraps_across_pi() {
        let m = mean_direction(&[PI - 0.1, -PI + 0.1], None).unwrap();
        assert!((m.abs() - PI).abs() < 1e-12);
    }

    #[test]
    fn opposite_angles_have_zero_resultant() {
        let r = resultant_length(&[0.0, PI], None).unwrap();
        assert!(r < 1e-12);
    }

    #[test]
    fn weights_pull_the_mean() {
        let m = mean_direction(&[0.0, 1.0], Some(&[0.0, 2.0])).unwrap();
        assert!((m - 1.0).abs() < 1e-12);
        let uniform = mean_direction(&[0.0, 1.0], Some(&[0.0, 0.0])).unwrap();
        assert!((uniform - 0.5).abs() < 1e-12);
    }

    #[test]
    fn invalid_inputs_are_errors() {
        assert_eq!(mean_direction(&[], None).unwrap_err(), GeomError::EmptyPointSet);
        assert_eq!(
            resultant_length(&[0.0, 1.0], Some(&[1.0])).unwrap_err(),
            GeomError::ShapeMismatch { left: 2, right: 1 }
        );
    }
}
