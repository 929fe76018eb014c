//! Rotation matrices from rotation vectors (axis · angle).
//!
//! Model
//! - Rodrigues: `R = I + sin θ·K + (1 − cos θ)·K²`, `K` the cross-product
//!   matrix of the unit axis, `θ = ‖r‖`.
//! - `‖r‖ < ROTVEC_EPS` maps to the identity.

use nalgebra::{Matrix3, Rotation3, Unit, Vector3};

use crate::cfg::ROTVEC_EPS;
use crate::error::GeomError;
use crate::shape::Vectors;

/// Rotation by `‖r‖` radians about `r / ‖r‖` (right-hand rule).
pub fn rotation_matrix_from_rotvec(r: &Vector3<f64>) -> Matrix3<f64> {
    let theta = r.norm();
    if theta < ROTVEC_EPS {
        return Matrix3::identity();
    }
    let axis = Unit::new_unchecked(r / theta);
    Rotation3::from_axis_angle(&axis, theta).into_inner()
}

/// One rotation matrix per input vector (single input yields one matrix).
pub fn rotation_matrices_from_rotvecs(r: &Vectors) -> Result<Vec<Matrix3<f64>>, GeomError> {
    if r.dim() != 3 {
        return Err(GeomError::CrossDim { dim: r.dim() });
    }
    let m = r.to_batch();
    Ok(m.row_iter()
        .map(|row| rotation_matrix_from_rotvec(&Vector3::new(row[0], row[1], row[2])))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close(a: &Matrix3<f64>, b: &Matrix3<f64>) -> bool {
        (a - b).abs().max() < 1e-12
    }

    #[test]
    fn quarter_turn_about_z() {
        let r = rotation_matrix_from_rotvec(&Vector3::new(0.0, 0.0, FRAC_PI_2));
        let expected = Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        assert!(close(&r, &expected), "{r}");
        let x = r * Vector3::x();
        assert!((x - Vector3::y()).norm() < 1e-12);
    }

    #[test]
    fn quarter_turns_about_x_and_y() {
        let rx = rotation_matrix_from_rotvec(&Vector3::new(FRAC_PI_2, 0.0, 0.0));
        assert!((rx * Vector3::y() - Vector3::z()).norm() < 1e-12);
        let ry = rotation_matrix_from_rotvec(&Vector3::new(0.0, FRAC_PI_2, 0.0));
        assert!((ry * Vector3::z() - Vector3::x()).norm() < 1e-12);
    }

    #[test]
    fn zero_and_tiny_vectors_are_identity() {
        assert_eq!(rotation_matrix_from_rotvec(&Vector3::zeros()), Matrix3::identity());
        let tiny = Vector3::new(1e-10, -2e-10, 0.0);
        assert_eq!(rotation_matrix_from_rotvec(&tiny), Matrix3::identity());
    }

    #[test]
    fn result_is_proper_orthogonal() {
        let r = rotation_matrix_from_rotvec(&Vector3::new(0.3, -1.2, 2.0));
        assert!(close(&(r.transpose() * r), &Matrix3::identity()));
        assert!((r.determinant() - 1.0).abs() < 1e-12);
        // The axis is fixed by its own rotation.
        let axis = Vector3::new(0.3, -1.2, 2.0);
        assert!((r * axis - axis).norm() < 1e-12);
    }

    #[test]
    fn batch_matches_single_and_checks_dim() {
        let batch = Vectors::from_rows(&[[0.0, 0.0, FRAC_PI_2], [0.0, 0.0, 0.0]]).unwrap();
        let ms = rotation_matrices_from_rotvecs(&batch).unwrap();
        assert_eq!(ms.len(), 2);
        assert_eq!(ms[1], Matrix3::identity());
        assert!(close(
            &ms[0],
            &rotation_matrix_from_rotvec(&Vector3::new(0.0, 0.0, FRAC_PI_2))
        ));
        let flat = Vectors::single(&[1.0, 0.0]);
        assert_eq!(
            rotation_matrices_from_rotvecs(&flat).unwrap_err(),
            GeomError::CrossDim { dim: 2 }
        );
    }
}
