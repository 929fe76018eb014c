//! Leaf primitives: magnitude, normalization, pairwise distance.
//!
//! Error policy
//! - `normalize_nd` rejects ranks outside {1, 2} with `GeomError::Dimension`.
//! - `magnitude_nd` returns a single NaN for those ranks instead.
//! - `distance` returns a NaN batch for non-broadcastable inputs instead of an
//!   error, unlike `angle::reject` and the angle family.

use nalgebra::{DMatrix, DVector};

use crate::cfg::NORMALIZE_EPS;
use crate::error::GeomError;
use crate::shape::{ArrayNd, Broadcast, Scalars, Vectors};

/// Euclidean norm along the last axis.
pub fn magnitude(v: &Vectors) -> Scalars {
    match v {
        Vectors::Single(x) => Scalars::Single(x.norm()),
        Vectors::Batch(m) => Scalars::Batch(row_norms(m)),
    }
}

/// `magnitude` for raw arrays; ranks other than 1 and 2 yield a single NaN.
pub fn magnitude_nd(a: &ArrayNd) -> Scalars {
    match a.to_vectors() {
        Ok(v) => magnitude(&v),
        Err(_) => Scalars::Single(f64::NAN),
    }
}

/// Divide each vector by `max(‖v‖, eps)`.
pub fn normalize(v: &Vectors, eps: f64) -> Vectors {
    match v {
        Vectors::Single(x) => Vectors::Single(x / x.norm().max(eps)),
        Vectors::Batch(m) => {
            let mut out = m.clone();
            for mut row in out.row_iter_mut() {
                let n = row.norm().max(eps);
                row /= n;
            }
            Vectors::Batch(out)
        }
    }
}

/// `normalize` with the default floor `NORMALIZE_EPS`.
#[inline]
pub fn normalize_default(v: &Vectors) -> Vectors {
    normalize(v, NORMALIZE_EPS)
}

/// `normalize` for raw arrays; ranks other than 1 and 2 are an error.
pub fn normalize_nd(a: &ArrayNd, eps: f64) -> Result<Vectors, GeomError> {
    Ok(normalize(&a.to_vectors()?, eps))
}

/// Row-wise Euclidean distance between two point sets.
///
/// Broadcasts a size-1 side against the other. Non-broadcastable batch sizes
/// (or differing dimensions) give a NaN batch sized to the larger input.
pub fn distance(a: &Vectors, b: &Vectors) -> Scalars {
    let plan = match Broadcast::new(&[a, b]) {
        Ok(plan) => plan,
        Err(_) => {
            let n = a.len().max(b.len());
            return Scalars::Batch(DVector::from_element(n, f64::NAN));
        }
    };
    let diff = plan.expand(a) - plan.expand(b);
    Scalars::from_lifted(row_norms(&diff), plan.collapse)
}

pub(crate) fn row_norms(m: &DMatrix<f64>) -> DVector<f64> {
    DVector::from_iterator(m.nrows(), m.row_iter().map(|r| r.norm()))
}

pub(crate) fn row_dots(a: &DMatrix<f64>, b: &DMatrix<f64>) -> DVector<f64> {
    DVector::from_iterator(
        a.nrows(),
        a.row_iter().zip(b.row_iter()).map(|(x, y)| x.dot(&y)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn batch(rows: &[&[f64]]) -> Vectors {
        Vectors::from_rows(rows).unwrap()
    }

    #[test]
    fn magnitude_single_and_batch() {
        assert_eq!(magnitude(&Vectors::single(&[3.0, 4.0])), Scalars::Single(5.0));
        let m = magnitude(&batch(&[&[3.0, 4.0], &[6.0, 8.0]]));
        assert_eq!(m.to_vec(), vec![5.0, 10.0]);
    }

    #[test]
    fn magnitude_nd_high_rank_is_nan() {
        let a = ArrayNd::new(vec![2, 2, 2], (1..=8).map(f64::from).collect()).unwrap();
        let m = magnitude_nd(&a);
        assert!(m.as_single().is_some_and(f64::is_nan));
    }

    #[test]
    fn normalize_nd_high_rank_is_error() {
        let a = ArrayNd::new(vec![2, 2, 2], vec![1.0; 8]).unwrap();
        assert_eq!(
            normalize_nd(&a, NORMALIZE_EPS),
            Err(GeomError::Dimension { rank: 3 })
        );
    }

    #[test]
    fn normalize_zero_vector_stays_finite() {
        let z = normalize_default(&Vectors::single(&[0.0, 0.0, 0.0]));
        match z {
            Vectors::Single(v) => assert!(v.iter().all(|x| *x == 0.0)),
            Vectors::Batch(_) => panic!("expected single"),
        }
    }

    #[test]
    fn normalize_batch_rows_are_unit() {
        let n = normalize_default(&batch(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]));
        for x in magnitude(&n).to_vec() {
            assert!((x - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn distance_single_points() {
        let d = distance(&batch(&[&[1.0, 0.0]]), &batch(&[&[0.0, 1.0]]));
        assert_eq!(d.len(), 1);
        assert!(d.as_batch().is_some());
        assert!((d.to_vec()[0] - 2f64.sqrt()).abs() < 1e-12);
        let s = distance(&Vectors::single(&[1.0, 0.0]), &Vectors::single(&[0.0, 1.0]));
        assert!((s.as_single().unwrap() - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn distance_one_to_many_either_side() {
        let one = batch(&[&[1.0, 2.0]]);
        let many = batch(&[&[3.0, 4.0], &[5.0, 6.0]]);
        let expected = [8f64.sqrt(), 32f64.sqrt()];
        for d in [distance(&one, &many), distance(&many, &one)] {
            let d = d.to_vec();
            assert!((d[0] - expected[0]).abs() < 1e-12);
            assert!((d[1] - expected[1]).abs() < 1e-12);
        }
    }

    #[test]
    fn distance_incompatible_is_nan_batch() {
        let a = batch(&[&[0.0, 0.0], &[1.0, 1.0]]);
        let b = batch(&[&[0.0, 0.0], &[1.0, 1.0], &[2.0, 2.0]]);
        let d = distance(&a, &b);
        assert_eq!(d.len(), 3);
        assert!(d.to_vec().iter().all(|x| x.is_nan()));
    }

    proptest! {
        #[test]
        fn normalized_vectors_have_unit_magnitude(
            xs in prop::collection::vec(-100.0f64..100.0, 3)
        ) {
            prop_assume!(xs.iter().map(|x| x * x).sum::<f64>() > 1e-6);
            let n = normalize_default(&Vectors::single(&xs));
            let m = magnitude(&n).as_single().unwrap();
            prop_assert!((m - 1.0).abs() < 1e-9);
        }

        #[test]
        fn distance_is_symmetric(
            a in prop::collection::vec(-10.0f64..10.0, 6),
            b in prop::collection::vec(-10.0f64..10.0, 6),
        ) {
            let va = Vectors::Batch(DMatrix::from_row_slice(2, 3, &a));
            let vb = Vectors::Batch(DMatrix::from_row_slice(2, 3, &b));
            prop_assert_eq!(distance(&va, &vb), distance(&vb, &va));
        }
    }
}
