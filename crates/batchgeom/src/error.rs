//! Error type shared by the hard-fail operations.
//!
//! Policy
//! - Only contract violations surface here (bad rank, non-broadcastable batches,
//!   mismatched dimensions, empty samples).
//! - Numerical edge cases are not errors: they are eps-floored or propagate as
//!   NaN. `magnitude_nd` and `distance` return NaN output instead of an error even
//!   for malformed input, unlike `reject` and `angle`.

use std::fmt;

/// Errors surfaced by shape resolution and the statistics pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// Input rank outside {1, 2} where a single vector or a batch is required.
    Dimension { rank: usize },
    /// Two batch arguments with different sizes, neither of which is 1.
    ShapeMismatch { left: usize, right: usize },
    /// Vector dimensions of two arguments differ.
    DimMismatch { left: usize, right: usize },
    /// Cross products are only defined for 3-D vectors here.
    CrossDim { dim: usize },
    /// Raw array data length does not match the product of its shape.
    DataLength { expected: usize, actual: usize },
    /// Statistics requested on a sample with no rows.
    EmptyPointSet,
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::Dimension { rank } => {
                write!(f, "input must be 1D or 2D (got rank {rank})")
            }
            GeomError::ShapeMismatch { left, right } => write!(
                f,
                "batch sizes {left} and {right} are not broadcastable (need equal sizes or a size of 1)"
            ),
            GeomError::DimMismatch { left, right } => {
                write!(f, "vector dimensions differ: {left} vs {right}")
            }
            GeomError::CrossDim { dim } => {
                write!(f, "cross product needs 3D vectors (got dimension {dim})")
            }
            GeomError::DataLength { expected, actual } => write!(
                f,
                "array data has {actual} elements but its shape implies {expected}"
            ),
            GeomError::EmptyPointSet => write!(f, "point set has no rows"),
        }
    }
}

impl std::error::Error for GeomError {}

#[cfg(test)]
mod tests {
    use super::GeomError;

    #[test]
    fn display_mentions_sizes() {
        let err = GeomError::ShapeMismatch { left: 3, right: 4 };
        let msg = err.to_string();
        assert!(msg.contains('3') && msg.contains('4'));
        assert!(GeomError::Dimension { rank: 3 }
            .to_string()
            .contains("rank 3"));
    }
}
