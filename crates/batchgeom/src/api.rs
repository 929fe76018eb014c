//! Curated internal API (UNSTABLE).
//!
//! Important
//! - Not a public API. A convenience surface for project-internal callers;
//!   breaking changes are allowed and expected.

// Shapes
pub use crate::shape::{resolve_batch, ArrayNd, Scalars, Vectors};
// Leaf primitives
pub use crate::vector::{
    distance, magnitude, magnitude_nd, normalize, normalize_default, normalize_nd,
};
// Angles
pub use crate::angle::{angle, minimal_line_signed_angle, reject, signed_angle, AngleCfg};
// Statistics
pub use crate::stats::{
    classical_covariance, eigendecompose, robust_covariance, robust_estimate, AxisLayout,
    EigenCfg, EigenPairs, RobustCfg, RobustEstimate,
};
// Supplements
pub use crate::circular::{mean_direction, resultant_length};
pub use crate::rotation::{rotation_matrices_from_rotvecs, rotation_matrix_from_rotvec};
pub use crate::sample::{gaussian_cloud, with_outliers, CloudCfg, CloudSeed, OutlierCfg};
// Errors
pub use crate::error::GeomError;
