//! Batched vector geometry and robust point-set statistics.
//!
//! Every geometric operation accepts a single vector or a batch of row vectors
//! (`shape::Vectors`) and returns the matching form. Batches broadcast under
//! one explicit rule (equal sizes or a size of 1); see `shape`.
//!
//! Modules
//! - `vector`: magnitude, normalization, pairwise distance.
//! - `angle`: rejection, unsigned/signed angles, minimal line angle.
//! - `stats`: classical and robust covariance, eigendecomposition/PCA.
//! - `rotation`, `circular`: rotation vectors, circular means.
//! - `sample`: seeded synthetic clouds for tests and benches.
//!
//! API Policy
//! - Project-internal; breaking changes are fine when they improve the design.
//!   `api` is the curated import surface.

pub mod angle;
pub mod api;
mod cfg;
pub mod circular;
pub mod error;
pub mod rotation;
pub mod sample;
pub mod shape;
pub mod stats;
pub mod vector;

pub use cfg::NORMALIZE_EPS;
pub use error::GeomError;
pub use shape::{ArrayNd, Scalars, Vectors};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{angle, minimal_line_signed_angle, reject, signed_angle, AngleCfg};
    pub use crate::error::GeomError;
    pub use crate::shape::{resolve_batch, Scalars, Vectors};
    pub use crate::stats::{eigendecompose, robust_covariance, EigenCfg, RobustCfg};
    pub use crate::vector::{distance, magnitude, normalize_default};
    pub use nalgebra::{DMatrix, DVector};
}
