//! Tolerance defaults (internal).
//!
//! Policy
//! - Defaults are fixed constants; only `normalize`'s floor is caller-tunable.
//!   Everything else is an internal stabilizer and never leaks into outputs.

/// Floor on the norm in `normalize` (public default for the `eps` argument).
pub const NORMALIZE_EPS: f64 = 1e-12;
/// Added to `f·f` in the rejection denominator.
pub(crate) const REJECT_EPS: f64 = 1e-10;
/// Added to `‖a‖‖b‖` in the cosine denominator.
pub(crate) const COSINE_EPS: f64 = 1e-10;
/// Diagonal regularizer used when inverting the running covariance.
pub(crate) const COV_REGULARIZER: f64 = 1e-6;
/// Rotation vectors shorter than this map to the identity.
pub(crate) const ROTVEC_EPS: f64 = 1e-8;
