//! Linear algebra type aliases, tolerances, and numeric predicates.
//!
//! All evaluation runs in single precision, matching the GPU-style
//! per-vertex/per-fragment hot path this crate models.

pub type Point3 = nalgebra::Point3<f32>;
pub type Vector2 = nalgebra::Vector2<f32>;
pub type Vector3 = nalgebra::Vector3<f32>;
pub type Vector4 = nalgebra::Vector4<f32>;
pub type Matrix4 = nalgebra::Matrix4<f32>;
pub type UnitQuaternion = nalgebra::UnitQuaternion<f32>;

/// An rgba color with components in [0, 1].
pub type Color = Vector4;

/// Tolerance for unit-length checks on reconstructed normals.
pub const NORMAL_TOL: f32 = 1e-4;

/// Tolerance for partition-of-unity and corner-reproduction checks.
pub const BASIS_TOL: f32 = 1e-5;

/// NaN predicate: true iff `val` is neither `<= 0` nor `>= 0`.
///
/// Offered for callers that need to branch around corrupted field data;
/// no evaluation routine in this crate calls it internally.
pub fn is_nan(val: f32) -> bool {
    !(val <= 0.0 || 0.0 <= val)
}

/// NaN predicate for a vector: checks the component sum.
pub fn is_nan3(v: &Vector3) -> bool {
    is_nan(v.x + v.y + v.z)
}
