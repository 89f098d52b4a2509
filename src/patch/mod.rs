//! Curved triangular patch evaluation.
//!
//! A patch carries its control data by value and evaluates position,
//! scalar/vector field, and surface normal at any barycentric parameter
//! `(u, v)` (with `w = 1 - u - v`). The polynomial order is a type —
//! [`LinearPatch`], [`QuadraticPatch`], [`CubicPatch`] — so batch code
//! generic over [`CurvedPatch`] monomorphizes and the hot path never
//! branches on order.
//!
//! Parameters outside the unit triangle are not rejected; they produce
//! extrapolated results. Zero-area patches produce a non-finite normal
//! (the cross product of parallel tangents); neither case is detected
//! here — upstream mesh generation must not emit degenerate patches.

pub mod basis;

use crate::math::{Point3, Vector2, Vector3, Vector4};

/// Geometric deformation applied to the tangents used for normal
/// reconstruction.
///
/// Deformation never alters the evaluated position or field value; it
/// only perturbs the partial derivatives before the cross product, so the
/// normal follows the displaced surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Deformation {
    /// Undeformed geometry.
    #[default]
    None,
    /// Planar mesh whose scalar channel displaces z: each tangent `t`
    /// receives `t.z += scale * t.w`.
    ScalarZ { scale: f32 },
    /// Displacement field: each tangent receives `t.x += scale * t.w`
    /// plus, when a vector control set is present, `t.y`/`t.z` receive
    /// `scale` times the derivative blend of the vector set.
    VectorXyz { scale: f32 },
}

/// The three-operation evaluation contract shared by all orders.
///
/// Every method is a pure function of the patch data and `(u, v)`;
/// evaluation is deterministic and safe to invoke concurrently.
pub trait CurvedPatch {
    /// Interpolated position (xyz) and scalar field value (w), blended
    /// together from the 4-component control points.
    fn position_and_scalar(&self, u: f32, v: f32) -> Vector4;

    /// Secondary 2-component field blended from the vector control set,
    /// or `None` when the patch carries no vector data.
    fn vector_value(&self, u: f32, v: f32) -> Option<Vector2>;

    /// Unit surface normal. Always re-normalized after interpolation;
    /// non-finite for zero-area patches.
    fn normal(&self, u: f32, v: f32, deformation: &Deformation) -> Vector3;

    /// Interpolated position as a point.
    fn position(&self, u: f32, v: f32) -> Point3 {
        let p = self.position_and_scalar(u, v);
        Point3::new(p.x, p.y, p.z)
    }

    /// Interpolated scalar channel.
    fn scalar(&self, u: f32, v: f32) -> f32 {
        self.position_and_scalar(u, v).w
    }
}

/// Flat or vertex-normal-interpolated triangle (order 1, 3 control points).
#[derive(Clone, Debug)]
pub struct LinearPatch {
    /// Corner control points (xyz position, w scalar).
    pub points: [Vector4; 3],
    /// Optional secondary field sampled at the corners.
    pub vectors: Option<[Vector2; 3]>,
    /// Optional unit corner normals; when absent the flat face normal
    /// is derived from the corner positions.
    pub normals: Option<[Vector3; 3]>,
}

/// Quadratic patch (6 control points: corners and edge midpoints).
#[derive(Clone, Debug)]
pub struct QuadraticPatch {
    pub points: [Vector4; 6],
    pub vectors: Option<[Vector2; 6]>,
}

/// Cubic patch (10 control points on the cubic lattice).
#[derive(Clone, Debug)]
pub struct CubicPatch {
    pub points: [Vector4; 10],
    pub vectors: Option<[Vector2; 10]>,
}

impl CurvedPatch for LinearPatch {
    fn position_and_scalar(&self, u: f32, v: f32) -> Vector4 {
        let b = basis::linear(u, v);
        self.points[0] * b[0] + self.points[1] * b[1] + self.points[2] * b[2]
    }

    fn vector_value(&self, u: f32, v: f32) -> Option<Vector2> {
        let vecs = self.vectors.as_ref()?;
        let b = basis::linear(u, v);
        Some(vecs[0] * b[0] + vecs[1] * b[1] + vecs[2] * b[2])
    }

    fn normal(&self, u: f32, v: f32, _deformation: &Deformation) -> Vector3 {
        match &self.normals {
            Some(n) => {
                // Blending unit normals is not unit-length in general.
                let b = basis::linear(u, v);
                (n[0] * b[0] + n[1] * b[1] + n[2] * b[2]).normalize()
            }
            None => {
                let du = self.points[1] - self.points[0];
                let dv = self.points[2] - self.points[0];
                du.xyz().cross(&dv.xyz()).normalize()
            }
        }
    }
}

impl CurvedPatch for QuadraticPatch {
    fn position_and_scalar(&self, u: f32, v: f32) -> Vector4 {
        blend(&self.points, &basis::quadratic(u, v))
    }

    fn vector_value(&self, u: f32, v: f32) -> Option<Vector2> {
        let vecs = self.vectors.as_ref()?;
        Some(blend(vecs, &basis::quadratic(u, v)))
    }

    fn normal(&self, u: f32, v: f32, deformation: &Deformation) -> Vector3 {
        let weights = basis::quadratic_deriv(u, v);
        let (du, dv) = tangents(
            &self.points,
            self.vectors.as_ref().map(|vs| &vs[..]),
            &weights,
            &basis::QUADRATIC_DU,
            &basis::QUADRATIC_DV,
            deformation,
        );
        du.xyz().cross(&dv.xyz()).normalize()
    }
}

impl CurvedPatch for CubicPatch {
    fn position_and_scalar(&self, u: f32, v: f32) -> Vector4 {
        blend(&self.points, &basis::cubic(u, v))
    }

    fn vector_value(&self, u: f32, v: f32) -> Option<Vector2> {
        let vecs = self.vectors.as_ref()?;
        Some(blend(vecs, &basis::cubic(u, v)))
    }

    fn normal(&self, u: f32, v: f32, deformation: &Deformation) -> Vector3 {
        let weights = basis::cubic_deriv(u, v);
        let (du, dv) = tangents(
            &self.points,
            self.vectors.as_ref().map(|vs| &vs[..]),
            &weights,
            &basis::CUBIC_DU,
            &basis::CUBIC_DV,
            deformation,
        );
        du.xyz().cross(&dv.xyz()).normalize()
    }
}

/// Weighted sum of control values against a basis of matching length.
fn blend<T, const N: usize>(values: &[T; N], weights: &[f32; N]) -> T
where
    T: Copy + std::ops::Mul<f32, Output = T> + std::ops::Add<Output = T>,
{
    let mut acc = values[0] * weights[0];
    for k in 1..N {
        acc = acc + values[k] * weights[k];
    }
    acc
}

/// Analytic tangents `(∂P/∂u, ∂P/∂v)` of a degree-2/3 blend, as
/// lower-order weights applied to control-point differences, with the
/// deformation perturbation applied before the caller's cross product.
fn tangents<const N: usize>(
    points: &[Vector4],
    vectors: Option<&[Vector2]>,
    weights: &[f32; N],
    du_pairs: &[(usize, usize); N],
    dv_pairs: &[(usize, usize); N],
    deformation: &Deformation,
) -> (Vector4, Vector4) {
    let mut du = Vector4::zeros();
    let mut dv = Vector4::zeros();
    for k in 0..N {
        let (a, b) = du_pairs[k];
        du += (points[a] - points[b]) * weights[k];
        let (a, b) = dv_pairs[k];
        dv += (points[a] - points[b]) * weights[k];
    }

    match *deformation {
        Deformation::None => {}
        Deformation::ScalarZ { scale } => {
            du.z += scale * du.w;
            dv.z += scale * dv.w;
        }
        Deformation::VectorXyz { scale } => {
            du.x += scale * du.w;
            dv.x += scale * dv.w;
            if let Some(vecs) = vectors {
                let mut vdu = Vector2::zeros();
                let mut vdv = Vector2::zeros();
                for k in 0..N {
                    let (a, b) = du_pairs[k];
                    vdu += (vecs[a] - vecs[b]) * weights[k];
                    let (a, b) = dv_pairs[k];
                    vdv += (vecs[a] - vecs[b]) * weights[k];
                }
                du.y += scale * vdu.x;
                du.z += scale * vdu.y;
                dv.y += scale * vdv.x;
                dv.z += scale * vdv.y;
            }
        }
    }

    (du, dv)
}
