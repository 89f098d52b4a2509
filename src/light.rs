//! Phong-style lighting.

use crate::math::{Color, Matrix4, Point3, Vector3};

/// Light direction, material scalars, and shading flags, constant for a
/// render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightingParams {
    /// Direction towards the light (unit vector).
    pub direction: Vector3,
    pub ambient: f32,
    pub diffuse: f32,
    /// Specular exponent; 0 disables the highlight entirely.
    pub shininess: f32,
    pub specular: f32,
    /// Dim the shaded color to 50% on back-facing surfaces.
    pub dark_backside: bool,
    /// Add four fixed low fill lights so mesh backsides never go fully
    /// unlit without a second real light source.
    pub side_lights: bool,
}

impl Default for LightingParams {
    fn default() -> Self {
        Self {
            direction: Vector3::new(0.0, 0.0, 1.0),
            ambient: 0.3,
            diffuse: 0.7,
            shininess: 10.0,
            specular: 0.3,
            dark_backside: false,
            side_lights: false,
        }
    }
}

/// Shade `color` at a surface point.
///
/// `model_view` takes `position` to view space; the view direction is
/// the normalized negated view-space position. The specular term is
/// forced to zero when the diffuse term is exactly zero or the
/// shininess is exactly zero — ambient-only configurations must not
/// show a highlight, and `0^0` must not light unlit faces. Alpha passes
/// through unchanged.
pub fn shade(
    color: Color,
    position: &Point3,
    normal: &Vector3,
    inside: bool,
    params: &LightingParams,
    model_view: &Matrix4,
) -> Color {
    let n = normal.normalize();
    let s = params.direction;
    let p = model_view * position.to_homogeneous();
    let v = -p.xyz().normalize();
    let r = n * (2.0 * s.dot(&n)) - s;

    let dimm = if params.dark_backside && inside { 0.5 } else { 1.0 };

    let mut s_dot_n = s.dot(&n).max(0.0);
    if params.side_lights {
        s_dot_n *= 0.8;
        let c = 0.3;
        let fills = [
            Vector3::new(1.0, 1.0, c).normalize(),
            Vector3::new(-1.0, 1.0, c).normalize(),
            Vector3::new(-1.0, -1.0, c).normalize(),
            Vector3::new(1.0, -1.0, c).normalize(),
        ];
        for fill in fills {
            s_dot_n += 0.4 * fill.dot(&n).max(0.0);
        }
    }

    let diffuse = params.diffuse * s_dot_n;

    let mut spec = r.dot(&v).max(0.0).powf(params.shininess);
    if diffuse == 0.0 || params.shininess == 0.0 {
        spec = 0.0;
    }

    let rgb = (color.xyz() * (params.ambient + diffuse)
        + Vector3::new(1.0, 1.0, 1.0) * (spec * params.specular))
        * dimm;
    Color::new(rgb.x, rgb.y, rgb.z, color.w)
}
