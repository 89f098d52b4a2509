//! Per-fragment shading: scalar extraction → colormap lookup → lighting,
//! with clip discard.
//!
//! This is the composition the rendering pipeline runs once per visible
//! pixel. All configuration is read-only for a whole pass and threaded
//! through [`PassConfig`] explicitly; there is no ambient state, so
//! fragments can be shaded concurrently in any order.

use crate::clip::ClipPlane;
use crate::colormap::{Colormap, ColormapTexture};
use crate::field::{DisplayMode, FieldSelect};
use crate::light::{shade, LightingParams};
use crate::math::{Color, Matrix4, Point3, Vector3};

/// Read-only configuration for one draw pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PassConfig {
    pub model_view: Matrix4,
    pub field: FieldSelect,
    pub colormap: Colormap,
    pub clip: ClipPlane,
    pub lighting: LightingParams,
    /// `(scale, offset)` for the position-encoding mode; chosen so the
    /// scene's bounding box maps into [0, 1].
    pub trafo: (f32, f32),
}

impl PassConfig {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            model_view: Matrix4::identity(),
            field: FieldSelect::new(mode),
            colormap: Colormap::gradient(0.0, 1.0),
            clip: ClipPlane::DISABLED,
            lighting: LightingParams::default(),
            trafo: (1.0, 0.0),
        }
    }
}

/// Encode a world position as rgb: `pos * scale + offset`, alpha 1.
///
/// Read back by the picking pass to recover the position under the
/// cursor.
pub fn position_as_color(pos: &Point3, trafo: (f32, f32)) -> Color {
    let (scale, offset) = trafo;
    Color::new(
        pos.x * scale + offset,
        pos.y * scale + offset,
        pos.z * scale + offset,
        1.0,
    )
}

/// Shade one fragment, or `None` when it is clipped away.
///
/// `field` is the raw interpolated field sample at this fragment and
/// `inside` marks back-facing geometry. Modes resolve as:
/// - `ColorRgb`: the field sample is the base color, then lit;
/// - `Coordinates`: the encoded position is returned unlit (the picking
///   pass reads raw values back);
/// - `GeometryInfo`: not resolvable here — the caller computes the
///   encoded color and uses [`shade_with_color`];
/// - all scalar modes: extract → colormap coordinate → texture fetch →
///   lit.
pub fn shade_fragment<T: ColormapTexture>(
    cfg: &PassConfig,
    tex: &T,
    position: &Point3,
    normal: &Vector3,
    field: Vector3,
    inside: bool,
) -> Option<Color> {
    if cfg.clip.is_clipped(position) {
        return None;
    }

    let base = match cfg.field.mode {
        DisplayMode::Coordinates => {
            return Some(position_as_color(position, cfg.trafo));
        }
        DisplayMode::ColorRgb => Color::new(field.x, field.y, field.z, 1.0),
        _ => {
            let value = cfg.field.scalar(field);
            tex.fetch(cfg.colormap.coord(value))
        }
    };

    Some(shade(
        base,
        position,
        normal,
        inside,
        &cfg.lighting,
        &cfg.model_view,
    ))
}

/// Shade one fragment whose base color the caller already resolved
/// (geometry-info encoding, edge/wireframe colors).
pub fn shade_with_color(
    cfg: &PassConfig,
    color: Color,
    position: &Point3,
    normal: &Vector3,
    inside: bool,
) -> Option<Color> {
    if cfg.clip.is_clipped(position) {
        return None;
    }
    Some(shade(
        color,
        position,
        normal,
        inside,
        &cfg.lighting,
        &cfg.model_view,
    ))
}
