//! Scalar extraction from raw field samples.
//!
//! A field sample is always carried as 3 components; the display mode
//! selects how it collapses to the single scalar fed to the colormap.

use crate::math::{Vector2, Vector3};

/// How a raw 3-component field sample is displayed.
///
/// Discriminants match the mode numbers the rendering front end uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum DisplayMode {
    /// First field component.
    Component0 = 0,
    /// Second field component.
    Component1 = 1,
    /// Third field component.
    Component2 = 2,
    /// Euclidean norm of the sample.
    Norm = 3,
    /// All three components used directly as rgb; no scalar extraction.
    ColorRgb = 4,
    /// Real part of the complex-scaled (x, y) pair.
    Real = 5,
    /// Imaginary part of the complex-scaled (x, y) pair.
    Imag = 6,
    /// Element type/index encoding; the caller supplies the color.
    GeometryInfo = 7,
    /// Position encoded as rgb for picking/debugging.
    Coordinates = 8,
}

/// Per-pass scalar extraction configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSelect {
    pub mode: DisplayMode,
    /// Complex scale-and-rotate factor applied in the `Real`/`Imag`
    /// modes (e.g. `e^{iωt}` for animating a time-harmonic field).
    pub complex_scale: Vector2,
}

impl FieldSelect {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            complex_scale: Vector2::new(1.0, 0.0),
        }
    }

    /// Collapse a field sample to the display scalar.
    ///
    /// Modes that do not extract a scalar (`ColorRgb`, `GeometryInfo`,
    /// `Coordinates`) return 0.0; they are resolved by the shading stage
    /// instead. This is the documented default, not a failure.
    pub fn scalar(&self, value: Vector3) -> f32 {
        let s = self.complex_scale;
        match self.mode {
            DisplayMode::Component0 => value.x,
            DisplayMode::Component1 => value.y,
            DisplayMode::Component2 => value.z,
            DisplayMode::Norm => value.norm(),
            DisplayMode::Real => value.x * s.x - value.y * s.y,
            DisplayMode::Imag => value.x * s.y + value.y * s.x,
            _ => 0.0,
        }
    }
}
