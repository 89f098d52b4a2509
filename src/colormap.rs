//! Scalar-to-color lookup through a 2D colormap atlas.
//!
//! [`Colormap`] maps a scalar to a normalized atlas coordinate; the
//! actual color fetch goes through the [`ColormapTexture`] seam so the
//! filtering policy stays with the texture owner. [`ColormapImage`] is a
//! CPU-side nearest-filtered implementation matching the data textures
//! the original viewer uploads.

use crate::math::{Color, Vector2, Vector3};

/// Value range and atlas dimensions for colormap lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Colormap {
    pub cols: u32,
    pub rows: u32,
    pub min: f32,
    pub max: f32,
}

impl Colormap {
    /// Single-row gradient atlas over `[min, max]`.
    pub fn gradient(min: f32, max: f32) -> Self {
        Self::new(1, 1, min, max)
    }

    /// Warns (but still constructs) on degenerate sizes/ranges, which
    /// make [`Colormap::coord`] produce non-finite coordinates.
    pub fn new(cols: u32, rows: u32, min: f32, max: f32) -> Self {
        if rows <= 1 && cols <= 1 && min == max {
            log::warn!("degenerate colormap range [{min}, {max}]");
        }
        Self {
            cols,
            rows,
            min,
            max,
        }
    }

    /// Map a scalar to a normalized atlas coordinate in [0,1]×[0,1].
    ///
    /// Two distinct contracts share this function:
    /// - **Multi-cell atlas** (`rows > 1`, or `cols > 1`): `value` is a
    ///   pre-binned cell index. Multi-row atlases split it into
    ///   `col = value mod cols`, `row = value div cols`; single-row
    ///   strips use it directly. The `(min, max)` range is ignored.
    /// - **Single-cell atlas**: `value` is a raw measurement, mapped
    ///   affinely through `(min, max)`.
    ///
    /// Callers pick the contract by the atlas size they supply.
    pub fn coord(&self, value: f32) -> Vector2 {
        let cols = self.cols as f32;
        let rows = self.rows as f32;
        let mut x;
        let mut y = 0.5;
        if rows > 1.0 {
            x = value.rem_euclid(cols);
            y = ((value - x) / cols) / (rows - 1.0);
            x /= cols - 1.0;
        } else if cols > 1.0 {
            x = value / (cols - 1.0);
        } else {
            x = (value - self.min) / (self.max - self.min);
        }
        Vector2::new(x, y)
    }
}

/// Texture seam: resolves a normalized atlas coordinate to a color.
///
/// Filtering and wrapping are the implementor's policy.
pub trait ColormapTexture {
    fn fetch(&self, coord: Vector2) -> Color;
}

/// CPU rgba atlas with nearest-neighbor sampling.
#[derive(Clone, Debug)]
pub struct ColormapImage {
    width: u32,
    height: u32,
    texels: Vec<Color>,
}

impl ColormapImage {
    /// `texels` in row-major order, `width * height` entries.
    pub fn new(width: u32, height: u32, texels: Vec<Color>) -> Self {
        assert_eq!(
            texels.len(),
            (width * height) as usize,
            "texel count must match atlas dimensions"
        );
        Self {
            width,
            height,
            texels,
        }
    }

    /// The blue→cyan→green→yellow→red gradient strip the viewer uses as
    /// its default 1×n colormap.
    pub fn gradient(n_colors: u32) -> Self {
        let stops = [
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 1.0, 1.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
        ];
        let texels = (0..n_colors)
            .map(|i| {
                let x = i as f32 / (n_colors - 1) as f32;
                // 4 segments of width 0.25 between the 5 stops.
                let seg = ((x * 4.0) as usize).min(3);
                let t = x * 4.0 - seg as f32;
                let c = stops[seg] * (1.0 - t) + stops[seg + 1] * t;
                Color::new(c.x, c.y, c.z, 1.0)
            })
            .collect();
        Self::new(n_colors, 1, texels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl ColormapTexture for ColormapImage {
    fn fetch(&self, coord: Vector2) -> Color {
        let tx = (coord.x * self.width as f32 - 0.5).round();
        let ty = (coord.y * self.height as f32 - 0.5).round();
        let ix = (tx.max(0.0) as u32).min(self.width - 1);
        let iy = (ty.max(0.0) as u32).min(self.height - 1);
        self.texels[(iy * self.width + ix) as usize]
    }
}
