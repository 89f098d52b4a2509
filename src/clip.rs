//! Clipping-plane classification.

use crate::math::{Point3, Vector4};

/// A clipping half-space `(nx, ny, nz, d)` with an enable flag.
///
/// The original pipeline could compile clipping out entirely; that
/// configuration is [`ClipPlane::DISABLED`] here, an explicit flag
/// instead of a build-time switch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPlane {
    pub plane: Vector4,
    pub enabled: bool,
}

impl ClipPlane {
    /// Clipping switched off; classifies nothing as clipped.
    pub const DISABLED: ClipPlane = ClipPlane {
        plane: Vector4::new(0.0, 0.0, 1.0, 0.0),
        enabled: false,
    };

    pub fn new(plane: Vector4) -> Self {
        Self {
            plane,
            enabled: true,
        }
    }

    /// True iff clipping is enabled and `pos` lies strictly behind the
    /// plane (negative homogeneous dot product).
    pub fn is_clipped(&self, pos: &Point3) -> bool {
        self.enabled && self.plane.dot(&pos.to_homogeneous()) < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behind_plane_is_clipped() {
        let clip = ClipPlane::new(Vector4::new(0.0, 0.0, 1.0, 0.0));
        assert!(clip.is_clipped(&Point3::new(0.0, 0.0, -1.0)));
        assert!(!clip.is_clipped(&Point3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn on_plane_is_kept() {
        // Strictly negative only; points on the plane survive.
        let clip = ClipPlane::new(Vector4::new(0.0, 0.0, 1.0, 0.0));
        assert!(!clip.is_clipped(&Point3::new(3.0, -2.0, 0.0)));
    }

    #[test]
    fn offset_shifts_the_boundary() {
        let clip = ClipPlane::new(Vector4::new(0.0, 0.0, 1.0, 2.0));
        assert!(!clip.is_clipped(&Point3::new(0.0, 0.0, -1.0)));
        assert!(clip.is_clipped(&Point3::new(0.0, 0.0, -3.0)));
    }

    #[test]
    fn disabled_keeps_everything() {
        let mut clip = ClipPlane::new(Vector4::new(0.0, 0.0, 1.0, 0.0));
        clip.enabled = false;
        assert!(!clip.is_clipped(&Point3::new(0.0, 0.0, -1.0)));
        assert!(!ClipPlane::DISABLED.is_clipped(&Point3::new(0.0, 0.0, -1e6)));
    }
}
