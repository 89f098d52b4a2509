//! Shortest-arc alignment quaternions for glyph orientation.
//!
//! Glyph geometry (arrows, cones) is modeled pointing along +y; these
//! helpers rotate it onto an arbitrary field direction.

use crate::math::{UnitQuaternion, Vector3};
use nalgebra::Quaternion;

const EPS: f32 = 1e-6;

/// Shortest-arc rotation taking the +y axis onto `target`.
///
/// `target` need not be unit length. When it is numerically
/// antiparallel to +y the rotation axis is ambiguous; an arbitrary axis
/// perpendicular to +y is chosen so the result is a well-defined
/// half-turn rather than a zero quaternion.
pub fn align_y(target: Vector3) -> UnitQuaternion {
    let from = Vector3::new(0.0, 1.0, 0.0);
    let mut r = target.norm() + from.dot(&target);

    let axis = if r < EPS {
        r = 0.0;
        if from.x.abs() > from.z.abs() {
            Vector3::new(-from.y, from.x, 0.0)
        } else {
            Vector3::new(0.0, -from.z, from.y)
        }
    } else {
        from.cross(&target)
    };

    UnitQuaternion::new_normalize(Quaternion::from_parts(r, axis))
}

/// Rotate `v` by `q` using the optimized two-cross-product form
/// `v + w·t + q_xyz × t` with `t = 2·(q_xyz × v)`.
pub fn rotate(v: Vector3, q: &UnitQuaternion) -> Vector3 {
    let im = q.imag();
    let t = im.cross(&v) * 2.0;
    v + t * q.w + im.cross(&t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn aligning_y_to_itself_is_identity() {
        let q = align_y(Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(q.w, 1.0, epsilon = 1e-6);
        assert_relative_eq!(q.imag().norm(), 0.0, epsilon = 1e-6);

        let v = Vector3::new(0.3, -1.2, 2.5);
        let r = rotate(v, &q);
        assert_relative_eq!((r - v).norm(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn rotated_y_points_along_target() {
        for target in [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0, 2.0, -3.0),
            Vector3::new(0.0, 5.0, 0.1),
        ] {
            let q = align_y(target);
            let r = rotate(Vector3::new(0.0, 1.0, 0.0), &q);
            let dot = r.dot(&target.normalize());
            assert!(
                (dot - 1.0).abs() < 1e-5,
                "rotated y should align with {target:?}: dot={dot}"
            );
        }
    }

    #[test]
    fn antiparallel_target_gives_half_turn() {
        // r = |t| + y·t vanishes; the perpendicular fallback must still
        // produce a rotation taking +y to -y.
        let q = align_y(Vector3::new(0.0, -1.0, 0.0));
        let r = rotate(Vector3::new(0.0, 1.0, 0.0), &q);
        assert_relative_eq!(r.y, -1.0, epsilon = 1e-5);
        assert_relative_eq!(q.w, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn rotation_preserves_length() {
        let q = align_y(Vector3::new(2.0, -1.0, 0.5));
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_relative_eq!(rotate(v, &q).norm(), 5.0, epsilon = 1e-4);
    }

    #[test]
    fn rotate_matches_nalgebra_transform() {
        let q = align_y(Vector3::new(1.0, 1.0, 1.0));
        let v = Vector3::new(0.2, 0.7, -0.4);
        let ours = rotate(v, &q);
        let theirs = q.transform_vector(&v);
        assert_relative_eq!((ours - theirs).norm(), 0.0, epsilon = 1e-5);
    }
}
