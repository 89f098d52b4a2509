//! Triangular Bernstein basis evaluation for curved patches.
//!
//! The basis functions blend control points laid out on a triangular
//! lattice; the two lattice subscripts of a control point are the
//! exponents of the barycentric parameters `u` and `v` (with the implied
//! third weight `w = 1 - u - v` taking the remaining degree).
//!
//! Lattice orderings used throughout the crate:
//! - order 1: `p0, p1, p2` (triangle corners)
//! - order 2: `p00, p01, p02, p10, p11, p20`
//! - order 3: `p00, p01, p02, p03, p10, p11, p12, p20, p21, p30`
//!
//! Partial derivatives with respect to `u` and `v` are expressed as a
//! one-order-lower basis applied to differences of lattice neighbors,
//! which is what the `*_deriv` weight functions and the `*_DU`/`*_DV`
//! index-pair tables encode. Tangents come out analytically; nothing here
//! ever finite-differences.

/// Linear basis: weights `(u, v, w)`.
pub fn linear(u: f32, v: f32) -> [f32; 3] {
    let w = 1.0 - u - v;
    [u, v, w]
}

/// Quadratic basis over the 6-point lattice.
///
/// Returns `(u², 2uv, v², 2uw, 2vw, w²)` in lattice order.
pub fn quadratic(u: f32, v: f32) -> [f32; 6] {
    let w = 1.0 - u - v;
    [
        u * u,
        2.0 * u * v,
        v * v,
        2.0 * u * w,
        2.0 * v * w,
        w * w,
    ]
}

/// Cubic basis over the 10-point lattice.
///
/// Coefficients 1,3,3,1,3,6,3,3,3,1 in lattice order.
pub fn cubic(u: f32, v: f32) -> [f32; 10] {
    let w = 1.0 - u - v;
    [
        u * u * u,
        3.0 * u * u * v,
        3.0 * u * v * v,
        v * v * v,
        3.0 * u * u * w,
        6.0 * u * v * w,
        3.0 * v * v * w,
        3.0 * u * w * w,
        3.0 * v * w * w,
        w * w * w,
    ]
}

/// Derivative weights for the quadratic basis: `(2u, 2v, 2w)`.
///
/// Applied to the control-point differences named by [`QUADRATIC_DU`] /
/// [`QUADRATIC_DV`], these give the exact partial derivative of the
/// quadratic blend.
pub fn quadratic_deriv(u: f32, v: f32) -> [f32; 3] {
    let w = 1.0 - u - v;
    [2.0 * u, 2.0 * v, 2.0 * w]
}

/// Derivative weights for the cubic basis:
/// `(3u², 6uv, 3v², 6uw, 6vw, 3w²)`.
pub fn cubic_deriv(u: f32, v: f32) -> [f32; 6] {
    let w = 1.0 - u - v;
    [
        3.0 * u * u,
        6.0 * u * v,
        3.0 * v * v,
        6.0 * u * w,
        6.0 * v * w,
        3.0 * w * w,
    ]
}

/// Control-point index pairs `(a, b)` such that
/// `∂P/∂u = Σ quadratic_deriv[k] * (points[a_k] - points[b_k])`.
pub const QUADRATIC_DU: [(usize, usize); 3] = [(0, 3), (1, 4), (3, 5)];

/// Index pairs for the quadratic `∂P/∂v`.
pub const QUADRATIC_DV: [(usize, usize); 3] = [(1, 3), (2, 4), (4, 5)];

/// Index pairs for the cubic `∂P/∂u`.
pub const CUBIC_DU: [(usize, usize); 6] =
    [(0, 4), (1, 5), (2, 6), (4, 7), (5, 8), (7, 9)];

/// Index pairs for the cubic `∂P/∂v`.
pub const CUBIC_DV: [(usize, usize); 6] =
    [(1, 4), (2, 5), (3, 6), (5, 7), (6, 8), (8, 9)];

#[cfg(test)]
mod tests {
    use super::*;

    // Sample points spread over the unit triangle, including corners,
    // edge midpoints, and interior points.
    fn domain_samples() -> Vec<(f32, f32)> {
        vec![
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0),
            (0.5, 0.0),
            (0.0, 0.5),
            (0.5, 0.5),
            (1.0 / 3.0, 1.0 / 3.0),
            (0.25, 0.1),
            (0.1, 0.7),
        ]
    }

    #[test]
    fn linear_partition_of_unity() {
        for (u, v) in domain_samples() {
            let sum: f32 = linear(u, v).iter().sum();
            assert!(
                (sum - 1.0).abs() < 1e-5,
                "linear basis sum at ({u},{v}): {sum}"
            );
        }
    }

    #[test]
    fn quadratic_partition_of_unity() {
        for (u, v) in domain_samples() {
            let sum: f32 = quadratic(u, v).iter().sum();
            assert!(
                (sum - 1.0).abs() < 1e-5,
                "quadratic basis sum at ({u},{v}): {sum}"
            );
        }
    }

    #[test]
    fn cubic_partition_of_unity() {
        for (u, v) in domain_samples() {
            let sum: f32 = cubic(u, v).iter().sum();
            assert!(
                (sum - 1.0).abs() < 1e-5,
                "cubic basis sum at ({u},{v}): {sum}"
            );
        }
    }

    #[test]
    fn basis_non_negative_in_domain() {
        for (u, v) in domain_samples() {
            for b in quadratic(u, v) {
                assert!(b >= -1e-6, "negative quadratic weight at ({u},{v})");
            }
            for b in cubic(u, v) {
                assert!(b >= -1e-6, "negative cubic weight at ({u},{v})");
            }
        }
    }

    #[test]
    fn corner_weights_are_kronecker() {
        // At (1,0) only the pure-u lattice point carries weight 1;
        // likewise for the v and w corners.
        let corners = [(1.0, 0.0, 0usize), (0.0, 1.0, 2), (0.0, 0.0, 5)];
        for (u, v, idx) in corners {
            let b = quadratic(u, v);
            for (i, &bi) in b.iter().enumerate() {
                let expect = if i == idx { 1.0 } else { 0.0 };
                assert!(
                    (bi - expect).abs() < 1e-6,
                    "quadratic corner weight {i} at ({u},{v}): {bi}"
                );
            }
        }
        let corners = [(1.0, 0.0, 0usize), (0.0, 1.0, 3), (0.0, 0.0, 9)];
        for (u, v, idx) in corners {
            let b = cubic(u, v);
            for (i, &bi) in b.iter().enumerate() {
                let expect = if i == idx { 1.0 } else { 0.0 };
                assert!(
                    (bi - expect).abs() < 1e-6,
                    "cubic corner weight {i} at ({u},{v}): {bi}"
                );
            }
        }
    }

    #[test]
    fn quadratic_derivative_matches_finite_difference() {
        // Scalar field on the lattice; analytic tangent vs central difference.
        let f = [1.0f32, -2.0, 0.5, 3.0, 2.0, -1.0];
        let eval = |u: f32, v: f32| -> f32 {
            quadratic(u, v)
                .iter()
                .zip(f.iter())
                .map(|(b, c)| b * c)
                .sum()
        };
        let (u, v) = (0.3, 0.25);
        let h = 1e-3;

        let mut du = 0.0;
        let bd = quadratic_deriv(u, v);
        for (k, &(a, b)) in QUADRATIC_DU.iter().enumerate() {
            du += bd[k] * (f[a] - f[b]);
        }
        let fd = (eval(u + h, v) - eval(u - h, v)) / (2.0 * h);
        assert!((du - fd).abs() < 1e-2, "du={du} fd={fd}");

        let mut dv = 0.0;
        for (k, &(a, b)) in QUADRATIC_DV.iter().enumerate() {
            dv += bd[k] * (f[a] - f[b]);
        }
        let fd = (eval(u, v + h) - eval(u, v - h)) / (2.0 * h);
        assert!((dv - fd).abs() < 1e-2, "dv={dv} fd={fd}");
    }

    #[test]
    fn cubic_derivative_matches_finite_difference() {
        let f = [1.0f32, -2.0, 0.5, 3.0, 2.0, -1.0, 0.7, 1.5, -0.3, 2.2];
        let eval = |u: f32, v: f32| -> f32 {
            cubic(u, v).iter().zip(f.iter()).map(|(b, c)| b * c).sum()
        };
        let (u, v) = (0.2, 0.4);
        let h = 1e-3;

        let bd = cubic_deriv(u, v);
        let mut du = 0.0;
        for (k, &(a, b)) in CUBIC_DU.iter().enumerate() {
            du += bd[k] * (f[a] - f[b]);
        }
        let fd = (eval(u + h, v) - eval(u - h, v)) / (2.0 * h);
        assert!((du - fd).abs() < 1e-2, "du={du} fd={fd}");

        let mut dv = 0.0;
        for (k, &(a, b)) in CUBIC_DV.iter().enumerate() {
            dv += bd[k] * (f[a] - f[b]);
        }
        let fd = (eval(u, v + h) - eval(u, v - h)) / (2.0 * h);
        assert!((dv - fd).abs() < 1e-2, "dv={dv} fd={fd}");
    }

    #[test]
    fn derivative_of_constant_field_is_zero() {
        // Differences of equal control values cancel exactly.
        let f = [5.0f32; 10];
        let (u, v) = (0.3, 0.3);
        let bd = cubic_deriv(u, v);
        let mut du = 0.0;
        for (k, &(a, b)) in CUBIC_DU.iter().enumerate() {
            du += bd[k] * (f[a] - f[b]);
        }
        assert_eq!(du, 0.0);
    }
}
