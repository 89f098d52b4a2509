//! Batch sampling of a curved patch over a refined reference triangle.
//!
//! The renderer draws a curved element by evaluating the patch on a
//! uniform barycentric grid and uploading the resulting vertex buffers.
//! This module is that grid: vertices at `(a/n, b/n)` with `a + b <= n`,
//! two triangles per interior cell. Rows are evaluated in parallel with
//! rayon; the ordered collect keeps the output deterministic.

use rayon::prelude::*;

use crate::math::{Point3, Vector3};
use crate::patch::{CurvedPatch, Deformation};

/// Sampled vertex buffers for one patch.
#[derive(Clone, Debug)]
pub struct PatchMesh {
    pub positions: Vec<Point3>,
    /// Unit normals (non-finite for degenerate patches, see [`crate::patch`]).
    pub normals: Vec<Vector3>,
    /// Interpolated scalar channel, one per vertex.
    pub scalars: Vec<f32>,
    /// Triangle indices, every 3 consecutive values form one triangle.
    pub indices: Vec<u32>,
}

impl PatchMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Serialize to a compact little-endian blob for transmission to a
    /// WebGL/Three.js frontend.
    ///
    /// Layout:
    /// ```text
    /// [nv: u32 LE]
    /// [positions: f32*3*nv LE]
    /// [normals: f32*3*nv LE]
    /// [scalars: f32*nv LE]
    /// [ni: u32 LE]
    /// [indices: u32*ni LE]
    /// ```
    pub fn to_binary(&self) -> Vec<u8> {
        let nv = self.positions.len() as u32;
        let ni = self.indices.len() as u32;

        let capacity = 4 + 12 * nv as usize + 12 * nv as usize + 4 * nv as usize + 4 + 4 * ni as usize;
        let mut buf = Vec::with_capacity(capacity);

        buf.extend_from_slice(&nv.to_le_bytes());
        for p in &self.positions {
            buf.extend_from_slice(&p.x.to_le_bytes());
            buf.extend_from_slice(&p.y.to_le_bytes());
            buf.extend_from_slice(&p.z.to_le_bytes());
        }
        for n in &self.normals {
            buf.extend_from_slice(&n.x.to_le_bytes());
            buf.extend_from_slice(&n.y.to_le_bytes());
            buf.extend_from_slice(&n.z.to_le_bytes());
        }
        for s in &self.scalars {
            buf.extend_from_slice(&s.to_le_bytes());
        }
        buf.extend_from_slice(&ni.to_le_bytes());
        for &i in &self.indices {
            buf.extend_from_slice(&i.to_le_bytes());
        }

        buf
    }
}

/// Sample `patch` on a uniform barycentric grid with `n` subdivisions
/// per edge (`n >= 1`), giving `(n+1)(n+2)/2` vertices and `n²`
/// triangles.
pub fn tessellate_patch<P>(patch: &P, n: usize, deformation: &Deformation) -> PatchMesh
where
    P: CurvedPatch + Sync,
{
    assert!(n >= 1, "subdivision level must be at least 1");
    let nf = n as f32;

    // Row a holds vertices (a/n, b/n) for b in 0..=n-a.
    let rows: Vec<Vec<(Point3, Vector3, f32)>> = (0..=n)
        .into_par_iter()
        .map(|a| {
            let u = a as f32 / nf;
            (0..=n - a)
                .map(|b| {
                    let v = b as f32 / nf;
                    let ps = patch.position_and_scalar(u, v);
                    let normal = patch.normal(u, v, deformation);
                    (Point3::new(ps.x, ps.y, ps.z), normal, ps.w)
                })
                .collect()
        })
        .collect();

    let nv = (n + 1) * (n + 2) / 2;
    let mut positions = Vec::with_capacity(nv);
    let mut normals = Vec::with_capacity(nv);
    let mut scalars = Vec::with_capacity(nv);
    for row in rows {
        for (p, normal, s) in row {
            positions.push(p);
            normals.push(normal);
            scalars.push(s);
        }
    }

    // Vertex id of lattice point (a, b).
    let vid = |a: usize, b: usize| -> u32 { (a * (n + 1) - (a * a - a) / 2 + b) as u32 };

    let mut indices = Vec::with_capacity(3 * n * n);
    for a in 0..n {
        for b in 0..n - a {
            indices.extend_from_slice(&[vid(a, b), vid(a + 1, b), vid(a, b + 1)]);
            if b + 1 < n - a {
                indices.extend_from_slice(&[vid(a + 1, b), vid(a + 1, b + 1), vid(a, b + 1)]);
            }
        }
    }

    PatchMesh {
        positions,
        normals,
        scalars,
        indices,
    }
}
