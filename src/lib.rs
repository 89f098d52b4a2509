//! Evaluation and shading of curved finite-element surface patches.
//!
//! Given per-element control data (position/scalar control points of
//! polynomial order 1–3, optional vector-field and corner normals), the
//! crate reconstructs position, surface normal, and field value at any
//! barycentric parameter on a curved triangular patch, then maps the
//! field through a colormap atlas and a Phong lighting model to a final
//! fragment color, with optional clipping-plane culling.
//!
//! Every operation is a pure function of its inputs: no shared mutable
//! state, no blocking, deterministic results. Per-pass configuration
//! ([`fragment::PassConfig`]) is threaded explicitly. The only parallel
//! code is the batch sampler in [`tessellate`], which fans patch
//! evaluation out across rayon.

pub mod align;
pub mod clip;
pub mod colormap;
pub mod field;
pub mod fragment;
pub mod light;
pub mod math;
pub mod patch;
pub mod tessellate;

pub use colormap::{Colormap, ColormapImage, ColormapTexture};
pub use field::{DisplayMode, FieldSelect};
pub use fragment::{shade_fragment, shade_with_color, PassConfig};
pub use patch::{CubicPatch, CurvedPatch, Deformation, LinearPatch, QuadraticPatch};
pub use tessellate::{tessellate_patch, PatchMesh};
