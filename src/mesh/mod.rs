//! Core mesh data structures.
//!
//! This module holds the face-vertex mesh types the subdivision pipeline
//! flows through, and the connectivity derivation that powers it:
//!
//! - [`TriangleMesh`] — raw input geometry (file loader or built-in shape)
//! - [`weld_vertices`] — merge duplicated seam vertices before anything else
//! - [`QuadMesh`] / [`triangles_to_quads`] — the Catmull-Clark control mesh
//! - [`Topology`] — flattened adjacency tables over a quad face list
//!
//! # Pipeline position
//!
//! ```text
//! load / shape -> weld -> triangles_to_quads -> Topology::build
//! ```
//!
//! Each subdivision level re-runs only the last step; welding and
//! conversion happen once on the base mesh.

mod quad;
mod shapes;
mod topology;
mod triangle;
mod weld;

pub use quad::{triangles_to_quads, QuadMesh};
pub use shapes::{cube, octahedron, tetrahedron};
pub use topology::{EdgeKey, Topology, NO_FACE};
pub use triangle::TriangleMesh;
pub use weld::{weld_vertices, WeldOptions};
