//! # Crease
//!
//! Catmull-Clark subdivision surfaces with GPU-ready topology buffers.
//!
//! Crease turns an arbitrary triangle mesh (or a built-in polyhedron) into
//! a quad control mesh and refines it level by level with crease-aware
//! Catmull-Clark subdivision. Every level carries its complete adjacency
//! structure — unique edges, edge-to-face pairs, face-to-edge indices, and
//! flattened per-vertex face/edge membership — in the fixed-stride array
//! layout parallel GPU kernels consume directly.
//!
//! ## Features
//!
//! - **Flat, index-based topology**: counts + concatenated index runs, no
//!   pointer graphs
//! - **Semi-sharp creases**: integer per-edge sharpness that decays one
//!   step per level, with crease and corner vertex rules
//! - **Seam-safe ingest**: epsilon welding and shared-midpoint quad
//!   conversion keep the control mesh manifold
//! - **GPU export**: packed buffers with the standard storage-buffer
//!   padding for 3-component vectors
//!
//! ## Quick Start
//!
//! ```
//! use crease::prelude::*;
//! use crease::mesh::octahedron;
//!
//! // Build the level-0 control mesh from a built-in shape.
//! let level = SubdivisionLevel::from_triangles(&octahedron(), &WeldOptions::default()).unwrap();
//! assert_eq!(level.face_count(), 24);
//!
//! // One refinement step: 4x the faces.
//! let next = subdivide(&level, &SubdivideOptions::default()).unwrap();
//! assert_eq!(next.face_count(), 96);
//!
//! // Pack the new level for upload.
//! let buffers = crease::export::LevelBuffers::from_level(&next);
//! assert_eq!(buffers.control_points.len, next.vertex_count());
//! ```
//!
//! ## Loading a File
//!
//! ```no_run
//! use crease::prelude::*;
//!
//! let mesh = crease::io::load("model.gltf").unwrap();
//! let mut level = SubdivisionLevel::from_triangles(&mesh, &WeldOptions::default()).unwrap();
//!
//! // Tag a semi-sharp crease that survives two refinement steps.
//! let [v0, v1] = level.topology.edges[0];
//! level.set_crease(v0, v1, 2).unwrap();
//!
//! let refined = subdivide_levels(level, &SubdivideOptions::new(3)).unwrap();
//! println!("{} quads", refined.face_count());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod export;
pub mod io;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use crease::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::subdivide::{
        subdivide, subdivide_levels, SubdivideOptions, SubdivisionLevel,
    };
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{
        triangles_to_quads, weld_vertices, EdgeKey, QuadMesh, Topology, TriangleMesh, WeldOptions,
        NO_FACE,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use crate::mesh::octahedron;

    #[test]
    fn test_octahedron_pipeline() {
        // The concrete scenario from the design notes: 6 vertices and 8
        // triangles become 24 quads over 26 vertices, then grow 4x per
        // level with V + F + E new vertices each step.
        let level =
            SubdivisionLevel::from_triangles(&octahedron(), &WeldOptions::default()).unwrap();

        assert_eq!(level.face_count(), 24);
        assert_eq!(level.vertex_count(), 26);
        assert_eq!(level.edge_count(), 48);

        let face_count_sum: u32 = level.topology.vertex_face_counts.iter().sum();
        assert_eq!(face_count_sum as usize, 4 * level.face_count());

        let next = subdivide(&level, &SubdivideOptions::default()).unwrap();
        assert_eq!(next.face_count(), 96);
        assert_eq!(next.vertex_count(), 26 + 24 + 48);
        assert_eq!(next.topology.boundary_edge_count(), 0);
    }
}
