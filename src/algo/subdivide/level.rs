//! Subdivision level snapshots.

use nalgebra::Point3;

use crate::error::{MeshError, Result};
use crate::mesh::{triangles_to_quads, weld_vertices, QuadMesh, Topology, TriangleMesh, WeldOptions};

/// One fully-built subdivision level: quad geometry, its complete adjacency
/// tables, and the per-edge sharpness tags.
///
/// A level is a logically-immutable snapshot. Each refinement step consumes
/// a level by reference and produces a strictly new one; nothing is updated
/// in place, so a level already handed to a renderer stays valid until its
/// owner drops it.
///
/// # Example
/// ```
/// use crease::algo::subdivide::SubdivisionLevel;
/// use crease::mesh::{octahedron, WeldOptions};
///
/// let level = SubdivisionLevel::from_triangles(&octahedron(), &WeldOptions::default()).unwrap();
/// assert_eq!(level.face_count(), 24);
/// assert_eq!(level.vertex_count(), 26);
/// assert_eq!(level.edge_count(), 48);
/// ```
#[derive(Debug, Clone)]
pub struct SubdivisionLevel {
    /// Vertex positions.
    pub positions: Vec<Point3<f32>>,

    /// Quad faces as vertex index 4-tuples.
    pub faces: Vec<[u32; 4]>,

    /// Adjacency tables for `faces`.
    pub topology: Topology,

    /// Per-edge integer sharpness, parallel to `topology.edges`. Zero is
    /// smooth; positive values are semi-sharp creases that decay by one per
    /// subdivision step.
    pub sharpness: Vec<u32>,
}

impl SubdivisionLevel {
    /// Build a level directly from a quad mesh, with all edges smooth.
    pub fn from_quads(mesh: QuadMesh) -> Result<Self> {
        let topology = Topology::build(mesh.positions.len(), &mesh.faces)?;
        let sharpness = vec![0; topology.edge_count()];
        Ok(Self {
            positions: mesh.positions,
            faces: mesh.faces,
            topology,
            sharpness,
        })
    }

    /// Build the initial control-mesh level from a triangle mesh: weld
    /// seam vertices, centroid-split the triangles into quads, then derive
    /// the adjacency tables.
    pub fn from_triangles(mesh: &TriangleMesh, weld: &WeldOptions) -> Result<Self> {
        let welded = weld_vertices(mesh, weld)?;
        let quads = triangles_to_quads(&welded)?;
        Self::from_quads(quads)
    }

    /// Tag the edge between `v0` and `v1` as a semi-sharp crease.
    ///
    /// A sharpness of `n` survives `n` subdivision steps before the edge
    /// smooths out; tagging three or more edges of a vertex pins that
    /// vertex as a corner.
    ///
    /// # Errors
    /// Returns [`MeshError::NoSuchEdge`] if no edge connects the two
    /// vertices.
    pub fn set_crease(&mut self, v0: u32, v1: u32, sharpness: u32) -> Result<()> {
        let edge = self
            .topology
            .find_edge(v0, v1)
            .ok_or(MeshError::NoSuchEdge { v0, v1 })?;
        self.sharpness[edge as usize] = sharpness;
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of unique edges.
    pub fn edge_count(&self) -> usize {
        self.topology.edge_count()
    }

    /// Number of quad faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}
