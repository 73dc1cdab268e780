//! Quad mesh connectivity tables.
//!
//! This module derives the full adjacency structure of a quad face list:
//! the unique edge list, edge-to-face incidence, face-to-edge indices, and
//! per-vertex face/edge membership. Everything is flat and index-based —
//! counts plus concatenated index runs instead of lists-of-lists, matching
//! the layout parallel GPU kernels consume directly. There are no pointer
//! graphs; an edge is a value ([`EdgeKey`]) and every relation is an
//! integer id into a flat array.
//!
//! Tables are rebuilt from scratch for every subdivision level; nothing is
//! updated incrementally.

use std::collections::HashMap;

use crate::error::{MeshError, Result};

/// Sentinel face id marking the empty slot of a boundary edge's face pair.
pub const NO_FACE: u32 = u32::MAX;

/// A canonical undirected edge: an ordered pair of vertex indices with the
/// smaller index first, so `(a, b)` and `(b, a)` hash and compare equal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    a: u32,
    b: u32,
}

impl EdgeKey {
    /// Canonicalize an edge from its two endpoints, in either order.
    pub fn new(u: u32, v: u32) -> Self {
        if u < v {
            Self { a: u, b: v }
        } else {
            Self { a: v, b: u }
        }
    }

    /// The endpoints, smaller index first.
    pub fn endpoints(self) -> [u32; 2] {
        [self.a, self.b]
    }
}

/// Complete adjacency tables for one quad mesh level.
///
/// All arrays use `u32` ids. The `*_counts`/`*_indices` pairs are flattened
/// adjacency lists: entity `v` owns a contiguous run of `counts[v]` entries
/// inside `indices`, at the offset given by the prefix sum of the counts
/// before it.
#[derive(Debug, Clone)]
pub struct Topology {
    /// Unique undirected edges as `[min_vertex, max_vertex]`, in first-seen
    /// order (face id ascending, then within-face edge order).
    pub edges: Vec<[u32; 2]>,

    /// Per edge, the two incident face ids. The first visiting face fills
    /// slot 0, the second slot 1; boundary edges keep [`NO_FACE`] in slot 1.
    pub edge_faces: Vec<[u32; 2]>,

    /// Per face, its four edge ids in the same cyclic order as the face's
    /// vertices.
    pub face_edges: Vec<[u32; 4]>,

    /// Number of faces incident to each vertex.
    pub vertex_face_counts: Vec<u32>,

    /// Concatenated per-vertex face id runs (see [`Topology::vertex_faces`]).
    pub vertex_face_indices: Vec<u32>,

    /// Number of edges incident to each vertex.
    pub vertex_edge_counts: Vec<u32>,

    /// Concatenated per-vertex edge id runs (see [`Topology::vertex_edges`]).
    pub vertex_edge_indices: Vec<u32>,

    // Prefix sums over the counts (length V + 1), kept for O(1) run access.
    vertex_face_offsets: Vec<u32>,
    vertex_edge_offsets: Vec<u32>,
}

impl Topology {
    /// Build the full adjacency table set for a quad face list.
    ///
    /// Edge ids are assigned in first-seen order during face iteration, so
    /// the output is deterministic for a fixed face list.
    ///
    /// # Errors
    /// Fails fast on broken input rather than producing tables a GPU kernel
    /// would mis-index: [`MeshError::InvalidVertexIndex`] for an
    /// out-of-range vertex, [`MeshError::DegenerateFace`] for a face
    /// without four distinct vertices, and [`MeshError::NonManifoldEdge`]
    /// if a third face visits an edge.
    pub fn build(vertex_count: usize, faces: &[[u32; 4]]) -> Result<Self> {
        let mut edges: Vec<[u32; 2]> = Vec::new();
        let mut edge_faces: Vec<[u32; 2]> = Vec::new();
        let mut face_edges: Vec<[u32; 4]> = Vec::with_capacity(faces.len());
        let mut edge_ids: HashMap<EdgeKey, u32> = HashMap::new();

        // Temporary lists-of-lists, flattened once at the end.
        let mut vertex_faces: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];
        let mut vertex_edges: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];

        for (fi, face) in faces.iter().enumerate() {
            for &vi in face {
                if vi as usize >= vertex_count {
                    return Err(MeshError::InvalidVertexIndex {
                        face: fi,
                        vertex: vi as usize,
                    });
                }
            }
            if face[0] == face[1]
                || face[1] == face[2]
                || face[2] == face[3]
                || face[3] == face[0]
                || face[0] == face[2]
                || face[1] == face[3]
            {
                return Err(MeshError::DegenerateFace { face: fi });
            }

            let mut fe = [0u32; 4];
            for i in 0..4 {
                let key = EdgeKey::new(face[i], face[(i + 1) & 3]);
                let eid = *edge_ids.entry(key).or_insert_with(|| {
                    let eid = edges.len() as u32;
                    edges.push(key.endpoints());
                    edge_faces.push([NO_FACE, NO_FACE]);
                    eid
                });

                let slots = &mut edge_faces[eid as usize];
                if slots[0] == NO_FACE {
                    slots[0] = fi as u32;
                } else if slots[1] == NO_FACE {
                    slots[1] = fi as u32;
                } else {
                    let [v0, v1] = key.endpoints();
                    return Err(MeshError::NonManifoldEdge { v0, v1 });
                }

                fe[i] = eid;
            }
            face_edges.push(fe);

            for &vi in face {
                vertex_faces[vi as usize].push(fi as u32);
            }
        }

        for (eid, &[v0, v1]) in edges.iter().enumerate() {
            vertex_edges[v0 as usize].push(eid as u32);
            vertex_edges[v1 as usize].push(eid as u32);
        }

        let (vertex_face_counts, vertex_face_indices, vertex_face_offsets) =
            flatten(&vertex_faces);
        let (vertex_edge_counts, vertex_edge_indices, vertex_edge_offsets) =
            flatten(&vertex_edges);

        Ok(Self {
            edges,
            edge_faces,
            face_edges,
            vertex_face_counts,
            vertex_face_indices,
            vertex_edge_counts,
            vertex_edge_indices,
            vertex_face_offsets,
            vertex_edge_offsets,
        })
    }

    /// Number of vertices the tables were built for.
    pub fn vertex_count(&self) -> usize {
        self.vertex_face_counts.len()
    }

    /// Number of unique edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of quad faces.
    pub fn face_count(&self) -> usize {
        self.face_edges.len()
    }

    /// The ids of the faces touching vertex `v`.
    pub fn vertex_faces(&self, v: u32) -> &[u32] {
        let lo = self.vertex_face_offsets[v as usize] as usize;
        let hi = self.vertex_face_offsets[v as usize + 1] as usize;
        &self.vertex_face_indices[lo..hi]
    }

    /// The ids of the edges touching vertex `v`.
    pub fn vertex_edges(&self, v: u32) -> &[u32] {
        let lo = self.vertex_edge_offsets[v as usize] as usize;
        let hi = self.vertex_edge_offsets[v as usize + 1] as usize;
        &self.vertex_edge_indices[lo..hi]
    }

    /// Whether edge `e` has only one incident face.
    pub fn is_boundary_edge(&self, e: u32) -> bool {
        self.edge_faces[e as usize][1] == NO_FACE
    }

    /// Number of boundary edges.
    pub fn boundary_edge_count(&self) -> usize {
        (0..self.edge_count() as u32)
            .filter(|&e| self.is_boundary_edge(e))
            .count()
    }

    /// Find the id of the edge connecting `v0` and `v1`, in either order.
    ///
    /// Linear in the edge count; meant for occasional lookups such as
    /// crease tagging, not inner loops.
    pub fn find_edge(&self, v0: u32, v1: u32) -> Option<u32> {
        let key = EdgeKey::new(v0, v1).endpoints();
        self.edges.iter().position(|&e| e == key).map(|i| i as u32)
    }
}

/// Flatten per-entity lists into (counts, concatenated indices, offsets).
fn flatten(lists: &[Vec<u32>]) -> (Vec<u32>, Vec<u32>, Vec<u32>) {
    let total: usize = lists.iter().map(Vec::len).sum();
    let mut counts = Vec::with_capacity(lists.len());
    let mut indices = Vec::with_capacity(total);
    let mut offsets = Vec::with_capacity(lists.len() + 1);

    offsets.push(0u32);
    for list in lists {
        counts.push(list.len() as u32);
        indices.extend_from_slice(list);
        offsets.push(indices.len() as u32);
    }

    (counts, indices, offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A cube as six quad faces.
    fn quad_cube() -> (usize, Vec<[u32; 4]>) {
        let faces = vec![
            [0, 3, 2, 1], // bottom
            [4, 5, 6, 7], // top
            [0, 1, 5, 4], // front
            [2, 3, 7, 6], // back
            [0, 4, 7, 3], // left
            [1, 2, 6, 5], // right
        ];
        (8, faces)
    }

    #[test]
    fn test_quad_cube_counts() {
        let (n, faces) = quad_cube();
        let topo = Topology::build(n, &faces).unwrap();

        assert_eq!(topo.edge_count(), 12);
        assert_eq!(topo.face_count(), 6);
        assert_eq!(topo.boundary_edge_count(), 0);

        // Every cube vertex touches 3 faces and 3 edges.
        for v in 0..8 {
            assert_eq!(topo.vertex_faces(v).len(), 3);
            assert_eq!(topo.vertex_edges(v).len(), 3);
        }

        // Each quad contributes one membership entry per corner.
        let total: u32 = topo.vertex_face_counts.iter().sum();
        assert_eq!(total as usize, 4 * topo.face_count());
    }

    #[test]
    fn test_face_edge_duality() {
        let (n, faces) = quad_cube();
        let topo = Topology::build(n, &faces).unwrap();

        for (fi, fe) in topo.face_edges.iter().enumerate() {
            for &e in fe {
                let pair = topo.edge_faces[e as usize];
                assert!(
                    pair.contains(&(fi as u32)),
                    "edge {} does not list face {}",
                    e,
                    fi
                );
            }
        }
    }

    #[test]
    fn test_vertex_edge_membership() {
        let (n, faces) = quad_cube();
        let topo = Topology::build(n, &faces).unwrap();

        for (eid, &[v0, v1]) in topo.edges.iter().enumerate() {
            assert!(topo.vertex_edges(v0).contains(&(eid as u32)));
            assert!(topo.vertex_edges(v1).contains(&(eid as u32)));
        }
    }

    #[test]
    fn test_face_edges_follow_winding() {
        let (n, faces) = quad_cube();
        let topo = Topology::build(n, &faces).unwrap();

        for (fi, face) in faces.iter().enumerate() {
            for i in 0..4 {
                let expected = EdgeKey::new(face[i], face[(i + 1) & 3]).endpoints();
                let eid = topo.face_edges[fi][i];
                assert_eq!(topo.edges[eid as usize], expected);
            }
        }
    }

    #[test]
    fn test_edge_ids_first_seen_order() {
        let (n, faces) = quad_cube();
        let topo = Topology::build(n, &faces).unwrap();

        // Face 0's edges must occupy ids 0..4 in within-face order.
        assert_eq!(topo.face_edges[0], [0, 1, 2, 3]);
        assert_eq!(topo.edges[0], EdgeKey::new(0, 3).endpoints());
        assert_eq!(topo.edges[1], EdgeKey::new(3, 2).endpoints());
    }

    #[test]
    fn test_boundary_edges_single_quad() {
        let topo = Topology::build(4, &[[0, 1, 2, 3]]).unwrap();

        assert_eq!(topo.edge_count(), 4);
        assert_eq!(topo.boundary_edge_count(), 4);
        for pair in &topo.edge_faces {
            assert_eq!(pair[0], 0);
            assert_eq!(pair[1], NO_FACE);
        }
    }

    #[test]
    fn test_shared_edge_two_quads() {
        let faces = vec![[0, 1, 2, 3], [1, 4, 5, 2]];
        let topo = Topology::build(6, &faces).unwrap();

        assert_eq!(topo.edge_count(), 7);
        assert_eq!(topo.boundary_edge_count(), 6);

        let shared = topo.find_edge(1, 2).unwrap();
        assert_eq!(topo.edge_faces[shared as usize], [0, 1]);
    }

    #[test]
    fn test_non_manifold_edge_rejected() {
        // Three quads all sharing the (0, 1) edge.
        let faces = vec![[0, 1, 2, 3], [1, 0, 4, 5], [0, 1, 6, 7]];
        let result = Topology::build(8, &faces);
        assert!(matches!(
            result,
            Err(MeshError::NonManifoldEdge { v0: 0, v1: 1 })
        ));
    }

    #[test]
    fn test_out_of_range_vertex_rejected() {
        let result = Topology::build(3, &[[0, 1, 2, 3]]);
        assert!(matches!(
            result,
            Err(MeshError::InvalidVertexIndex { face: 0, vertex: 3 })
        ));
    }

    #[test]
    fn test_degenerate_face_rejected() {
        let result = Topology::build(4, &[[0, 1, 0, 3]]);
        assert!(matches!(result, Err(MeshError::DegenerateFace { face: 0 })));
    }

    #[test]
    fn test_edge_key_canonical() {
        assert_eq!(EdgeKey::new(5, 2), EdgeKey::new(2, 5));
        assert_eq!(EdgeKey::new(5, 2).endpoints(), [2, 5]);
    }
}
