//! Quad mesh representation and triangle-to-quad conversion.
//!
//! Catmull-Clark operates on quad faces. A triangle mesh enters the
//! pipeline through [`triangles_to_quads`], which splits every triangle
//! around its centroid into three quads. Hand-authored quad meshes skip
//! the conversion and are wrapped directly with [`QuadMesh::from_faces`].

use std::collections::HashMap;

use nalgebra::Point3;

use crate::error::{MeshError, Result};
use crate::mesh::{EdgeKey, TriangleMesh};

/// A mesh whose faces are all quadrilaterals.
///
/// Faces are stored in consistent winding order: consecutive vertex pairs
/// (wrapping) are the face's four boundary edges.
#[derive(Debug, Clone)]
pub struct QuadMesh {
    /// Vertex positions.
    pub positions: Vec<Point3<f32>>,

    /// Quad faces as vertex index 4-tuples.
    pub faces: Vec<[u32; 4]>,
}

impl QuadMesh {
    /// Wrap an already-quad face list, validating indices.
    ///
    /// # Errors
    /// Returns [`MeshError::EmptyMesh`], [`MeshError::InvalidVertexIndex`]
    /// or [`MeshError::DegenerateFace`] on invalid input.
    pub fn from_faces(positions: Vec<Point3<f32>>, faces: Vec<[u32; 4]>) -> Result<Self> {
        if faces.is_empty() {
            return Err(MeshError::EmptyMesh);
        }

        for (fi, face) in faces.iter().enumerate() {
            for &vi in face {
                if vi as usize >= positions.len() {
                    return Err(MeshError::InvalidVertexIndex {
                        face: fi,
                        vertex: vi as usize,
                    });
                }
            }
            // All four corners must be distinct, including the diagonals.
            if face[0] == face[1]
                || face[1] == face[2]
                || face[2] == face[3]
                || face[3] == face[0]
                || face[0] == face[2]
                || face[1] == face[3]
            {
                return Err(MeshError::DegenerateFace { face: fi });
            }
        }

        Ok(Self { positions, faces })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of quad faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Convert a triangle mesh into the initial Catmull-Clark quad control mesh.
///
/// Every triangle `(a, b, c)` gains a centroid vertex and a midpoint vertex
/// per edge, then splits into three quads around the centroid:
///
/// ```text
/// (a, mab, f, mca)  (b, mbc, f, mab)  (c, mca, f, mbc)
/// ```
///
/// Midpoint vertices are created once per unique undirected edge and shared
/// between adjacent triangles, so the conversion introduces no seams. The
/// original vertices keep their indices; centroids and midpoints are
/// appended after them in discovery order.
///
/// The output has exactly `3T` faces and `V + T + E` vertices, where `E` is
/// the number of unique edges in the triangulation.
///
/// # Example
/// ```
/// use crease::mesh::{octahedron, triangles_to_quads};
///
/// let quads = triangles_to_quads(&octahedron()).unwrap();
/// assert_eq!(quads.face_count(), 24); // 3 * 8
/// assert_eq!(quads.vertex_count(), 26); // 6 + 8 + 12
/// ```
pub fn triangles_to_quads(mesh: &TriangleMesh) -> Result<QuadMesh> {
    if mesh.indices.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    let mut positions = mesh.positions.clone();
    let mut faces = Vec::with_capacity(mesh.indices.len() * 3);
    let mut midpoints: HashMap<EdgeKey, u32> = HashMap::new();

    for (fi, &[a, b, c]) in mesh.indices.iter().enumerate() {
        for &vi in &[a, b, c] {
            if vi as usize >= mesh.positions.len() {
                return Err(MeshError::InvalidVertexIndex {
                    face: fi,
                    vertex: vi as usize,
                });
            }
        }

        let pa = mesh.positions[a as usize];
        let pb = mesh.positions[b as usize];
        let pc = mesh.positions[c as usize];

        let centroid = Point3::from((pa.coords + pb.coords + pc.coords) / 3.0);
        let f = positions.len() as u32;
        positions.push(centroid);

        let mut midpoint = |u: u32, v: u32| -> u32 {
            *midpoints.entry(EdgeKey::new(u, v)).or_insert_with(|| {
                let mid = (mesh.positions[u as usize].coords
                    + mesh.positions[v as usize].coords)
                    * 0.5;
                positions.push(Point3::from(mid));
                (positions.len() - 1) as u32
            })
        };

        let mab = midpoint(a, b);
        let mbc = midpoint(b, c);
        let mca = midpoint(c, a);

        faces.push([a, mab, f, mca]);
        faces.push([b, mbc, f, mab]);
        faces.push([c, mca, f, mbc]);
    }

    Ok(QuadMesh { positions, faces })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{cube, octahedron, tetrahedron};

    #[test]
    fn test_single_triangle() {
        let mesh = TriangleMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.5, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
        .unwrap();

        let quads = triangles_to_quads(&mesh).unwrap();
        // 3 original + 1 centroid + 3 midpoints.
        assert_eq!(quads.vertex_count(), 7);
        assert_eq!(quads.face_count(), 3);

        // Centroid vertex directly follows the originals.
        let centroid = quads.positions[3];
        assert!((centroid - Point3::new(0.5, 1.0 / 3.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_midpoints_shared_between_triangles() {
        // Octahedron: 6 vertices, 8 faces, 12 unique edges. Shared midpoints
        // mean 12 midpoint vertices, not 24.
        let quads = triangles_to_quads(&octahedron()).unwrap();
        assert_eq!(quads.face_count(), 24);
        assert_eq!(quads.vertex_count(), 6 + 8 + 12);
    }

    #[test]
    fn test_face_count_triples() {
        for mesh in [tetrahedron(), octahedron(), cube()] {
            let quads = triangles_to_quads(&mesh).unwrap();
            assert_eq!(quads.face_count(), mesh.triangle_count() * 3);
        }
    }

    #[test]
    fn test_cube_vertex_count() {
        // 8 vertices, 12 triangles, 18 unique edges.
        let quads = triangles_to_quads(&cube()).unwrap();
        assert_eq!(quads.vertex_count(), 8 + 12 + 18);
    }

    #[test]
    fn test_originals_keep_their_indices() {
        let mesh = octahedron();
        let quads = triangles_to_quads(&mesh).unwrap();
        for (i, p) in mesh.positions.iter().enumerate() {
            assert_eq!(quads.positions[i], *p);
        }
    }

    #[test]
    fn test_from_faces_rejects_degenerate_diagonal() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let result = QuadMesh::from_faces(positions, vec![[0, 1, 0, 3]]);
        assert!(matches!(result, Err(MeshError::DegenerateFace { face: 0 })));
    }

    #[test]
    fn test_from_faces_rejects_out_of_range() {
        let positions = vec![Point3::new(0.0, 0.0, 0.0)];
        let result = QuadMesh::from_faces(positions, vec![[0, 1, 2, 3]]);
        assert!(matches!(result, Err(MeshError::InvalidVertexIndex { .. })));
    }
}
