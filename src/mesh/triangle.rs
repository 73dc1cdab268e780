//! Triangle mesh input representation.
//!
//! [`TriangleMesh`] is the face-vertex form consumed by the subdivision
//! pipeline: raw positions plus a triangle index list, as produced by the
//! glTF loader or the built-in shape generators. Normals are carried along
//! when present but the topology pipeline never reads them.

use nalgebra::{Point3, Vector3};

use crate::error::{MeshError, Result};

/// A triangle mesh in face-vertex form.
///
/// # Example
/// ```
/// use crease::mesh::TriangleMesh;
/// use nalgebra::Point3;
///
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let mesh = TriangleMesh::new(positions, vec![[0, 1, 2]]).unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub positions: Vec<Point3<f32>>,

    /// Per-vertex normals, if the source provided them. Carried through
    /// welding but not used by the topology pipeline.
    pub normals: Option<Vec<Vector3<f32>>>,

    /// Triangle faces as vertex index triples.
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Create a triangle mesh, validating the index list.
    ///
    /// # Errors
    /// Returns [`MeshError::EmptyMesh`] if there are no faces,
    /// [`MeshError::InvalidVertexIndex`] for an out-of-range index, and
    /// [`MeshError::DegenerateFace`] for a face with repeated vertices.
    pub fn new(positions: Vec<Point3<f32>>, indices: Vec<[u32; 3]>) -> Result<Self> {
        if indices.is_empty() {
            return Err(MeshError::EmptyMesh);
        }

        for (fi, face) in indices.iter().enumerate() {
            for &vi in face {
                if vi as usize >= positions.len() {
                    return Err(MeshError::InvalidVertexIndex {
                        face: fi,
                        vertex: vi as usize,
                    });
                }
            }
            if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                return Err(MeshError::DegenerateFace { face: fi });
            }
        }

        Ok(Self {
            positions,
            normals: None,
            indices,
        })
    }

    /// Attach per-vertex normals. Ignored unless the count matches the
    /// vertex count.
    pub fn with_normals(mut self, normals: Vec<Vector3<f32>>) -> Self {
        if normals.len() == self.positions.len() {
            self.normals = Some(normals);
        }
        self
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangle faces.
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Axis-aligned bounding box, or `None` for an empty vertex set.
    pub fn bounding_box(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        let first = *self.positions.first()?;
        let mut min = first;
        let mut max = first;
        for p in &self.positions[1..] {
            min = Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_vertex_index() {
        let positions = vec![Point3::new(0.0, 0.0, 0.0)];
        let result = TriangleMesh::new(positions, vec![[0, 1, 2]]);
        assert!(matches!(
            result,
            Err(MeshError::InvalidVertexIndex { face: 0, vertex: 1 })
        ));
    }

    #[test]
    fn test_degenerate_face() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
        ];
        let result = TriangleMesh::new(positions, vec![[0, 0, 2]]);
        assert!(matches!(result, Err(MeshError::DegenerateFace { face: 0 })));
    }

    #[test]
    fn test_empty_mesh() {
        let result = TriangleMesh::new(vec![], vec![]);
        assert!(matches!(result, Err(MeshError::EmptyMesh)));
    }

    #[test]
    fn test_bounding_box() {
        let positions = vec![
            Point3::new(-1.0, 0.0, 2.0),
            Point3::new(1.0, -3.0, 0.0),
            Point3::new(0.0, 1.0, -2.0),
        ];
        let mesh = TriangleMesh::new(positions, vec![[0, 1, 2]]).unwrap();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, Point3::new(-1.0, -3.0, -2.0));
        assert_eq!(max, Point3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_normals_length_mismatch_ignored() {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
        ];
        let mesh = TriangleMesh::new(positions, vec![[0, 1, 2]])
            .unwrap()
            .with_normals(vec![Vector3::new(0.0, 1.0, 0.0)]);
        assert!(mesh.normals.is_none());
    }
}
