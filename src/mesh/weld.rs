//! Vertex welding.
//!
//! Mesh files frequently store seam vertices several times (once per face
//! that touches them), which makes adjacency computation see a cut surface
//! instead of a closed one. Welding merges geometrically-coincident vertices
//! within a tolerance and remaps the index list, so the topology builder
//! downstream observes a manifold-like structure.
//!
//! Welding runs once on the base mesh, before the first subdivision. Deeper
//! levels are seam-free by construction and are never welded.

use crate::error::Result;
use crate::mesh::TriangleMesh;

/// Options for vertex welding.
#[derive(Debug, Clone)]
pub struct WeldOptions {
    /// Two vertices closer than this (Euclidean distance) are merged.
    ///
    /// There is no adaptive scaling to the mesh bounding box; tune this when
    /// legitimately-distinct vertices sit closer together than the default.
    pub epsilon: f32,
}

impl Default for WeldOptions {
    fn default() -> Self {
        Self { epsilon: 1e-5 }
    }
}

impl WeldOptions {
    /// Set the merge tolerance.
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }
}

/// Merge geometrically-coincident vertices and remap the index list.
///
/// Each input vertex is scanned against the previously-accepted unique
/// vertices in order; the first unique vertex within `epsilon` wins,
/// otherwise the vertex is appended as a new unique entry. This is O(n²),
/// which is acceptable for the small base meshes this runs on.
///
/// The output index list has the same length as the input's; only the
/// values change. Normals follow their vertex: a merged vertex keeps the
/// normal of the unique vertex it merged into.
///
/// # Example
/// ```
/// use crease::mesh::{weld_vertices, TriangleMesh, WeldOptions};
/// use nalgebra::Point3;
///
/// // Two triangles sharing an edge, stored with duplicated seam vertices.
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0), // duplicate of vertex 1
///     Point3::new(0.5, 1.0, 0.0), // duplicate of vertex 2
///     Point3::new(1.5, 1.0, 0.0),
/// ];
/// let mesh = TriangleMesh::new(positions, vec![[0, 1, 2], [3, 5, 4]]).unwrap();
///
/// let welded = weld_vertices(&mesh, &WeldOptions::default()).unwrap();
/// assert_eq!(welded.vertex_count(), 4);
/// assert_eq!(welded.triangle_count(), 2);
/// ```
pub fn weld_vertices(mesh: &TriangleMesh, options: &WeldOptions) -> Result<TriangleMesh> {
    let eps = options.epsilon;

    let mut unique = Vec::with_capacity(mesh.positions.len());
    let mut unique_normals = mesh.normals.as_ref().map(|_| Vec::new());
    let mut remap = vec![0u32; mesh.positions.len()];

    for (i, p) in mesh.positions.iter().enumerate() {
        let hit = unique
            .iter()
            .position(|q: &nalgebra::Point3<f32>| (p - q).norm() <= eps);

        remap[i] = match hit {
            Some(j) => j as u32,
            None => {
                unique.push(*p);
                if let (Some(out), Some(normals)) = (&mut unique_normals, &mesh.normals) {
                    out.push(normals[i]);
                }
                (unique.len() - 1) as u32
            }
        };
    }

    let indices = mesh
        .indices
        .iter()
        .map(|&[a, b, c]| [remap[a as usize], remap[b as usize], remap[c as usize]])
        .collect();

    let welded = TriangleMesh::new(unique, indices)?;
    Ok(match unique_normals {
        Some(normals) => welded.with_normals(normals),
        None => welded,
    })
}
