//! GPU-facing buffer export.
//!
//! Flattens a [`SubdivisionLevel`] into tightly packed byte buffers a
//! compute or render collaborator can upload verbatim. Each buffer keeps a
//! fixed element stride; the one layout quirk is the standard storage
//! buffer alignment rule for 3-component vectors: any element whose
//! natural size is exactly 12 bytes is written with a 16-byte stride, the
//! trailing 4 bytes zero-filled. All other element types use their natural
//! size unpadded.
//!
//! Uploading the bytes to device memory is the caller's concern; this
//! module stops at host-side arrays.

use bytemuck::{Pod, Zeroable};
use nalgebra::Point3;

use crate::algo::subdivide::SubdivisionLevel;

/// A 3-component float vector padded to a 16-byte storage-buffer stride.
///
/// The fourth component exists only to satisfy the shader buffer layout
/// alignment rule and is always zero.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct PaddedVec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
    /// Zero-filled padding.
    pub w: f32,
}

impl From<Point3<f32>> for PaddedVec3 {
    fn from(p: Point3<f32>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
            w: 0.0,
        }
    }
}

/// One packed host-side buffer, ready for upload.
#[derive(Debug, Clone)]
pub struct GpuBuffer {
    /// The packed element bytes.
    pub bytes: Vec<u8>,

    /// Stride of one element in bytes.
    pub stride: usize,

    /// Number of elements.
    pub len: usize,
}

impl GpuBuffer {
    fn from_pod_slice<T: Pod>(items: &[T]) -> Self {
        Self {
            bytes: bytemuck::cast_slice(items).to_vec(),
            stride: std::mem::size_of::<T>(),
            len: items.len(),
        }
    }

    /// Total size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// The complete buffer set for one subdivision level.
///
/// Mirrors the adjacency tables of the level one-to-one, plus a
/// triangulated index list for drawing the quads with a plain triangle
/// pipeline.
#[derive(Debug, Clone)]
pub struct LevelBuffers {
    /// Vertex positions, padded to 16-byte stride.
    pub control_points: GpuBuffer,

    /// Quad faces as `[u32; 4]`.
    pub quad_faces: GpuBuffer,

    /// Unique edges as `[u32; 2]` vertex pairs.
    pub edge_list: GpuBuffer,

    /// Per-edge incident face pairs as `[u32; 2]` (second slot is the
    /// all-bits-set sentinel for boundary edges).
    pub edge_to_face: GpuBuffer,

    /// Per-face edge ids as `[u32; 4]`, in winding order.
    pub face_edge_indices: GpuBuffer,

    /// Per-vertex incident face counts (`u32`).
    pub vertex_face_counts: GpuBuffer,

    /// Concatenated per-vertex face id runs (`u32`).
    pub vertex_face_indices: GpuBuffer,

    /// Per-vertex incident edge counts (`u32`).
    pub vertex_edge_counts: GpuBuffer,

    /// Concatenated per-vertex edge id runs (`u32`).
    pub vertex_edge_indices: GpuBuffer,

    /// Per-edge sharpness tags (`u32`).
    pub edge_sharpness: GpuBuffer,

    /// Triangle index list for drawing: two triangles per quad.
    pub draw_indices: GpuBuffer,
}

impl LevelBuffers {
    /// Pack every array of a level.
    ///
    /// # Example
    /// ```
    /// use crease::algo::subdivide::SubdivisionLevel;
    /// use crease::export::LevelBuffers;
    /// use crease::mesh::{octahedron, WeldOptions};
    ///
    /// let level = SubdivisionLevel::from_triangles(&octahedron(), &WeldOptions::default()).unwrap();
    /// let buffers = LevelBuffers::from_level(&level);
    ///
    /// assert_eq!(buffers.control_points.stride, 16);
    /// assert_eq!(buffers.control_points.len, level.vertex_count());
    /// ```
    pub fn from_level(level: &SubdivisionLevel) -> Self {
        let control_points: Vec<PaddedVec3> =
            level.positions.iter().map(|&p| PaddedVec3::from(p)).collect();

        Self {
            control_points: GpuBuffer::from_pod_slice(&control_points),
            quad_faces: GpuBuffer::from_pod_slice(&level.faces),
            edge_list: GpuBuffer::from_pod_slice(&level.topology.edges),
            edge_to_face: GpuBuffer::from_pod_slice(&level.topology.edge_faces),
            face_edge_indices: GpuBuffer::from_pod_slice(&level.topology.face_edges),
            vertex_face_counts: GpuBuffer::from_pod_slice(&level.topology.vertex_face_counts),
            vertex_face_indices: GpuBuffer::from_pod_slice(&level.topology.vertex_face_indices),
            vertex_edge_counts: GpuBuffer::from_pod_slice(&level.topology.vertex_edge_counts),
            vertex_edge_indices: GpuBuffer::from_pod_slice(&level.topology.vertex_edge_indices),
            edge_sharpness: GpuBuffer::from_pod_slice(&level.sharpness),
            draw_indices: GpuBuffer::from_pod_slice(&triangulate(&level.faces)),
        }
    }

    /// Total size of all buffers in bytes.
    pub fn total_bytes(&self) -> usize {
        self.control_points.size()
            + self.quad_faces.size()
            + self.edge_list.size()
            + self.edge_to_face.size()
            + self.face_edge_indices.size()
            + self.vertex_face_counts.size()
            + self.vertex_face_indices.size()
            + self.vertex_edge_counts.size()
            + self.vertex_edge_indices.size()
            + self.edge_sharpness.size()
            + self.draw_indices.size()
    }
}

/// Split each quad `(a, b, c, d)` into triangles `(a, b, c)` and
/// `(a, c, d)` for plain triangle-list drawing.
fn triangulate(faces: &[[u32; 4]]) -> Vec<u32> {
    let mut indices = Vec::with_capacity(faces.len() * 6);
    for &[a, b, c, d] in faces {
        indices.extend_from_slice(&[a, b, c, a, c, d]);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{octahedron, WeldOptions};

    fn octahedron_level() -> SubdivisionLevel {
        SubdivisionLevel::from_triangles(&octahedron(), &WeldOptions::default()).unwrap()
    }

    #[test]
    fn test_position_padding() {
        let level = octahedron_level();
        let buffers = LevelBuffers::from_level(&level);

        assert_eq!(buffers.control_points.stride, 16);
        assert_eq!(buffers.control_points.len, level.vertex_count());
        assert_eq!(buffers.control_points.size(), level.vertex_count() * 16);

        // Trailing component of every element is zero-filled.
        let padded: Vec<PaddedVec3> = bytemuck::pod_collect_to_vec(&buffers.control_points.bytes);
        for (v, p) in padded.iter().zip(level.positions.iter()) {
            assert_eq!(v.w, 0.0);
            assert_eq!([v.x, v.y, v.z], [p.x, p.y, p.z]);
        }
    }

    #[test]
    fn test_natural_strides() {
        let level = octahedron_level();
        let buffers = LevelBuffers::from_level(&level);

        assert_eq!(buffers.quad_faces.stride, 16);
        assert_eq!(buffers.edge_list.stride, 8);
        assert_eq!(buffers.edge_to_face.stride, 8);
        assert_eq!(buffers.face_edge_indices.stride, 16);
        assert_eq!(buffers.vertex_face_counts.stride, 4);
        assert_eq!(buffers.edge_sharpness.stride, 4);
    }

    #[test]
    fn test_buffer_lengths_match_level() {
        let level = octahedron_level();
        let buffers = LevelBuffers::from_level(&level);

        assert_eq!(buffers.quad_faces.len, level.face_count());
        assert_eq!(buffers.edge_list.len, level.edge_count());
        assert_eq!(buffers.edge_to_face.len, level.edge_count());
        assert_eq!(buffers.face_edge_indices.len, level.face_count());
        assert_eq!(buffers.vertex_face_counts.len, level.vertex_count());
        assert_eq!(buffers.vertex_edge_counts.len, level.vertex_count());
        assert_eq!(buffers.edge_sharpness.len, level.edge_count());
        assert_eq!(buffers.draw_indices.len, level.face_count() * 6);
    }

    #[test]
    fn test_triangulate_winding() {
        let tris = triangulate(&[[0, 1, 2, 3]]);
        assert_eq!(tris, vec![0, 1, 2, 0, 2, 3]);
    }
}
