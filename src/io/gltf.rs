//! glTF format support.
//!
//! Loads the base triangle mesh from a glTF or GLB file: raw positions,
//! optional normals, and the triangle index list. Everything else in the
//! file (materials, animations, scene graph) is ignored.

use std::path::Path;

use nalgebra::{Point3, Vector3};

use crate::error::{MeshError, Result};
use crate::mesh::TriangleMesh;

/// Load a triangle mesh from a glTF or GLB file.
///
/// Reads the first primitive of the first mesh in the file. POSITION must
/// be present as 3-component 32-bit floats; NORMAL is read when present
/// with a matching count. The index accessor may be unsigned 8-, 16- or
/// 32-bit; without one, an implicit sequential index list `0..N` is used.
///
/// # Errors
/// Any malformed or unsupported input is reported as a
/// [`MeshError::LoadError`] naming the file; no partially-constructed mesh
/// escapes.
///
/// # Example
/// ```no_run
/// use crease::io::gltf;
///
/// let mesh = gltf::load("model.gltf").unwrap();
/// println!("{} triangles", mesh.triangle_count());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
    let path = path.as_ref();
    let load_error = |message: String| MeshError::LoadError {
        path: path.to_path_buf(),
        message,
    };

    let (document, buffers, _images) =
        ::gltf::import(path).map_err(|e| load_error(e.to_string()))?;

    let mesh = document
        .meshes()
        .next()
        .ok_or_else(|| load_error("file contains no mesh".to_string()))?;
    let primitive = mesh
        .primitives()
        .next()
        .ok_or_else(|| load_error("mesh contains no primitives".to_string()))?;

    if primitive.mode() != ::gltf::mesh::Mode::Triangles {
        return Err(load_error(format!(
            "unsupported primitive mode {:?} (expected triangles)",
            primitive.mode()
        )));
    }

    let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

    let positions: Vec<Point3<f32>> = reader
        .read_positions()
        .ok_or_else(|| {
            load_error("POSITION attribute missing or not 3-component float".to_string())
        })?
        .map(|p| Point3::new(p[0], p[1], p[2]))
        .collect();

    let normals: Option<Vec<Vector3<f32>>> = reader
        .read_normals()
        .map(|iter| iter.map(Vector3::from).collect());

    let raw_indices: Vec<u32> = match reader.read_indices() {
        // The reader widens u8/u16 index accessors to u32.
        Some(indices) => indices.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };

    if raw_indices.len() % 3 != 0 {
        return Err(load_error(format!(
            "index count {} is not a multiple of 3",
            raw_indices.len()
        )));
    }

    let indices: Vec<[u32; 3]> = raw_indices
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect();

    let mesh = TriangleMesh::new(positions, indices).map_err(|e| load_error(e.to_string()))?;
    Ok(match normals {
        Some(normals) => mesh.with_normals(normals),
        None => mesh,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file() {
        let result = load("does_not_exist.gltf");
        assert!(matches!(result, Err(MeshError::LoadError { .. })));
    }
}
