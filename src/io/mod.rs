//! Mesh file I/O.
//!
//! This module loads base triangle meshes from scene files.
//!
//! # Supported Formats
//!
//! | Format | Extension | Load | Notes |
//! |--------|-----------|------|-------|
//! | glTF | `.gltf` | ✓ | Positions, normals, triangle indices |
//! | glTF binary | `.glb` | ✓ | Same, single-file container |
//!
//! Built-in test shapes (tetrahedron, octahedron, cube) live in
//! [`crate::mesh`] and need no file at all.
//!
//! # Usage
//!
//! ```no_run
//! use crease::io::load;
//!
//! let mesh = load("model.glb").unwrap();
//! println!("Vertices: {}", mesh.vertex_count());
//! ```

pub mod gltf;

use std::path::Path;

use crate::error::{MeshError, Result};
use crate::mesh::TriangleMesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// glTF format.
    Gltf,
    /// glTF binary format.
    Glb,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "gltf" => Some(Format::Gltf),
            "glb" => Some(Format::Glb),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

/// Load a mesh from a file with automatic format detection.
///
/// The format is determined by the file extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| MeshError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    match format {
        Format::Gltf | Format::Glb => gltf::load(path),
    }
}
