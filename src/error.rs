//! Error types for crease.
//!
//! This module defines all error types used throughout the library.
//!
//! Input errors (a file that cannot be loaded, an unsupported format) are
//! ordinary recoverable failures. Topology errors (`InvalidVertexIndex`,
//! `DegenerateFace`, `NonManifoldEdge`) indicate broken input data or a
//! programming error; construction aborts before any partially-built mesh
//! state can escape, because downstream GPU buffers would be sized and
//! interpreted incorrectly.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh operations.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references a vertex index outside the vertex array.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has duplicate vertex indices.
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// An edge has more than two incident faces.
    #[error("edge ({v0}, {v1}) has more than two incident faces")]
    NonManifoldEdge {
        /// First vertex of the edge.
        v0: u32,
        /// Second vertex of the edge.
        v1: u32,
    },

    /// No edge connects the given pair of vertices.
    #[error("no edge connects vertices {v0} and {v1}")]
    NoSuchEdge {
        /// First vertex of the requested edge.
        v0: u32,
        /// Second vertex of the requested edge.
        v1: u32,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading mesh from file.
    #[error("failed to load mesh from {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },
}
