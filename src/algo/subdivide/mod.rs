//! Catmull-Clark subdivision with semi-sharp creases.
//!
//! Catmull-Clark subdivision (Catmull & Clark, 1978) is an approximating
//! scheme for quad meshes. Each step:
//!
//! 1. Creates a face point at each face centroid
//! 2. Creates edge points from edge midpoints and adjacent face points
//! 3. Repositions original vertices by a weighted average of their
//!    neighborhood
//! 4. Connects everything into four new quads per input quad
//!
//! The limit is a C² continuous surface (C¹ at extraordinary vertices).
//!
//! Edges can carry an integer sharpness tag (DeRose, Kass & Truong, 1998):
//! a tagged edge is treated as a hard crease for that many subdivision
//! steps, decaying by one per step, which yields fillet-like semi-sharp
//! features without extra control vertices. Vertices with three or more
//! sharp edges are pinned as corners.
//!
//! State flows through [`SubdivisionLevel`] snapshots; [`subdivide`]
//! consumes one by reference and returns the next, rebuilding all
//! adjacency tables for the new quad list.
//!
//! # Example
//!
//! ```
//! use crease::algo::subdivide::{subdivide_levels, SubdivideOptions, SubdivisionLevel};
//! use crease::mesh::{cube, WeldOptions};
//!
//! let level = SubdivisionLevel::from_triangles(&cube(), &WeldOptions::default()).unwrap();
//! let refined = subdivide_levels(level, &SubdivideOptions::new(2)).unwrap();
//! assert_eq!(refined.face_count(), 36 * 16);
//! ```
//!
//! # References
//!
//! - Catmull, E. & Clark, J. (1978). "Recursively generated B-spline
//!   surfaces on arbitrary topological meshes." Computer-Aided Design,
//!   10(6), 350-355.
//! - DeRose, T., Kass, M. & Truong, T. (1998). "Subdivision surfaces in
//!   character animation." SIGGRAPH '98.

mod catmull_clark;
mod level;

pub use catmull_clark::{subdivide, subdivide_levels};
pub use level::SubdivisionLevel;

/// Options for subdivision.
#[derive(Debug, Clone)]
pub struct SubdivideOptions {
    /// Number of subdivision steps applied by [`subdivide_levels`].
    /// A single [`subdivide`] call always applies exactly one.
    pub levels: usize,

    /// Whether to compute the per-step passes with rayon (default: true).
    pub parallel: bool,
}

impl Default for SubdivideOptions {
    fn default() -> Self {
        Self {
            levels: 1,
            parallel: true,
        }
    }
}

impl SubdivideOptions {
    /// Create options with the specified number of levels.
    pub fn new(levels: usize) -> Self {
        Self {
            levels,
            parallel: true,
        }
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
