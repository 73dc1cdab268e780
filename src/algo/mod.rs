//! Mesh processing algorithms.
//!
//! Currently this hosts the Catmull-Clark subdivision pipeline:
//!
//! - **Subdivision**: crease-aware Catmull-Clark refinement over
//!   [`SubdivisionLevel`](subdivide::SubdivisionLevel) snapshots
//!
//! Further algorithms are added as the library develops.

pub mod subdivide;
