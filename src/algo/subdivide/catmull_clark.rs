//! The Catmull-Clark refinement step.

use nalgebra::{Point3, Vector3};
use rayon::prelude::*;

use crate::error::Result;
use crate::mesh::{Topology, NO_FACE};

use super::{SubdivideOptions, SubdivisionLevel};

/// Apply one level of Catmull-Clark subdivision.
///
/// Produces a strictly new level with four times the face count. The input
/// level is only read; it stays valid for anything still referencing it
/// (e.g. buffers uploaded for the currently displayed frame).
///
/// # Algorithm
///
/// 1. **Face points**: one per face, the mean of its 4 corners.
/// 2. **Edge points**: one per edge. Creased (sharpness > 0) and boundary
///    edges use the plain midpoint; smooth interior edges average the
///    midpoint with the mean of the two incident face points.
/// 3. **Vertex points**: one per original vertex, chosen by the number of
///    sharp incident edges:
///    - 3 or more: corner, position pinned;
///    - exactly 2: crease, `(n0 + 6S + n1) / 8` with `n0`/`n1` the far
///      endpoints of the two sharp edges;
///    - 0 or 1 (smooth or dart): `(Q + 2R + (n-3)S) / n` with `Q` the mean
///      incident face point, `R` the mean incident edge *midpoint*, and `n`
///      the incident face count.
/// 4. Each old face `(v0, v1, v2, v3)` becomes four quads around its face
///    point, with matching winding.
/// 5. Child edges inherit `max(parent - 1, 0)` sharpness when they join an
///    original vertex to the parent's edge point; edges radiating from a
///    face point carry no crease and stay smooth.
/// 6. The adjacency tables are rebuilt from scratch for the new face list.
///
/// New vertices are laid out as updated originals `0..V`, then face points
/// `V..V+F`, then edge points `V+F..V+F+E`.
///
/// Degenerate (zero-area) faces are not detected; their face points and
/// averages are computed as-is.
///
/// When `options.parallel` is set, face points, edge points and vertex
/// points are computed with rayon. Each of those passes only reads the
/// previous level and writes disjoint slots, and no pass starts before the
/// prior one has finished.
///
/// # Example
/// ```
/// use crease::algo::subdivide::{subdivide, SubdivideOptions, SubdivisionLevel};
/// use crease::mesh::{octahedron, WeldOptions};
///
/// let level = SubdivisionLevel::from_triangles(&octahedron(), &WeldOptions::default()).unwrap();
/// let next = subdivide(&level, &SubdivideOptions::default()).unwrap();
///
/// assert_eq!(next.face_count(), 4 * level.face_count());
/// assert_eq!(
///     next.vertex_count(),
///     level.vertex_count() + level.face_count() + level.edge_count()
/// );
/// ```
pub fn subdivide(level: &SubdivisionLevel, options: &SubdivideOptions) -> Result<SubdivisionLevel> {
    let positions = &level.positions;
    let faces = &level.faces;
    let topology = &level.topology;
    let sharpness = &level.sharpness;

    let vertex_count = positions.len();
    let face_count = faces.len();
    let edge_count = topology.edge_count();

    // Step 1: face points.
    let face_point = |face: &[u32; 4]| -> Point3<f32> {
        let sum: Vector3<f32> = face.iter().map(|&v| positions[v as usize].coords).sum();
        Point3::from(sum / 4.0)
    };
    let face_points: Vec<Point3<f32>> = if options.parallel {
        faces.par_iter().map(face_point).collect()
    } else {
        faces.iter().map(face_point).collect()
    };

    // Step 2: edge points.
    let edge_point = |e: usize| -> Point3<f32> {
        let [u, v] = topology.edges[e];
        let mid = (positions[u as usize].coords + positions[v as usize].coords) * 0.5;
        let [f0, f1] = topology.edge_faces[e];

        if sharpness[e] > 0 || f1 == NO_FACE {
            // Creased or boundary: the crease must not be pulled toward the
            // face interiors.
            Point3::from(mid)
        } else {
            let face_mean =
                (face_points[f0 as usize].coords + face_points[f1 as usize].coords) * 0.5;
            Point3::from((mid + face_mean) * 0.5)
        }
    };
    let edge_points: Vec<Point3<f32>> = if options.parallel {
        (0..edge_count).into_par_iter().map(edge_point).collect()
    } else {
        (0..edge_count).map(edge_point).collect()
    };

    // Step 3: updated original vertices.
    let vertex_point = |v: usize| -> Point3<f32> {
        let s = positions[v];
        let (sharp_count, sharp_neighbors) = classify_sharp(v as u32, topology, sharpness);

        if sharp_count >= 3 {
            // Corner: pinned in place.
            return s;
        }
        if sharp_count == 2 {
            let n0 = positions[sharp_neighbors[0] as usize].coords;
            let n1 = positions[sharp_neighbors[1] as usize].coords;
            return Point3::from((n0 + s.coords * 6.0 + n1) / 8.0);
        }

        let incident_faces = topology.vertex_faces(v as u32);
        let n = incident_faces.len();
        if n == 0 {
            return s;
        }

        let q = incident_faces
            .iter()
            .map(|&f| face_points[f as usize].coords)
            .sum::<Vector3<f32>>()
            / n as f32;

        let incident_edges = topology.vertex_edges(v as u32);
        let r = incident_edges
            .iter()
            .map(|&e| {
                let [a, b] = topology.edges[e as usize];
                (positions[a as usize].coords + positions[b as usize].coords) * 0.5
            })
            .sum::<Vector3<f32>>()
            / incident_edges.len() as f32;

        let nf = n as f32;
        Point3::from((q + r * 2.0 + s.coords * (nf - 3.0)) / nf)
    };
    let updated: Vec<Point3<f32>> = if options.parallel {
        (0..vertex_count).into_par_iter().map(vertex_point).collect()
    } else {
        (0..vertex_count).map(vertex_point).collect()
    };

    // Step 4: assemble the new vertex array and the four child quads per
    // face. Face points follow the updated originals, edge points follow
    // the face points.
    let mut new_positions = updated;
    new_positions.extend_from_slice(&face_points);
    new_positions.extend_from_slice(&edge_points);

    let face_base = vertex_count as u32;
    let edge_base = (vertex_count + face_count) as u32;

    let mut new_faces = Vec::with_capacity(face_count * 4);
    for (fi, face) in faces.iter().enumerate() {
        // Edge ids in winding order: (v0,v1), (v1,v2), (v2,v3), (v3,v0).
        let fe = topology.face_edges[fi];
        let f = face_base + fi as u32;
        let e01 = edge_base + fe[0];
        let e12 = edge_base + fe[1];
        let e23 = edge_base + fe[2];
        let e30 = edge_base + fe[3];

        new_faces.push([face[0], e01, f, e30]);
        new_faces.push([face[1], e12, f, e01]);
        new_faces.push([face[2], e23, f, e12]);
        new_faces.push([face[3], e30, f, e23]);
    }

    // Step 6 runs before step 5: child sharpness is defined per edge of the
    // rebuilt tables.
    let new_topology = Topology::build(new_positions.len(), &new_faces)?;

    // Step 5: sharpness propagation. Every new edge either joins an
    // original vertex to its parent's edge point (a crease child) or joins
    // a face point to an edge point (no parent, always smooth).
    let new_sharpness: Vec<u32> = new_topology
        .edges
        .iter()
        .map(|&[a, b]| {
            if a < face_base && b >= edge_base {
                let parent = (b - edge_base) as usize;
                sharpness[parent].saturating_sub(1)
            } else {
                0
            }
        })
        .collect();

    Ok(SubdivisionLevel {
        positions: new_positions,
        faces: new_faces,
        topology: new_topology,
        sharpness: new_sharpness,
    })
}

/// Apply `options.levels` subdivision steps in sequence.
///
/// Levels are strictly sequential: each step's output sizes determine the
/// next step's input, so only the work inside a step is ever parallelized.
pub fn subdivide_levels(
    level: SubdivisionLevel,
    options: &SubdivideOptions,
) -> Result<SubdivisionLevel> {
    let mut current = level;
    for _ in 0..options.levels {
        current = subdivide(&current, options)?;
    }
    Ok(current)
}

/// Count the sharp edges incident to a vertex, capturing the far endpoints
/// of the first two for the crease rule.
///
/// With three or more sharp edges the corner rule applies and the neighbor
/// slots are meaningless; callers must check the count before reading them.
fn classify_sharp(v: u32, topology: &Topology, sharpness: &[u32]) -> (usize, [u32; 2]) {
    let mut count = 0;
    let mut neighbors = [0u32; 2];

    for &e in topology.vertex_edges(v) {
        if sharpness[e as usize] > 0 {
            if count < 2 {
                let [a, b] = topology.edges[e as usize];
                neighbors[count] = if a == v { b } else { a };
            }
            count += 1;
        }
    }

    (count, neighbors)
}
