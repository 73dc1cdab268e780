//! Built-in test polyhedra.
//!
//! Small hard-coded triangle meshes for demos and tests, so the pipeline
//! can run without any input file. All shapes are closed, consistently
//! wound (counter-clockwise seen from outside), and already free of
//! duplicate vertices — welding them is a no-op.

use nalgebra::Point3;

use crate::mesh::TriangleMesh;

/// A tetrahedron: 4 vertices, 4 triangular faces, 6 edges.
pub fn tetrahedron() -> TriangleMesh {
    let positions = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.5, 1.0, 0.0),
        Point3::new(0.5, 0.5, 1.0),
    ];

    let indices = vec![
        [0, 2, 1], // bottom
        [0, 1, 3], // front
        [1, 2, 3], // right
        [2, 0, 3], // left
    ];

    TriangleMesh {
        positions,
        normals: None,
        indices,
    }
}

/// An octahedron: 6 vertices, 8 triangular faces, 12 edges.
pub fn octahedron() -> TriangleMesh {
    let positions = vec![
        Point3::new(1.0, 0.0, 0.0),  // 0
        Point3::new(-1.0, 0.0, 0.0), // 1
        Point3::new(0.0, 1.0, 0.0),  // 2
        Point3::new(0.0, -1.0, 0.0), // 3
        Point3::new(0.0, 0.0, 1.0),  // 4
        Point3::new(0.0, 0.0, -1.0), // 5
    ];

    let indices = vec![
        // Upper pyramid around +z.
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        // Lower pyramid around -z.
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];

    TriangleMesh {
        positions,
        normals: None,
        indices,
    }
}

/// A unit cube: 8 vertices, 12 triangular faces (2 per side), 18 edges.
pub fn cube() -> TriangleMesh {
    let positions = vec![
        Point3::new(-1.0, -1.0, -1.0), // 0
        Point3::new(1.0, -1.0, -1.0),  // 1
        Point3::new(1.0, 1.0, -1.0),   // 2
        Point3::new(-1.0, 1.0, -1.0),  // 3
        Point3::new(-1.0, -1.0, 1.0),  // 4
        Point3::new(1.0, -1.0, 1.0),   // 5
        Point3::new(1.0, 1.0, 1.0),    // 6
        Point3::new(-1.0, 1.0, 1.0),   // 7
    ];

    let indices = vec![
        [1, 2, 6],
        [1, 6, 5], // +x
        [0, 4, 7],
        [0, 7, 3], // -x
        [2, 3, 7],
        [2, 7, 6], // +y
        [0, 1, 5],
        [0, 5, 4], // -y
        [4, 5, 6],
        [4, 6, 7], // +z
        [0, 3, 2],
        [0, 2, 1], // -z
    ];

    TriangleMesh {
        positions,
        normals: None,
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Topology;
    use crate::mesh::{triangles_to_quads, weld_vertices, WeldOptions};

    #[test]
    fn test_shapes_are_already_welded() {
        for mesh in [tetrahedron(), octahedron(), cube()] {
            let welded = weld_vertices(&mesh, &WeldOptions::default()).unwrap();
            assert_eq!(welded.vertex_count(), mesh.vertex_count());
        }
    }

    #[test]
    fn test_shapes_are_closed() {
        for mesh in [tetrahedron(), octahedron(), cube()] {
            let quads = triangles_to_quads(&mesh).unwrap();
            let topo = Topology::build(quads.vertex_count(), &quads.faces).unwrap();
            assert_eq!(topo.boundary_edge_count(), 0);
        }
    }

    #[test]
    fn test_octahedron_counts() {
        let mesh = octahedron();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 8);
    }
}
