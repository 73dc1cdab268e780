//! Benchmarks for topology construction and subdivision.

use criterion::{criterion_group, criterion_main, Criterion};

use crease::algo::subdivide::{subdivide, subdivide_levels, SubdivideOptions, SubdivisionLevel};
use crease::mesh::{octahedron, Topology, WeldOptions};

fn octahedron_level(levels: usize) -> SubdivisionLevel {
    let level = SubdivisionLevel::from_triangles(&octahedron(), &WeldOptions::default()).unwrap();
    subdivide_levels(level, &SubdivideOptions::new(levels)).unwrap()
}

fn bench_topology_build(c: &mut Criterion) {
    // 384 quads after two refinement steps.
    let level = octahedron_level(2);

    c.bench_function("topology_build_level2", |b| {
        b.iter(|| Topology::build(level.vertex_count(), &level.faces).unwrap());
    });
}

fn bench_subdivide_step(c: &mut Criterion) {
    let level = octahedron_level(2);

    c.bench_function("subdivide_step_level2", |b| {
        b.iter(|| subdivide(&level, &SubdivideOptions::default()).unwrap());
    });

    c.bench_function("subdivide_step_level2_sequential", |b| {
        b.iter(|| subdivide(&level, &SubdivideOptions::default().sequential()).unwrap());
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    c.bench_function("octahedron_4_levels", |b| {
        b.iter(|| octahedron_level(4));
    });
}

criterion_group!(
    benches,
    bench_topology_build,
    bench_subdivide_step,
    bench_full_pipeline
);
criterion_main!(benches);
