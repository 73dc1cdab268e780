//! Crease CLI - subdivision surface command-line tool.
//!
//! Usage: crease <COMMAND> [OPTIONS]
//!
//! Run `crease --help` for available commands.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};

use crease::algo::subdivide::{subdivide, SubdivideOptions, SubdivisionLevel};
use crease::export::LevelBuffers;
use crease::io;
use crease::mesh::{cube, octahedron, tetrahedron, weld_vertices, TriangleMesh, WeldOptions};

#[derive(Parser)]
#[command(name = "crease")]
#[command(author, version, about = "Catmull-Clark subdivision surface tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display control mesh information
    Info {
        /// Input mesh file (glTF/GLB)
        #[arg(conflicts_with = "shape", required_unless_present = "shape")]
        input: Option<PathBuf>,

        /// Use a built-in shape instead of a file
        #[arg(long, value_enum)]
        shape: Option<Shape>,

        /// Vertex welding tolerance
        #[arg(long, default_value = "1e-5")]
        epsilon: f32,
    },

    /// Subdivide a mesh and report per-level statistics
    Subdivide {
        /// Input mesh file (glTF/GLB)
        #[arg(conflicts_with = "shape", required_unless_present = "shape")]
        input: Option<PathBuf>,

        /// Use a built-in shape instead of a file
        #[arg(long, value_enum)]
        shape: Option<Shape>,

        /// Number of subdivision levels
        #[arg(short, long, default_value = "1")]
        levels: usize,

        /// Vertex welding tolerance
        #[arg(long, default_value = "1e-5")]
        epsilon: f32,

        /// Tag a crease: vertex pair and sharpness (repeatable)
        #[arg(long, num_args = 3)]
        crease: Vec<u32>,

        /// Use single-threaded execution (for benchmarking)
        #[arg(long)]
        sequential: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Shape {
    /// Tetrahedron (4 vertices, 4 faces)
    Tetrahedron,
    /// Octahedron (6 vertices, 8 faces)
    Octahedron,
    /// Cube (8 vertices, 12 triangles)
    Cube,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info {
            input,
            shape,
            epsilon,
        } => cmd_info(input.as_deref(), shape, epsilon)?,

        Commands::Subdivide {
            input,
            shape,
            levels,
            epsilon,
            crease,
            sequential,
        } => cmd_subdivide(input.as_deref(), shape, levels, epsilon, &crease, sequential)?,
    }

    Ok(())
}

/// Load the requested mesh from a file or a built-in shape.
fn load_mesh(
    input: Option<&std::path::Path>,
    shape: Option<Shape>,
) -> Result<TriangleMesh, Box<dyn std::error::Error>> {
    match (shape, input) {
        (Some(Shape::Tetrahedron), _) => Ok(tetrahedron()),
        (Some(Shape::Octahedron), _) => Ok(octahedron()),
        (Some(Shape::Cube), _) => Ok(cube()),
        (None, Some(path)) => Ok(io::load(path)?),
        (None, None) => Err("provide an input file or --shape".into()),
    }
}

fn cmd_info(
    input: Option<&std::path::Path>,
    shape: Option<Shape>,
    epsilon: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = load_mesh(input, shape)?;

    println!("Vertices: {}", mesh.vertex_count());
    println!("Triangles: {}", mesh.triangle_count());
    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }

    let welded = weld_vertices(&mesh, &WeldOptions::default().with_epsilon(epsilon))?;
    let merged = mesh.vertex_count() - welded.vertex_count();
    if merged > 0 {
        println!("Welded: {} duplicate vertices merged", merged);
    } else {
        println!("Welded: no duplicates");
    }

    let level = SubdivisionLevel::from_triangles(&mesh, &WeldOptions::default().with_epsilon(epsilon))?;
    println!("Control mesh: {} vertices, {} quads, {} edges",
        level.vertex_count(), level.face_count(), level.edge_count());

    let boundary = level.topology.boundary_edge_count();
    if boundary == 0 {
        println!("Topology: Closed (no boundary)");
    } else {
        println!("Topology: Open ({} boundary edges)", boundary);
    }

    Ok(())
}

fn cmd_subdivide(
    input: Option<&std::path::Path>,
    shape: Option<Shape>,
    levels: usize,
    epsilon: f32,
    crease: &[u32],
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = load_mesh(input, shape)?;
    println!(
        "Loaded: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    let mut level =
        SubdivisionLevel::from_triangles(&mesh, &WeldOptions::default().with_epsilon(epsilon))?;
    println!(
        "Level 0: {} vertices, {} quads, {} edges",
        level.vertex_count(),
        level.face_count(),
        level.edge_count()
    );

    for tag in crease.chunks_exact(3) {
        level.set_crease(tag[0], tag[1], tag[2])?;
        println!("Creased edge ({}, {}) with sharpness {}", tag[0], tag[1], tag[2]);
    }

    let options = SubdivideOptions::default().with_parallel(!sequential);
    let start = Instant::now();
    for i in 1..=levels {
        level = subdivide(&level, &options)?;
        println!(
            "Level {}: {} vertices, {} quads, {} edges",
            i,
            level.vertex_count(),
            level.face_count(),
            level.edge_count()
        );
    }
    let elapsed = start.elapsed();
    println!("Subdivided {} levels in {:.2?}", levels, elapsed);

    let buffers = LevelBuffers::from_level(&level);
    println!(
        "Export: {} bytes total ({} control points at stride {})",
        buffers.total_bytes(),
        buffers.control_points.len,
        buffers.control_points.stride
    );

    Ok(())
}
