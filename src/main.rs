use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use obj_parser::{ObjDeserializer, ObjDocument, ParseOptions, VertexReferenceMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parses a Wavefront OBJ file and prints what was read.
#[derive(Parser)]
#[command(version)]
struct Args {
    path: PathBuf,

    /// Also accept `v` and `v/vt` vertex references in faces
    #[arg(long)]
    lenient: bool,

    /// Also print the statements that were skipped
    #[arg(long)]
    report: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mode = if args.lenient {
        VertexReferenceMode::Lenient
    } else {
        VertexReferenceMode::Strict
    };
    let options = ParseOptions::default()
        .with_vertex_reference_mode(mode)
        .with_diagnostics(args.report);

    let deserialized = ObjDeserializer::new(options)
        .deserialize(&args.path)
        .with_context(|| format!("Failed to deserialize {}", args.path.display()))?;
    info!(
        path = %args.path.display(),
        skipped = deserialized.skipped.len(),
        "deserialized"
    );

    print_document(&deserialized.document);

    if args.report {
        println!("\nskipped statements:");
        for skipped in &deserialized.skipped {
            println!("{}: \"{}\" ({})", skipped.line, skipped.content, skipped.reason);
        }
    }
    Ok(())
}

fn print_document(document: &ObjDocument) {
    println!("name:\n{}", document.name().unwrap_or_default());

    println!("\npositions:");
    for position in document.positions() {
        println!("{} {} {}", position.x, position.y, position.z);
    }

    println!("\ntexture coordinates:");
    for coordinate in document.texture_coordinates() {
        println!("{} {}", coordinate.u, coordinate.v);
    }

    println!("\nnormals:");
    for normal in document.normals() {
        println!("{} {} {}", normal.i, normal.j, normal.k);
    }

    println!("\nfaces:");
    for face in document.faces() {
        let [a, b, c] = face.vertices().map(|vertex| {
            format!("{}/{}/{}", vertex.position, vertex.texture, vertex.normal)
        });
        println!("{a} {b} {c}");
    }
}
