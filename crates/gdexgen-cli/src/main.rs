//! gdexgen CLI - GDExtension interface header generator
//!
//! Reads a JSON schema describing the GDExtension ABI and writes the
//! canonical `gdextension_interface.h`. The output file is published
//! atomically: on any failure the previous file (if any) is left
//! untouched.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod publish;

#[derive(Parser)]
#[command(name = "gdexgen")]
#[command(author, version, about = "Generate the GDExtension interface C header from a JSON schema", long_about = None)]
struct Cli {
    /// Path to the interface schema JSON file
    schema: PathBuf,

    /// Output path for the generated header
    #[arg(short, long, default_value = gdexgen_core::HEADER_FILE_NAME)]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let bytes = fs::read(&cli.schema)
        .with_context(|| format!("Failed to read schema file: {}", cli.schema.display()))?;

    let header = gdexgen_core::generate_from_slice(&bytes)
        .with_context(|| format!("Failed to generate header from {}", cli.schema.display()))?;

    publish::publish(&cli.output, &header)?;

    println!("Generated header: {}", cli.output.display());

    Ok(())
}
