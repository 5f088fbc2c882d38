//! `meshaug`: apply preprocessing and augmentation operations to OFF meshes.
//!
//! # Commands
//!
//! - `meshaug apply <OPERATION> <PATH>` - Transform a mesh and print the output path
//! - `meshaug list` - List the supported operations by category
//! - `meshaug inspect <PATH>` - Print counts, extent and centroid of a mesh
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Mesh preprocessing and augmentation
#[derive(Parser, Debug)]
#[command(name = "meshaug", version)]
#[command(about = "Mesh preprocessing and augmentation", long_about = None)]
struct Cli {
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply an operation and write `<prefix>_<name>` next to the input
    Apply {
        /// Operation name, e.g. "Centering" or "Adding Noise"
        operation: String,

        /// Input OFF file
        path: PathBuf,

        /// Seed for reproducible random operations
        #[arg(long)]
        seed: Option<u64>,

        /// Noise standard deviation as a fraction of the mesh extent
        #[arg(long, default_value_t = mesh_transform::DEFAULT_NOISE_FRACTION)]
        noise_fraction: f64,

        /// Rewrite the output path to a URL under this prefix
        #[arg(long, value_name = "PREFIX")]
        public_prefix: Option<String>,
    },

    /// List supported operations
    List,

    /// Print a summary of an OFF file
    Inspect {
        /// Input OFF file
        path: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(command = ?cli.command, json = cli.json, "Starting command");

    match cli.command {
        Commands::Apply {
            operation,
            path,
            seed,
            noise_fraction,
            public_prefix,
        } => commands::apply(
            &operation,
            &path,
            seed,
            noise_fraction,
            public_prefix.as_deref(),
            cli.json,
        ),
        Commands::List => commands::list(cli.json).map(|()| ExitCode::SUCCESS),
        Commands::Inspect { path } => {
            commands::inspect(&path, cli.json).map(|()| ExitCode::SUCCESS)
        }
    }
}
