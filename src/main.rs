// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "preset-gen")]
#[command(about = "Exposure preset table generator for camera applications")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the preset tables (default when no command is given)
    Generate {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also emit the ND filter table
        #[arg(long)]
        nd_filters: bool,
    },

    /// Validate the built-in tables (ordering, labels, entry counts)
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=preset_gen=debug, RUST_LOG=info
    // Logs go to stderr; stdout carries the generated tables
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => cli::generate(None, false),
        Some(Commands::Generate { output, nd_filters }) => cli::generate(output, nd_filters),
        Some(Commands::Check) => cli::check(),
    }
}
