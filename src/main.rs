// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "depthsense")]
#[command(about = "Proximity feedback and false-color visualization for depth frames")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the averaged center distance and feedback tier for a depth dump
    Analyze {
        /// Input depth dump (raw little-endian f32, or 16-bit grayscale PNG
        /// in millimeters)
        input: PathBuf,

        /// Frame width in pixels (required for raw dumps)
        #[arg(short = 'W', long)]
        width: Option<u32>,

        /// Frame height in pixels (required for raw dumps)
        #[arg(short = 'H', long)]
        height: Option<u32>,

        /// Row stride in bytes (raw dumps; default: width * 4)
        #[arg(long)]
        stride: Option<usize>,
    },

    /// Render a depth dump to a false-color PNG
    Colorize {
        /// Input depth dump
        input: PathBuf,

        /// Output file path (default: depth_TIMESTAMP.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Frame width in pixels (required for raw dumps)
        #[arg(short = 'W', long)]
        width: Option<u32>,

        /// Frame height in pixels (required for raw dumps)
        #[arg(short = 'H', long)]
        height: Option<u32>,

        /// Row stride in bytes (raw dumps; default: width * 4)
        #[arg(long)]
        stride: Option<usize>,

        /// Grayscale instead of the color gradient
        #[arg(long)]
        grayscale: bool,

        /// Quantize the gradient into discrete bands
        #[arg(long)]
        quantize: bool,
    },

    /// Replay a directory of depth dumps through the live feedback loop
    Stream {
        /// Directory of depth dumps (replayed in filename order)
        dir: PathBuf,

        /// Replay rate in frames per second
        #[arg(long, default_value = "10")]
        fps: u32,

        /// Frame width in pixels (required for raw dumps)
        #[arg(short = 'W', long)]
        width: Option<u32>,

        /// Frame height in pixels (required for raw dumps)
        #[arg(short = 'H', long)]
        height: Option<u32>,

        /// Row stride in bytes (raw dumps; default: width * 4)
        #[arg(long)]
        stride: Option<usize>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=depthsense=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            width,
            height,
            stride,
        } => cli::analyze(input, width, height, stride),
        Commands::Colorize {
            input,
            output,
            width,
            height,
            stride,
            grayscale,
            quantize,
        } => cli::colorize(input, output, width, height, stride, grayscale, quantize),
        Commands::Stream {
            dir,
            fps,
            width,
            height,
            stride,
        } => cli::stream(dir, fps, width, height, stride),
    }
}
