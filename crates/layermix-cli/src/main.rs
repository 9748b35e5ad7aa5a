//! layermix - blend-mode image compositing CLI
//!
//! Blends two images with any mode from the catalog, optionally faded,
//! masked, or with channel promotion disabled.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "layermix")]
#[command(author, version, about = "Blend-mode image compositing")]
#[command(long_about = "
Blends two images with a blend mode from the catalog.

Examples:
  layermix blend base.png top.png -o out.png -m multiply
  layermix blend base.png top.png -o out.png -m screen --fade 0.5
  layermix blend base.png top.png -o out.png -m overlay --mask matte.png
  layermix modes                        # List the catalog
  layermix demo -o samples/             # One sample image per mode
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Blend two images
    #[command(visible_alias = "b")]
    Blend(BlendArgs),

    /// List the blend-mode catalog
    Modes,

    /// Write one sample blend per mode from generated gradients
    Demo(DemoArgs),
}

#[derive(Args)]
struct BlendArgs {
    /// Base image (the bottom layer)
    base: PathBuf,

    /// Blend image (the top layer)
    blend: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Blend mode to apply
    #[arg(short, long, default_value = "multiply")]
    mode: String,

    /// How much the blend affects the output (0.0 to 1.0)
    #[arg(short, long)]
    fade: Option<f32>,

    /// Grayscale image used as a per-pixel effect mask
    #[arg(long)]
    mask: Option<PathBuf>,

    /// Do not promote grayscale operands to three channels
    #[arg(long)]
    no_colorize: bool,
}

#[derive(Args)]
struct DemoArgs {
    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Edge length of the generated gradients
    #[arg(short, long, default_value = "256")]
    size: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Blend(args) => commands::blend::run(args, cli.verbose),
        Commands::Modes => commands::modes::run(),
        Commands::Demo(args) => commands::demo::run(args, cli.verbose),
    }
}
