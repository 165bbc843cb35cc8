//! chart-deps
//!
//! Main entry point for the chart-deps CLI.

use chart_deps::extract::{self, ExtractOptions, PrefixMode};
use clap::Parser;
use std::path::PathBuf;
use std::process;

/// Print the repository location of every dependency in a chart manifest
#[derive(Parser, Debug)]
#[command(name = "chart-deps")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the dependency manifest (e.g. requirements.yaml)
    manifest: PathBuf,

    /// How the file:// marker is removed
    #[arg(long, value_enum, env = "CHART_DEPS_PREFIX_MODE", default_value_t = PrefixMode::Anchored)]
    prefix_mode: PrefixMode,

    /// Resolve relative local paths against the manifest's directory
    #[arg(long)]
    resolve: bool,
}

fn main() {
    // Initialize logging
    if let Err(e) = chart_deps::logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> chart_deps::Result<()> {
    let mut options = ExtractOptions {
        prefix_mode: cli.prefix_mode,
        base_dir: None,
    };
    if cli.resolve {
        options = options.resolving_against(&cli.manifest);
    }

    tracing::debug!(
        manifest = %cli.manifest.display(),
        prefix_mode = ?options.prefix_mode,
        base_dir = ?options.base_dir,
        "Starting extraction"
    );

    let stdout = std::io::stdout();
    extract::run(&cli.manifest, &options, stdout.lock())?;

    Ok(())
}
