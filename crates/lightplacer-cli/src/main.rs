//! lightplacer-merge -- merge light placer config files into one document.
//!
//! Usage: lightplacer-merge [PATH]...
//!
//! Files are given in priority order: when two files attach lights to the
//! same model, addon node or visual effect, the earlier file wins. The merged
//! document is printed to stdout; logs go to stderr (`RUST_LOG` to adjust).

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lightplacer-merge", version)]
#[command(about = "Merge light placer config files into one deduplicated document")]
struct Cli {
    /// Config files to merge. Earlier files win model/addonNode/visualEffect conflicts.
    paths: Vec<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(paths: &[PathBuf]) -> Result<String> {
    let entries =
        lightplacer_data::load_all(paths).context("failed to load light placer files")?;
    let merged = lightplacer_core::merge(entries);
    lightplacer_core::render(&merged).context("failed to render merged document")
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!(files = cli.paths.len(), "starting merge");

    let document = run(&cli.paths)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{document}")?;
    Ok(())
}
