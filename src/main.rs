//! bigfiles — search a folder recursively for large files.
//!
//! Thin binary entry point. All logic lives in the `bigfiles-core` crate.

use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Search a folder recursively for files equal to or larger than a size.
#[derive(Parser, Debug)]
#[command(name = "bigfiles", version, about)]
struct Cli {
    /// Root folder to search
    folder: PathBuf,

    /// Minimum size: a number in MB, or <number><unit> with unit B, KB, MB or GB
    size: String,

    /// Log scan progress and skipped entries to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let min_size = bigfiles_core::parse_size(&cli.size)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let result = bigfiles_core::search_big_files(&cli.folder, min_size, &mut out);
    out.flush().context("failed to flush stdout")?;

    let summary = result.with_context(|| format!("search of {} failed", cli.folder.display()))?;
    tracing::debug!(?summary, "bigfiles finished");
    Ok(())
}

/// Structured logging goes to stderr; stdout carries the report only.
///
/// `RUST_LOG` wins over `--verbose` when set.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
