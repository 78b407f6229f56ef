mod batch;
mod cli;

use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use cli::Cli;
use pdflayout_core::ExtractConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    let result = if cli.path.is_dir() {
        run_batch(&cli.path, &config)
    } else {
        run_single(&cli.path, &config)
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}

/// Diagnostics go to stderr; stdout carries records and written paths.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_single(path: &Path, config: &ExtractConfig) -> Result<(), i32> {
    if !path.exists() {
        eprintln!("Error: file not found: {}", path.display());
        return Err(1);
    }
    let (out, summary) = batch::render(path, config).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    tracing::debug!(
        pages = summary.pages,
        records = summary.records,
        warnings = summary.warnings.len(),
        "done"
    );
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&out)
        .and_then(|()| stdout.flush())
        .map_err(|e| {
            eprintln!("Error: failed to write output: {e}");
            1
        })
}

fn run_batch(dir: &Path, config: &ExtractConfig) -> Result<(), i32> {
    let report = batch::run_directory(dir, config, |written| {
        println!("{}", written.display());
    })
    .map_err(|e| {
        eprintln!("Error: failed to read directory {}: {e}", dir.display());
        1
    })?;

    for (path, reason) in &report.failed {
        eprintln!("Error: {}: {reason}", path.display());
    }
    eprintln!("{report}");
    if report.is_success() { Ok(()) } else { Err(2) }
}
