//! MeSH descriptor conversion binary.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mesh_convert::convert_file;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Convert a gzip-compressed MeSH descriptor XML export to
/// newline-delimited JSON, one record per line.
#[derive(Parser)]
#[command(name = "mesh2json")]
struct Cli {
    /// Path to the gzip-compressed descriptor XML export.
    input: PathBuf,
    /// Path to the newline-delimited JSON output file.
    output: PathBuf,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    tracing::info!(
        "Converting {} to {}",
        cli.input.display(),
        cli.output.display()
    );

    match convert_file(&cli.input, &cli.output) {
        Ok(stats) => {
            tracing::info!(
                "Wrote {} descriptor records in {} ms",
                stats.records,
                stats.elapsed_ms
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
