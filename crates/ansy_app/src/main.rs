//! ansy - align and truncate sensor recordings from the command line.
//!
//! Thin wrapper around `ansy_core::pipeline::run`: resolves paths from
//! arguments and optional settings, then runs one alignment pass.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use ansy_core::config::Settings;
use ansy_core::logging;
use ansy_core::pipeline;

#[derive(Parser, Debug)]
#[command(
    name = "ansy",
    version,
    about = "Align independently clocked sensor recordings onto a common timeline"
)]
struct Cli {
    /// Directory containing the CSV recordings to align.
    data_dir: PathBuf,

    /// Manual-sync file (one `filename,timestamp` per line). Defaults to
    /// the configured sync filename inside the data directory.
    #[arg(short, long)]
    sync_file: Option<PathBuf>,

    /// Output directory for the aligned recordings.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_or_default(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    logging::init_tracing(&settings.logging.level);

    let sync_file = cli
        .sync_file
        .unwrap_or_else(|| cli.data_dir.join(&settings.paths.sync_file));
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&settings.paths.output_folder));

    let report = pipeline::run(&cli.data_dir, &output, &sync_file, settings.align.grid_ms)?;

    println!(
        "Aligned {} recordings (base '{}'), window [{} .. {}]",
        report.entries.len(),
        report.base,
        report.window_start,
        report.window_end
    );
    Ok(())
}
