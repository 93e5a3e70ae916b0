//! Zonewise analyzer
//!
//! Usage: analyze <ticker> <snapshot.json>
//!
//! Reads a price/metadata snapshot exported by the data-fetch client and
//! prints the accumulation report as JSON on stdout.

use dotenvy::dotenv;
use std::env;
use std::process::ExitCode;
use tracing::{error, info};
use zonewise::analysis::Analyzer;
use zonewise::logging;
use zonewise::services::{run_analysis, SnapshotFile};

fn main() -> ExitCode {
    // Load environment variables from .env if present
    dotenv().ok();
    logging::init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Analysis failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let ticker = args.next().unwrap_or_default();
    let snapshot_path = args
        .next()
        .ok_or("usage: analyze <ticker> <snapshot.json>")?;

    let env = zonewise::config::get_environment();
    info!(environment = %env, snapshot = %snapshot_path, "Starting analysis");

    let snapshot = SnapshotFile::load(&snapshot_path)?;
    let report = run_analysis(&ticker, &snapshot, &snapshot, &Analyzer::new())?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
