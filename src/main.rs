//! timeline2gpx - convert a location-history export to GPX
//!
//! Reads the `semanticSegments` of a timeline JSON export, enriches visits and
//! path points with Google elevation and place data, and prints a GPX 1.0
//! document to standard output. Logs go to standard error.
//!
//! Module structure:
//! - `domain/` - Export document, segment classification, output records
//! - `io/` - External interfaces (Google APIs, GPX writer)
//! - `services/` - Enrichment, extraction, bounds, conversion driver
//! - `infra/` - Configuration

use clap::Parser;
use std::io::{stdout, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use timeline2gpx::infra::config::{Config, API_KEY_VAR};
use timeline2gpx::io::GoogleMapsClient;
use timeline2gpx::services::convert_file;
use tracing::{error, info, warn};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Convert a location-history timeline export into a GPX file
#[derive(Parser, Debug)]
#[command(name = "timeline2gpx", version, about)]
struct Args {
    /// Path to the timeline JSON export
    #[arg(long)]
    json: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Structured logging on stderr, level via RUST_LOG (default: info)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::from_env();
    if !config.has_api_key() {
        warn!(var = API_KEY_VAR, "api_key_missing");
    }
    info!(input = %args.json.display(), config = ?config, "timeline2gpx starting");

    let client = match GoogleMapsClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "http_client_init_failed");
            return ExitCode::FAILURE;
        }
    };

    let sink = BufWriter::new(stdout());
    match convert_file(&args.json, &client, &client, sink).await {
        Ok(summary) => {
            summary.log();
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "conversion_failed");
            ExitCode::FAILURE
        }
    }
}
