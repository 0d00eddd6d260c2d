//! # Ace Scraper
//!
//! Discovers AceStream links on third-party listing pages and resolves a
//! best-guess human-readable title for each one, producing a JSON listing a
//! web player can offer to users.
//!
//! ## Usage
//!
//! ```sh
//! ace_scraper -c config.yaml -j ./json
//! ```
//!
//! ## Architecture
//!
//! One run is a pipeline:
//! 1. **Fetch**: download each configured site's listing page
//! 2. **Scan**: find every `acestream://` link in the parsed document
//! 3. **Resolve**: gather title candidates around each link, reject
//!    boilerplate, filter, and consolidate to one title per stream
//! 4. **Output**: write the listing as JSON (file or stdout)
//!
//! Sites are independent: one site failing to fetch or parse never affects
//! the others, it is simply absent from the output.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod engine;
mod models;
mod outputs;
mod scrape;

use cli::Cli;
use models::StreamReport;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("ace_scraper starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.config, ?args.json_output_dir, "Parsed CLI arguments");

    let config = config::load_config(Path::new(&args.config))?;

    // ---- Scrape all configured sites ----
    let sites = scrape::scrape_sites(&config.sites).await;

    let report = StreamReport {
        local_date: Local::now().date_naive().to_string(),
        local_time: Local::now().time().to_string(),
        sites,
    };

    let total_streams: usize = report.sites.iter().map(|s| s.streams.len()).sum();
    info!(
        sites = report.sites.len(),
        configured = config.sites.len(),
        streams = total_streams,
        "Scrape pass complete"
    );

    // ---- Output ----
    match &args.json_output_dir {
        Some(dir) => outputs::json::write_report(&report, dir).await?,
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
