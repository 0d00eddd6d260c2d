//! Command-line interface definitions for Ace Scraper.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the Ace Scraper application.
///
/// # Examples
///
/// ```sh
/// # Scrape the sites in ./config.yaml and print the listing to stdout
/// ace_scraper
///
/// # Explicit config, listing written to ./json/streams.json
/// ace_scraper -c /etc/ace_scraper/config.yaml -j ./json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the YAML configuration file (created with defaults if missing)
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Output directory for the JSON stream listing; printed to stdout when omitted
    #[arg(short, long, env = "ACE_SCRAPER_JSON_DIR")]
    pub json_output_dir: Option<String>,
}
