//! JSON output generation for the stream listing.
//!
//! Serializes the run's [`StreamReport`] to `streams.json` inside the
//! configured output directory. The file is replaced on every run; the
//! listing always reflects the latest scrape.

use crate::models::StreamReport;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`StreamReport`] to `{json_output_dir}/streams.json`.
///
/// Creates the output directory when necessary.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_report(
    report: &StreamReport,
    json_output_dir: &str,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;

    if let Err(e) = fs::create_dir_all(json_output_dir).await {
        error!(%json_output_dir, error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = format!(
        "{}/streams.json",
        json_output_dir.trim_end_matches('/')
    );

    info!(path = %output_json_filename, "Writing JSON");
    fs::write(&output_json_filename, json).await?;
    info!(path = %output_json_filename, "Wrote stream listing");

    Ok(())
}
