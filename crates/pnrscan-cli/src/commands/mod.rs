//! CLI subcommands.

pub mod batch;
pub mod extract;

use std::fs;

use pnrscan_core::{AirportCodes, PnrExtractor};

/// Build the extractor, honoring a custom airport-code feed when given.
pub fn build_extractor(airports_path: Option<&str>) -> anyhow::Result<PnrExtractor> {
    let extractor = match airports_path {
        Some(path) => {
            let feed = fs::read_to_string(path)?;
            let codes = AirportCodes::from_feed(
                feed.lines().map(str::trim).filter(|l| !l.is_empty()),
            )?;
            PnrExtractor::new().with_airports(codes)
        }
        None => PnrExtractor::new(),
    };

    Ok(extractor)
}

/// Output format shared by the subcommands.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one value per line
    Text,
    /// JSON report with strategy diagnostics
    Json,
}
