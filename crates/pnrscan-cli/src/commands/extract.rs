//! Extract command - recover the reference from a single payload.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use super::{OutputFormat, build_extractor};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Payload text (reads stdin when neither this nor --file is given)
    text: Option<String>,

    /// Read the payload from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub fn run(args: ExtractArgs, airports_path: Option<&str>) -> anyhow::Result<()> {
    let payload = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    info!("Scanning {} characters of payload text", payload.len());

    let extractor = build_extractor(airports_path)?;
    let report = extractor.extract_report(&payload);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        OutputFormat::Text => {
            if report.value == pnrscan_core::UNKNOWN {
                println!("{}", style(&report.value).yellow());
            } else {
                println!("{}", report.value);
            }
        }
    }

    Ok(())
}
