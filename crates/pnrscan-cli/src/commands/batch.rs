//! Batch command - process a file of payloads, one per line.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::debug;

use super::{OutputFormat, build_extractor};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input file with one payload per line
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format for each line
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print recovery statistics to stderr when done
    #[arg(long)]
    summary: bool,
}

pub fn run(args: BatchArgs, airports_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let extractor = build_extractor(airports_path)?;
    let input = fs::read_to_string(&args.input)?;

    let mut lines_out = Vec::new();
    let mut found = 0usize;
    let mut unknown = 0usize;

    for line in input.lines() {
        let report = extractor.extract_report(line);
        if report.value == pnrscan_core::UNKNOWN {
            unknown += 1;
        } else {
            found += 1;
        }

        match args.format {
            OutputFormat::Json => lines_out.push(serde_json::to_string(&report)?),
            OutputFormat::Text => lines_out.push(report.value),
        }
    }

    let output = lines_out.join("\n");
    if let Some(path) = &args.output {
        let mut file = fs::File::create(path)?;
        writeln!(file, "{output}")?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            path.display()
        );
    } else if !output.is_empty() {
        println!("{output}");
    }

    if args.summary {
        let total = found + unknown;
        let rate = if total > 0 {
            found as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        eprintln!(
            "{} {} payloads, {} recognized, {} unknown ({:.1}% recovery)",
            style("ℹ").blue(),
            total,
            found,
            unknown,
            rate
        );
    }

    debug!("Batch completed in {:?}", start.elapsed());

    Ok(())
}
