//! CLI application for boarding-pass booking-reference recognition.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, extract};

/// Recover booking references (PNRs) from raw boarding-pass payloads
#[derive(Parser)]
#[command(name = "pnrscan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// File with one airport code per line, replacing the embedded set
    #[arg(short, long, global = true)]
    airports: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the booking reference from a single payload
    Extract(extract::ExtractArgs),

    /// Process a file of payloads, one per line
    Batch(batch::BatchArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Extract(args) => extract::run(args, cli.airports.as_deref()),
        Commands::Batch(args) => batch::run(args, cli.airports.as_deref()),
    }
}
