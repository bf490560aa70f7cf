//! CLI application for passport OCR field extraction.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use pocr_core::{PassportRecognizer, PocrConfig};

const USAGE: &str = "Usage: pocr <image_path>";

/// Passport OCR - Extract structured fields from a passport image
#[derive(Parser)]
#[command(name = "pocr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Passport image to process
    image_path: PathBuf,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                println!("{}", USAGE);
                std::process::exit(1);
            }
        },
    };

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
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    run(cli).await
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = PocrConfig::load(cli.config.as_deref())?;
    debug!("OCR binary: {}", config.ocr.tesseract_cmd.display());

    let image_path = cli.image_path.clone();
    let recognition = tokio::task::spawn_blocking(move || {
        PassportRecognizer::from_config(&config).recognize_path(&image_path)
    })
    .await??;

    let output = serde_json::to_string_pretty(&recognition)?;

    if let Some(output_path) = &cli.output {
        fs::write(output_path, &output)?;
        info!("Output written to {}", output_path.display());
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
