//! STRS converter binary entry point.
//!
//! This is a thin wrapper around the strs-convert library that:
//! 1. Parses command-line arguments
//! 2. Initializes logging
//! 3. Validates configuration
//! 4. Runs the requested subcommand

use anyhow::{Result, bail};
use strs_convert::{Cli, Command, ConvertArgs, Converter, LayoutArgs, driver, output};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::from_args();

    match cli.command {
        Command::Convert(args) => convert(&args),
        Command::Layout(args) => layout(&args),
    }
}

fn convert(args: &ConvertArgs) -> Result<()> {
    args.validate()?;

    let inputs = if args.scans_directory() {
        tracing::info!("Scanning {} for .csv and .dat files", args.dir.display());
        driver::discover(&args.dir)?
    } else {
        args.files.clone()
    };

    let converter = Converter::new()?;
    let summary = converter.run(&inputs, &mut std::io::stdout().lock())?;

    if !summary.is_success() {
        bail!("{} file(s) failed to convert", summary.failed);
    }

    Ok(())
}

fn layout(args: &LayoutArgs) -> Result<()> {
    let converter = Converter::new()?;
    let schema = converter.codec().schema();

    if args.json {
        println!("{}", output::layout_json(schema)?);
    } else {
        println!("{}", output::layout_table(schema));
        println!("Record width: {} bytes", schema.record_width());
    }

    Ok(())
}
