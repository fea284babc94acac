//! Command-line configuration.
//!
//! Arguments come from the command line, with environment variable
//! fallbacks:
//! - `--dir` / `STRS_CONVERT_DIR`: directory scanned when no files are given
//!
//! # Example
//!
//! ```no_run
//! use strs_convert::{Cli, Command};
//!
//! let cli = Cli::from_args();
//! if let Command::Convert(args) = &cli.command {
//!     args.validate().expect("Invalid configuration");
//!     println!("Scanning {}", args.dir.display());
//! }
//! ```

use crate::error::ConfigError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Converter configuration loaded from CLI args and environment variables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "strs-convert",
    about = "Convert STRS annual reporting files between CSV and fixed-width DAT",
    version
)]
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert .csv files to .out.dat and .dat files to .out.csv
    Convert(ConvertArgs),

    /// Print the fixed record layout
    Layout(LayoutArgs),
}

/// Arguments of `convert`
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Files to convert; when omitted, every .csv and .dat file in --dir
    pub files: Vec<PathBuf>,

    /// Directory scanned when no files are given
    #[arg(long, env = "STRS_CONVERT_DIR", default_value = ".")]
    pub dir: PathBuf,
}

/// Arguments of `layout`
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Print the layout as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }
}

impl ConvertArgs {
    /// Whether input files are found by scanning `dir`.
    #[must_use]
    pub fn scans_directory(&self) -> bool {
        self.files.is_empty()
    }

    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory to scan does not exist or is
    /// not a directory. Explicit file arguments are checked when they are
    /// converted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scans_directory() {
            return Ok(());
        }

        if !self.dir.exists() {
            return Err(ConfigError::DirectoryNotFound(self.dir.clone()));
        }
        if !self.dir.is_dir() {
            return Err(ConfigError::NotADirectory(self.dir.clone()));
        }

        Ok(())
    }
}
