//! Error types for the converter.

use std::path::PathBuf;
use strs_format::StrsError;
use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input directory does not exist
    #[error("Input directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// Input directory path names something other than a directory
    #[error("Input path is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Errors raised while converting files.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Failed to list the input directory
    #[error("Failed to scan {path}: {source}")]
    Scan {
        /// Directory being scanned
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to read an input file
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input file could not be converted
    #[error("Failed to convert {path}: {source}")]
    Convert {
        /// Input file
        path: PathBuf,
        /// Underlying codec error
        #[source]
        source: StrsError,
    },

    /// Input file has neither a CSV nor a DAT extension
    #[error("Unsupported input file: {0}")]
    Unsupported(PathBuf),

    /// Record layout failed to build
    #[error("Record layout error: {0}")]
    Layout(#[from] StrsError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failed to write the report
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}
