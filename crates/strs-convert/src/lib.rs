//! STRS file converter.
//!
//! Converts STRS annual reporting files between the CSV export and the
//! fixed-width DAT upload format, using the `strs-format` codec:
//! - `config`: command-line and environment configuration
//! - `driver`: input discovery, per-file conversion and run summary
//! - `output`: record layout rendering
//!
//! # Example
//!
//! ```no_run
//! use strs_convert::{Converter, driver};
//!
//! fn main() -> anyhow::Result<()> {
//!     let converter = Converter::new()?;
//!     let inputs = driver::discover(std::path::Path::new("."))?;
//!
//!     let summary = converter.run(&inputs, &mut std::io::stdout().lock())?;
//!     if !summary.is_success() {
//!         anyhow::bail!("{} file(s) failed", summary.failed);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod driver;
pub mod error;
pub mod output;

pub use config::{Cli, Command, ConvertArgs, LayoutArgs};
pub use driver::{Converted, Converter, Summary};
pub use error::{ConfigError, DriverError};
