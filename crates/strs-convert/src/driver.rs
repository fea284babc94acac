//! File discovery and per-file conversion.
//!
//! A `.csv` input is converted to `<stem>.out.dat` and a `.dat` input to
//! `<stem>.out.csv` next to it. Outputs are only written once the whole
//! input converted cleanly, and a failing file does not stop the run.

use crate::error::DriverError;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use strs_format::{Diagnostics, Format, RecordCodec, TracingDiagnostics};
use tracing::{debug, info};

/// Marker inserted before the extension of generated files
pub const OUTPUT_MARKER: &str = "out";

/// Counts reported at the end of a run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Files converted and written
    pub processed: usize,
    /// Arguments that were neither CSV nor DAT
    pub skipped: usize,
    /// Files that could not be converted
    pub failed: usize,
}

impl Summary {
    /// Whether every candidate file converted
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed: {}, Skipped: {}, Failed: {}",
            self.processed, self.skipped, self.failed
        )
    }
}

/// Result of converting one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    /// Path of the file written
    pub output: PathBuf,
    /// Format of the file written
    pub format: Format,
    /// Number of records converted
    pub records: usize,
}

/// Whether a path names a file generated by an earlier run, such as `a.out.csv`
#[must_use]
pub fn is_output(path: &Path) -> bool {
    path.file_stem()
        .map(Path::new)
        .and_then(Path::extension)
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(OUTPUT_MARKER))
}

/// Whether a path should be picked up when scanning a directory
#[must_use]
pub fn is_candidate(path: &Path) -> bool {
    Format::from_path(path).is_some() && !is_output(path)
}

/// Path the conversion of `input` is written to
///
/// ```
/// use std::path::{Path, PathBuf};
/// use strs_convert::driver::output_path;
/// use strs_format::Format;
///
/// assert_eq!(
///     output_path(Path::new("reports/2021.csv"), Format::Csv),
///     PathBuf::from("reports/2021.out.dat")
/// );
/// ```
#[must_use]
pub fn output_path(input: &Path, source: Format) -> PathBuf {
    input.with_extension(format!("{OUTPUT_MARKER}.{}", source.target().extension()))
}

/// List the convertible files of a directory, sorted by name
///
/// # Errors
///
/// Returns `DriverError::Scan` if the directory cannot be read.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, DriverError> {
    let scan_error = |source| DriverError::Scan {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(scan_error)? {
        let path = entry.map_err(scan_error)?.path();
        if path.is_file() && is_candidate(&path) {
            files.push(path);
        }
    }
    files.sort();

    debug!(dir = %dir.display(), files = files.len(), "scanned input directory");
    Ok(files)
}

/// Converts files with the STRS record layout
#[derive(Debug, Clone)]
pub struct Converter {
    codec: RecordCodec,
}

impl Converter {
    /// Create a converter, validating the record layout
    ///
    /// # Errors
    ///
    /// Returns `DriverError::Layout` if the built-in layout is inconsistent.
    pub fn new() -> Result<Self, DriverError> {
        Ok(Self {
            codec: RecordCodec::new()?,
        })
    }

    /// Codec used for conversions
    #[must_use]
    pub fn codec(&self) -> &RecordCodec {
        &self.codec
    }

    /// Convert one file and write the result next to it
    ///
    /// # Errors
    ///
    /// Returns a `DriverError` naming the file if it has an unsupported
    /// extension, cannot be read or written, or holds invalid records. No
    /// output is written in the invalid-records case.
    pub fn convert_file(
        &self,
        input: &Path,
        diag: &mut dyn Diagnostics,
    ) -> Result<Converted, DriverError> {
        let format =
            Format::from_path(input).ok_or_else(|| DriverError::Unsupported(input.to_path_buf()))?;
        let convert_error = |source| DriverError::Convert {
            path: input.to_path_buf(),
            source,
        };

        let bytes = fs::read(input).map_err(|source| DriverError::Read {
            path: input.to_path_buf(),
            source,
        })?;

        let records = self.codec.read(format, &bytes, diag).map_err(convert_error)?;
        let target = format.target();
        let converted = self.codec.write(target, &records).map_err(convert_error)?;

        let output = output_path(input, format);
        fs::write(&output, converted).map_err(|source| DriverError::Write {
            path: output.clone(),
            source,
        })?;

        info!(
            input = %input.display(),
            output = %output.display(),
            records = records.len(),
            "converted file"
        );

        Ok(Converted {
            output,
            format: target,
            records: records.len(),
        })
    }

    /// Convert every input, reporting progress to `out`
    ///
    /// Inputs are listed first with a 1-based index. Files that fail are
    /// reported and counted, and the run carries on with the next one.
    ///
    /// # Errors
    ///
    /// Only fails if writing to `out` fails.
    pub fn run<W: Write>(&self, inputs: &[PathBuf], out: &mut W) -> Result<Summary, DriverError> {
        writeln!(out, "Inputs:")?;
        for (i, input) in inputs.iter().enumerate() {
            if Format::from_path(input).is_some() {
                writeln!(out, " {:>4}: {}", i + 1, input.display())?;
            } else {
                writeln!(out, " (skipped) {:>4}: {}", i + 1, input.display())?;
            }
        }

        let mut summary = Summary::default();
        for input in inputs {
            let Some(source) = Format::from_path(input) else {
                summary.skipped += 1;
                continue;
            };

            writeln!(out, "Converting {} to {}", input.display(), source.target())?;
            match self.convert_file(input, &mut TracingDiagnostics) {
                Ok(converted) => {
                    summary.processed += 1;
                    writeln!(
                        out,
                        "  wrote {} record(s) to {}",
                        converted.records,
                        converted.output.display()
                    )?;
                }
                Err(e) => {
                    summary.failed += 1;
                    writeln!(out, "  error: {e}")?;
                }
            }
        }

        writeln!(out, "{summary}")?;
        Ok(summary)
    }
}
