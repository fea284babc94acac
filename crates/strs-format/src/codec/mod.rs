//! Batch conversion between CSV and DAT
//!
//! Both directions go through [`Record`] batches. Decoding fails on the
//! first bad record and never returns a partial batch.

mod csv;
mod dat;

pub use csv::LINE_ENDING;

use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::record::Record;
use crate::schema::RecordSchema;
use std::fmt;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// File format of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Format {
    /// Comma-separated logical values, one record per line
    Csv,
    /// Fixed-width records with no separators
    Dat,
}

impl Format {
    /// Classify a path by its extension, ignoring case
    ///
    /// ```
    /// use std::path::Path;
    /// use strs_format::Format;
    ///
    /// assert_eq!(Format::from_path(Path::new("2021.CSV")), Some(Format::Csv));
    /// assert_eq!(Format::from_path(Path::new("notes.txt")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if extension.eq_ignore_ascii_case("dat") {
            Some(Self::Dat)
        } else {
            None
        }
    }

    /// File extension without the dot
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Dat => "dat",
        }
    }

    /// The format a batch of this format is converted to
    #[must_use]
    pub fn target(self) -> Self {
        match self {
            Self::Csv => Self::Dat,
            Self::Dat => Self::Csv,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("CSV"),
            Self::Dat => f.write_str("DAT"),
        }
    }
}

/// Reads and writes record batches for one schema
///
/// # Examples
///
/// ```
/// use strs_format::{CollectingDiagnostics, Format, RecordCodec};
///
/// let codec = RecordCodec::new()?;
/// let mut diag = CollectingDiagnostics::new();
///
/// let csv = b"C000,123456.78,2021,0.67, ,333224444,Sample Joe A,876543.21,\
/// 123 HOME ST,APT 999,,New York,NY,12345,4444,22,123456.78,joe@sample.com,5555551234,C\r\n";
///
/// let dat = codec.convert(Format::Csv, csv, &mut diag)?;
/// assert_eq!(dat.len(), 350);
/// assert_eq!(&dat[..16], b"C000123456782021");
///
/// let back = codec.convert(Format::Dat, &dat, &mut diag)?;
/// assert_eq!(back, csv);
/// assert!(diag.is_empty());
/// # Ok::<(), strs_format::StrsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecordCodec {
    schema: RecordSchema,
}

impl RecordCodec {
    /// Codec for STRS records
    pub fn new() -> Result<Self> {
        Ok(Self::with_schema(RecordSchema::strs()?))
    }

    /// Codec for an already validated schema
    #[must_use]
    pub fn with_schema(schema: RecordSchema) -> Self {
        Self { schema }
    }

    /// Schema used by this codec
    #[must_use]
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Decode a DAT batch
    ///
    /// The input length must be a whole multiple of the record width.
    pub fn read_dat(&self, bytes: &[u8], diag: &mut dyn Diagnostics) -> Result<Vec<Record>> {
        let records = dat::decode(&self.schema, bytes, diag).inspect_err(|e| diag.error(e))?;
        debug!(records = records.len(), bytes = bytes.len(), "decoded DAT batch");
        Ok(records)
    }

    /// Encode records as a DAT batch
    pub fn write_dat(&self, records: &[Record]) -> Result<Vec<u8>> {
        let bytes = dat::encode(&self.schema, records)?;
        debug!(records = records.len(), bytes = bytes.len(), "encoded DAT batch");
        Ok(bytes)
    }

    /// Decode a CSV batch
    pub fn read_csv(&self, bytes: &[u8], diag: &mut dyn Diagnostics) -> Result<Vec<Record>> {
        let records = csv::decode(&self.schema, bytes, diag).inspect_err(|e| diag.error(e))?;
        debug!(records = records.len(), bytes = bytes.len(), "decoded CSV batch");
        Ok(records)
    }

    /// Encode records as a CSV batch, each line terminated by CRLF
    pub fn write_csv(&self, records: &[Record]) -> Result<Vec<u8>> {
        let bytes = csv::encode(&self.schema, records)?;
        debug!(records = records.len(), bytes = bytes.len(), "encoded CSV batch");
        Ok(bytes)
    }

    /// Decode a batch
    pub fn read(
        &self,
        format: Format,
        bytes: &[u8],
        diag: &mut dyn Diagnostics,
    ) -> Result<Vec<Record>> {
        match format {
            Format::Csv => self.read_csv(bytes, diag),
            Format::Dat => self.read_dat(bytes, diag),
        }
    }

    /// Encode a batch
    pub fn write(&self, format: Format, records: &[Record]) -> Result<Vec<u8>> {
        match format {
            Format::Csv => self.write_csv(records),
            Format::Dat => self.write_dat(records),
        }
    }

    /// Decode a batch in `source` format and encode it in the other format
    pub fn convert(
        &self,
        source: Format,
        bytes: &[u8],
        diag: &mut dyn Diagnostics,
    ) -> Result<Vec<u8>> {
        let records = self.read(source, bytes, diag)?;
        self.write(source.target(), &records)
            .inspect_err(|e| diag.error(e))
    }

    /// Read a whole DAT stream and decode it
    pub fn read_dat_from<R: Read>(
        &self,
        mut reader: R,
        diag: &mut dyn Diagnostics,
    ) -> Result<Vec<Record>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.read_dat(&bytes, diag)
    }

    /// Read a whole CSV stream and decode it
    pub fn read_csv_from<R: Read>(
        &self,
        mut reader: R,
        diag: &mut dyn Diagnostics,
    ) -> Result<Vec<Record>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.read_csv(&bytes, diag)
    }

    /// Encode records as DAT into a stream
    pub fn write_dat_to<W: Write>(&self, records: &[Record], mut writer: W) -> Result<()> {
        writer.write_all(&self.write_dat(records)?)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode records as CSV into a stream
    pub fn write_csv_to<W: Write>(&self, records: &[Record], mut writer: W) -> Result<()> {
        writer.write_all(&self.write_csv(records)?)?;
        writer.flush()?;
        Ok(())
    }
}
