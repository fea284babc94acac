//! Error types for CSV tokenizing and fixed-width record conversion

use crate::padding::Side;
use thiserror::Error;

/// Result type for STRS record operations
pub type Result<T> = std::result::Result<T, StrsError>;

/// Errors that abort a conversion
///
/// Data errors are produced by the field rules without knowing where the
/// value came from. The codec wraps them in [`StrsError::Field`],
/// [`StrsError::Record`] and [`StrsError::Line`] as they propagate; use
/// [`StrsError::root`] to get at the underlying cause.
#[derive(Debug, Error)]
pub enum StrsError {
    /// End of line reached inside a quoted CSV entry
    #[error("Invalid CSV: unexpected end of line inside a quoted entry (column {column})")]
    UnterminatedQuote {
        /// 1-based column where the line ended
        column: usize,
    },

    /// A quoted entry was closed and followed by something other than a comma
    #[error(
        "Invalid CSV: unexpected character '{found}' after closing quote at column {column}, \
         expected another double quote, a comma or the end of the line"
    )]
    UnexpectedAfterQuote {
        /// The offending character
        found: char,
        /// 1-based column of the offending character
        column: usize,
    },

    /// Value does not have the exact width required by a `Fail` policy
    #[error("The input data was not the expected length ({expected}): |{value}|")]
    LengthMismatch {
        /// The rejected value
        value: String,
        /// Required width in characters
        expected: usize,
    },

    /// Truncation would discard characters other than the padding character
    #[error(
        "Attempted to truncate |{value}| to a width of {width}, but the {side}most {discarded} \
         characters were not all '{pad_char}'"
    )]
    NonPaddingTruncation {
        /// The rejected value
        value: String,
        /// Target width
        width: usize,
        /// Side the characters would have been removed from
        side: Side,
        /// Number of characters that would have been removed
        discarded: usize,
        /// Padding character the removed characters had to match
        pad_char: char,
    },

    /// Fixed-point decimal input is malformed
    #[error("Invalid fixed point value |{value}|: {reason}")]
    InvalidFixedPoint {
        /// The rejected value
        value: String,
        /// What was wrong with it
        reason: &'static str,
    },

    /// DAT input is not a whole number of records
    #[error("DAT input length {length} is not a multiple of the record width {record_width}")]
    DatLength {
        /// Input length in bytes
        length: usize,
        /// Width of one record in bytes
        record_width: usize,
    },

    /// CSV input ran out of fields in the middle of a record
    #[error(
        "CSV input holds {available} fields, which is not a whole number of records \
         ({expected} fields each)"
    )]
    IncompleteRecord {
        /// Fields per record
        expected: usize,
        /// Fields found in the input
        available: usize,
    },

    /// Character cannot be represented in the single-byte encoding
    #[error("Character '{character}' cannot be encoded as Latin-1")]
    Unencodable {
        /// The character outside U+0000..=U+00FF
        character: char,
    },

    /// Record layout failed its self-check
    #[error("Internal Error: the record definition is not valid: {0}")]
    InvalidSchema(String),

    /// Two descriptors share a name
    #[error("Internal Error: duplicate field name: {0}")]
    DuplicateField(String),

    /// Field name is not part of the schema
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// Error attributed to a named field
    #[error("Field '{field}': {source}")]
    Field {
        /// Descriptor name
        field: String,
        /// Underlying error
        #[source]
        source: Box<Self>,
    },

    /// Error attributed to a record of a batch
    #[error("Record {index}: {source}")]
    Record {
        /// 0-based record index within the batch
        index: usize,
        /// Underlying error
        #[source]
        source: Box<Self>,
    },

    /// Error attributed to a line of CSV input
    #[error("Line {line}: {source}")]
    Line {
        /// 1-based line number
        line: usize,
        /// Underlying error
        #[source]
        source: Box<Self>,
    },

    /// IO error while reading or writing a stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StrsError {
    /// Attribute this error to a field
    #[must_use]
    pub fn in_field(self, field: &str) -> Self {
        Self::Field {
            field: field.to_string(),
            source: Box::new(self),
        }
    }

    /// Attribute this error to a record index
    #[must_use]
    pub fn in_record(self, index: usize) -> Self {
        Self::Record {
            index,
            source: Box::new(self),
        }
    }

    /// Attribute this error to a CSV line number
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        Self::Line {
            line,
            source: Box::new(self),
        }
    }

    /// Strip the field, record and line context wrappers
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Field { source, .. }
            | Self::Record { source, .. }
            | Self::Line { source, .. } => source.root(),
            other => other,
        }
    }

    /// Name of the field this error is attributed to, if any
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Field { field, .. } => Some(field),
            Self::Record { source, .. } | Self::Line { source, .. } => source.field(),
            _ => None,
        }
    }

    /// Whether this error is a bug in the record definition rather than bad input
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(
            self.root(),
            Self::InvalidSchema(_) | Self::DuplicateField(_)
        )
    }
}
