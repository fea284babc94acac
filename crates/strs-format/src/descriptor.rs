//! Field descriptors: where a field lives in a record and how it is normalized

use crate::diagnostics::{Diagnostics, Warning};
use crate::error::Result;
use crate::fixed_point;
use crate::padding::{PadPolicy, TrimPolicy};
use std::fmt;

/// Semantic kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogicalType {
    /// Free text
    Alphanumeric,
    /// Whole number stored as digits
    Integer,
    /// Four-digit year, never padded
    Year,
    /// Amount with two implied fraction digits
    FixedPointDecimal,
    /// Filler with no CSV counterpart
    Reserved,
}

impl LogicalType {
    /// Trim policy used when none is given
    #[must_use]
    pub fn default_trim(self) -> TrimPolicy {
        match self {
            Self::Alphanumeric | Self::Reserved => TrimPolicy::Right,
            Self::Year => TrimPolicy::Fail,
            Self::Integer | Self::FixedPointDecimal => TrimPolicy::LeftOnlyPadding,
        }
    }

    /// Pad policy used when none is given
    #[must_use]
    pub fn default_pad(self) -> PadPolicy {
        match self {
            Self::Alphanumeric | Self::Reserved => PadPolicy::Right,
            Self::Year => PadPolicy::Fail,
            Self::Integer | Self::FixedPointDecimal => PadPolicy::Left,
        }
    }

    /// Padding character used when none is given
    #[must_use]
    pub fn default_pad_char(self) -> char {
        match self {
            Self::Alphanumeric | Self::Reserved => ' ',
            Self::Year | Self::Integer | Self::FixedPointDecimal => '0',
        }
    }

    /// Whether fields of this type appear in CSV rows
    #[must_use]
    pub fn in_csv(self) -> bool {
        self != Self::Reserved
    }

    /// Short display name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Alphanumeric => "alphanumeric",
            Self::Integer => "integer",
            Self::Year => "year",
            Self::FixedPointDecimal => "fixed-point",
            Self::Reserved => "reserved",
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable description of one field of a fixed-width record
///
/// # Examples
///
/// ```
/// use strs_format::{FieldDescriptor, LogicalType, PadPolicy, TrimPolicy};
///
/// let zip = FieldDescriptor::new("ZipCode", 210, 5, LogicalType::Integer);
/// assert_eq!(zip.trim_policy(), TrimPolicy::LeftOnlyPadding);
/// assert_eq!(zip.pad_policy(), PadPolicy::Left);
/// assert_eq!(zip.pad_char(), '0');
/// assert_eq!(zip.offset(), 209);
///
/// let ssn = FieldDescriptor::new("SocialSecurityNumber", 21, 9, LogicalType::Integer)
///     .with_trim(TrimPolicy::Fail)
///     .with_pad(PadPolicy::Fail);
/// assert_eq!(ssn.pad_char(), '0');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldDescriptor {
    name: String,
    start: usize,
    length: usize,
    logical_type: LogicalType,
    trim: TrimPolicy,
    pad: PadPolicy,
    pad_char: char,
}

impl FieldDescriptor {
    /// Describe a field with the policies derived from its logical type
    ///
    /// `start` is the 1-based position of the field's first byte.
    pub fn new(
        name: impl Into<String>,
        start: usize,
        length: usize,
        logical_type: LogicalType,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            length,
            logical_type,
            trim: logical_type.default_trim(),
            pad: logical_type.default_pad(),
            pad_char: logical_type.default_pad_char(),
        }
    }

    /// Override the trim policy
    #[must_use]
    pub fn with_trim(mut self, trim: TrimPolicy) -> Self {
        self.trim = trim;
        self
    }

    /// Override the pad policy
    #[must_use]
    pub fn with_pad(mut self, pad: PadPolicy) -> Self {
        self.pad = pad;
        self
    }

    /// Override the padding character
    #[must_use]
    pub fn with_pad_char(mut self, pad_char: char) -> Self {
        self.pad_char = pad_char;
        self
    }

    /// Field name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based start position
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// 0-based byte offset within the record
    #[must_use]
    pub fn offset(&self) -> usize {
        self.start.saturating_sub(1)
    }

    /// Width in bytes
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Byte range within the record
    #[must_use]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset()..self.offset() + self.length
    }

    /// Semantic kind
    #[must_use]
    pub fn logical_type(&self) -> LogicalType {
        self.logical_type
    }

    /// Trim policy
    #[must_use]
    pub fn trim_policy(&self) -> TrimPolicy {
        self.trim
    }

    /// Pad policy
    #[must_use]
    pub fn pad_policy(&self) -> PadPolicy {
        self.pad
    }

    /// Padding character
    #[must_use]
    pub fn pad_char(&self) -> char {
        self.pad_char
    }

    /// Bring a value to exactly this field's width: trim, then pad
    ///
    /// Truncations are reported to `diag`. Errors carry the field name.
    pub fn normalize(&self, value: &str, diag: &mut dyn Diagnostics) -> Result<String> {
        let trimmed = self
            .trim
            .trim(value, self.length, self.pad_char)
            .map_err(|e| e.in_field(&self.name))?;

        if let Some(side) = trimmed.truncated {
            diag.warn(Warning::Truncated {
                field: self.name.clone(),
                side,
                before: value.to_string(),
                after: trimmed.value.clone(),
            });
        }

        self.pad
            .pad(&trimmed.value, self.length, self.pad_char)
            .map_err(|e| e.in_field(&self.name))
    }

    /// Internal value for a logical CSV value
    ///
    /// Fixed-point fields are rescaled to implied-decimal digits first and
    /// report any rounding to `diag`. Reserved fields ignore `value` and are
    /// filled with the padding character.
    pub fn parse_logical(&self, value: &str, diag: &mut dyn Diagnostics) -> Result<String> {
        match self.logical_type {
            LogicalType::Alphanumeric | LogicalType::Integer | LogicalType::Year => {
                self.normalize(value, diag)
            }
            LogicalType::FixedPointDecimal => {
                let encoded = fixed_point::to_implied_decimal(value, self.length)
                    .map_err(|e| e.in_field(&self.name))?;

                if let Some(rounded) = encoded.rounded {
                    diag.warn(Warning::Rounded {
                        field: self.name.clone(),
                        original: value.to_string(),
                        rounded,
                    });
                }

                self.normalize(&encoded.digits, diag)
            }
            LogicalType::Reserved => Ok(self.blank()),
        }
    }

    /// Logical CSV value for an internal value: unpad, then split fixed-point digits
    #[must_use]
    pub fn to_logical(&self, internal: &str) -> String {
        let unpadded = self.pad.unpad(internal, self.pad_char);
        match self.logical_type {
            LogicalType::FixedPointDecimal => fixed_point::from_implied_decimal(unpadded),
            _ => unpadded.to_string(),
        }
    }

    /// Value made entirely of the padding character
    #[must_use]
    pub fn blank(&self) -> String {
        std::iter::repeat_n(self.pad_char, self.length).collect()
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}+{} ({})",
            self.name, self.start, self.length, self.logical_type
        )
    }
}
