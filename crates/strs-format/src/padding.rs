//! Pad, trim and unpad rules for fixed-width values
//!
//! These are pure functions over a value, a target width and a padding
//! character. They never know which field they are working on; the caller
//! attaches that context to errors and turns reported truncations into
//! warnings.

use crate::error::{Result, StrsError};
use crate::latin1::char_len;
use std::fmt;

/// Side of a value that characters are added to or removed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Start of the value
    Left,
    /// End of the value
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// How a value longer than its field is cut down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrimPolicy {
    /// Keep the last `width` characters
    Left,
    /// Keep the first `width` characters
    Right,
    /// Keep the last `width` characters if everything dropped is padding
    LeftOnlyPadding,
    /// Keep the first `width` characters if everything dropped is padding
    RightOnlyPadding,
    /// Value must already be exactly `width` characters
    Fail,
}

/// Outcome of [`TrimPolicy::trim`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trimmed {
    /// Value no longer than the target width
    pub value: String,
    /// Side characters were removed from, if any were
    pub truncated: Option<Side>,
}

impl TrimPolicy {
    /// Side this policy removes characters from
    #[must_use]
    pub fn side(self) -> Option<Side> {
        match self {
            Self::Left | Self::LeftOnlyPadding => Some(Side::Left),
            Self::Right | Self::RightOnlyPadding => Some(Side::Right),
            Self::Fail => None,
        }
    }

    /// Reduce `value` to at most `width` characters
    ///
    /// Values that already fit are returned unchanged, except under
    /// [`TrimPolicy::Fail`] which demands the exact width.
    ///
    /// # Examples
    ///
    /// ```
    /// use strs_format::padding::{Side, TrimPolicy};
    ///
    /// let trimmed = TrimPolicy::LeftOnlyPadding.trim("0001234", 5, '0')?;
    /// assert_eq!(trimmed.value, "01234");
    /// assert_eq!(trimmed.truncated, Some(Side::Left));
    ///
    /// assert!(TrimPolicy::LeftOnlyPadding.trim("9001234", 5, '0').is_err());
    /// # Ok::<(), strs_format::StrsError>(())
    /// ```
    pub fn trim(self, value: &str, width: usize, pad_char: char) -> Result<Trimmed> {
        let Some(side) = self.side() else {
            return exact(value, width).map(|value| Trimmed {
                value,
                truncated: None,
            });
        };

        let len = char_len(value);
        if len <= width {
            return Ok(Trimmed {
                value: value.to_string(),
                truncated: None,
            });
        }

        let excess = len - width;
        let (kept, dropped): (String, String) = match side {
            Side::Left => (
                value.chars().skip(excess).collect(),
                value.chars().take(excess).collect(),
            ),
            Side::Right => (
                value.chars().take(width).collect(),
                value.chars().skip(width).collect(),
            ),
        };

        let padding_only = matches!(self, Self::LeftOnlyPadding | Self::RightOnlyPadding);
        if padding_only && dropped.chars().any(|c| c != pad_char) {
            return Err(StrsError::NonPaddingTruncation {
                value: value.to_string(),
                width,
                side,
                discarded: excess,
                pad_char,
            });
        }

        Ok(Trimmed {
            value: kept,
            truncated: Some(side),
        })
    }
}

/// How a value shorter than its field is filled out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PadPolicy {
    /// Insert padding before the value
    Left,
    /// Append padding after the value
    Right,
    /// Value must already be exactly `width` characters
    Fail,
}

impl PadPolicy {
    /// Side this policy adds padding to
    #[must_use]
    pub fn side(self) -> Option<Side> {
        match self {
            Self::Left => Some(Side::Left),
            Self::Right => Some(Side::Right),
            Self::Fail => None,
        }
    }

    /// Widen `value` to at least `width` characters with `pad_char`
    ///
    /// # Examples
    ///
    /// ```
    /// use strs_format::padding::PadPolicy;
    ///
    /// assert_eq!(PadPolicy::Left.pad("42", 5, '0')?, "00042");
    /// assert_eq!(PadPolicy::Right.pad("OH", 4, ' ')?, "OH  ");
    /// assert!(PadPolicy::Fail.pad("42", 5, '0').is_err());
    /// # Ok::<(), strs_format::StrsError>(())
    /// ```
    pub fn pad(self, value: &str, width: usize, pad_char: char) -> Result<String> {
        let missing = width.saturating_sub(char_len(value));
        let fill = || std::iter::repeat_n(pad_char, missing);

        match self {
            Self::Left => Ok(fill().chain(value.chars()).collect()),
            Self::Right => Ok(value.chars().chain(fill()).collect()),
            Self::Fail => exact(value, width),
        }
    }

    /// Strip `pad_char` from the padded side, the inverse of [`PadPolicy::pad`]
    ///
    /// Every matching character on that side is removed, so an all-padding
    /// value unpads to the empty string. [`PadPolicy::Fail`] returns the
    /// value unchanged.
    #[must_use]
    pub fn unpad(self, value: &str, pad_char: char) -> &str {
        match self {
            Self::Left => value.trim_start_matches(pad_char),
            Self::Right => value.trim_end_matches(pad_char),
            Self::Fail => value,
        }
    }
}

fn exact(value: &str, width: usize) -> Result<String> {
    if char_len(value) == width {
        Ok(value.to_string())
    } else {
        Err(StrsError::LengthMismatch {
            value: value.to_string(),
            expected: width,
        })
    }
}
