//! Fixed-point amounts with two implied fraction digits
//!
//! DAT files store money and service credit as digit strings scaled by 100:
//! `123456.78` is written as `12345678`. CSV files carry the human form with
//! a `.` separator.

use crate::error::{Result, StrsError};
use crate::latin1::char_len;

/// Number of implied fraction digits
pub const FRACTION_DIGITS: usize = 2;

/// Result of converting a CSV decimal to its implied-decimal digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpliedDecimal {
    /// Digits scaled by 100, left-filled with `0` to the field width
    ///
    /// May still be longer than the field; the field's trim policy decides
    /// what happens to the excess.
    pub digits: String,
    /// Rounded decimal form when fraction digits had to be dropped
    pub rounded: Option<String>,
}

/// Convert a decimal such as `876.2150` into `width` implied-decimal digits
///
/// The whole part is carried over as written, so a sign such as in `-12.50`
/// survives the trip through a DAT field. Trailing zeros of the fraction are
/// ignored. More than two significant
/// fraction digits are rounded half away from zero, and a carry out of the
/// fraction increments the whole part.
///
/// # Examples
///
/// ```
/// use strs_format::fixed_point::to_implied_decimal;
///
/// assert_eq!(to_implied_decimal("123456.78", 8)?.digits, "12345678");
/// assert_eq!(to_implied_decimal("334", 8)?.digits, "00033400");
///
/// let rounded = to_implied_decimal("876.2150", 8)?;
/// assert_eq!(rounded.digits, "00087622");
/// assert_eq!(rounded.rounded.as_deref(), Some("876.22"));
/// # Ok::<(), strs_format::StrsError>(())
/// ```
pub fn to_implied_decimal(value: &str, width: usize) -> Result<ImpliedDecimal> {
    let invalid = |reason| StrsError::InvalidFixedPoint {
        value: value.to_string(),
        reason,
    };

    let mut parts = value.split('.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next();
    if parts.next().is_some() {
        return Err(invalid("more than one decimal point"));
    }

    let whole_width = width.saturating_sub(FRACTION_DIGITS);

    let Some(fraction) = fraction else {
        return Ok(ImpliedDecimal {
            digits: format!("{}00", zero_fill(whole, whole_width)),
            rounded: None,
        });
    };

    if !is_digits(fraction) {
        return Err(invalid("fraction part is not numeric"));
    }

    let significant = fraction.trim_end_matches('0');
    if significant.len() <= FRACTION_DIGITS {
        return Ok(ImpliedDecimal {
            digits: format!("{}{significant:0<2}", zero_fill(whole, whole_width)),
            rounded: None,
        });
    }

    let digit = |i: usize| u32::from(significant.as_bytes()[i] - b'0');
    let mut cents = digit(0) * 10 + digit(1);
    let mut whole = whole.to_string();
    if digit(2) >= 5 {
        cents += 1;
        if cents == 100 {
            cents = 0;
            whole = increment(&whole);
        }
    }

    let shown = if whole.is_empty() { "0" } else { &whole };
    Ok(ImpliedDecimal {
        digits: format!("{}{cents:02}", zero_fill(&whole, whole_width)),
        rounded: Some(format!("{shown}.{cents:02}")),
    })
}

/// Render unpadded implied-decimal digits as a decimal, `12345678` to `123456.78`
///
/// Fewer than two digits are treated as cents, and an empty whole part is
/// rendered as `0`.
#[must_use]
pub fn from_implied_decimal(digits: &str) -> String {
    let len = char_len(digits);
    let digits = zero_fill(digits, FRACTION_DIGITS);
    let split = len.max(FRACTION_DIGITS) - FRACTION_DIGITS;

    let whole: String = digits.chars().take(split).collect();
    let fraction: String = digits.chars().skip(split).collect();

    if whole.is_empty() {
        format!("0.{fraction}")
    } else {
        format!("{whole}.{fraction}")
    }
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

fn zero_fill(digits: &str, width: usize) -> String {
    format!("{digits:0>width$}")
}

/// Add one to the trailing run of digits, keeping any prefix such as a sign
fn increment(whole: &str) -> String {
    let prefix = whole.trim_end_matches(|c: char| c.is_ascii_digit());
    let mut digits = whole.as_bytes()[prefix.len()..].to_vec();
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return format!("{prefix}{}", String::from_utf8_lossy(&digits));
        }
    }
    format!("{prefix}1{}", String::from_utf8_lossy(&digits))
}
