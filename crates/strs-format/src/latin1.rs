//! Latin-1 (ISO-8859-1) text conversion
//!
//! Every byte maps to the code point of the same value, so a field that is
//! `n` bytes wide in a DAT record is always `n` characters wide in memory.
//! Widths throughout the crate are counted in characters for that reason.

use crate::error::{Result, StrsError};

/// Decode Latin-1 bytes into a string
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encode a string as Latin-1 bytes
pub fn encode(text: &str) -> Result<Vec<u8>> {
    text.chars().map(encode_char).collect()
}

/// Encode a string into a byte slice of exactly the same width
pub fn encode_into(text: &str, out: &mut [u8]) -> Result<()> {
    let mut written = 0;
    for (slot, c) in out.iter_mut().zip(text.chars()) {
        *slot = encode_char(c)?;
        written += 1;
    }

    let width = char_len(text);
    if written != out.len() || width != out.len() {
        return Err(StrsError::LengthMismatch {
            value: text.to_string(),
            expected: out.len(),
        });
    }

    Ok(())
}

/// Number of characters (and therefore encoded bytes) in a string
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn encode_char(c: char) -> Result<u8> {
    u8::try_from(u32::from(c)).map_err(|_| StrsError::Unencodable { character: c })
}
