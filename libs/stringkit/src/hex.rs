//! Hex encoding and decoding utilities
//!
//! Encoding always produces uppercase output. Decoding accepts both cases
//! and rejects the whole input on the first malformed character, so a
//! successful decode guarantees the input was exactly hex.

use std::fmt::Write;

use tracing::debug;

use crate::error::{Result, StringkitError};

/// Encode bytes to an uppercase hex string
/// Example: [0x12, 0x34, 0xAB] -> "1234AB"
pub fn encode_upper(data: &[u8]) -> String {
    let mut result = String::with_capacity(data.len() * 2);
    for byte in data {
        // Writing to String buffer is infallible - no need for expect
        let _ = write!(&mut result, "{:02X}", byte);
    }
    result
}

/// Decode a hex string into bytes
///
/// Case-insensitive, one byte per character pair, high nibble first. Fails
/// on an odd input length or any non-hex character without producing
/// partial output. The empty string decodes to an empty vector, so
/// `Ok(vec![])` and `Err(_)` stay distinguishable.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let bytes = input.as_bytes();
    if bytes.len() % 2 != 0 {
        debug!(len = bytes.len(), "rejecting odd-length hex string");
        return Err(StringkitError::OddHexLength(bytes.len()));
    }

    let mut result = Vec::with_capacity(bytes.len() / 2);
    for (i, pair) in bytes.chunks_exact(2).enumerate() {
        let hi = hex_digit(pair[0]).ok_or(StringkitError::InvalidHexDigit {
            digit: pair[0] as char,
            offset: i * 2,
        })?;
        let lo = hex_digit(pair[1]).ok_or(StringkitError::InvalidHexDigit {
            digit: pair[1] as char,
            offset: i * 2 + 1,
        })?;
        result.push((hi << 4) | lo);
    }
    Ok(result)
}

/// Value of a single hex digit, both cases accepted
pub(crate) fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}
