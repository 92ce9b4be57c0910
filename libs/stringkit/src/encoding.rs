//! UTF-16 <-> UTF-8 conversion
//!
//! Both directions are total: malformed input (unpaired surrogates,
//! invalid UTF-8 byte sequences) is replaced with U+FFFD rather than
//! rejected, so the output is always well-formed.

/// Convert UTF-16 code units, surrogate pairs included, to UTF-8 bytes
///
/// Unpaired surrogates become U+FFFD.
pub fn utf16_to_utf8(units: &[u16]) -> Vec<u8> {
    String::from_utf16_lossy(units).into_bytes()
}

/// Convert UTF-8 bytes to UTF-16 code units
///
/// Malformed byte sequences become U+FFFD.
pub fn utf8_to_utf16(bytes: &[u8]) -> Vec<u16> {
    String::from_utf8_lossy(bytes).encode_utf16().collect()
}
