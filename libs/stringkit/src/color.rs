//! `#RRGGBB` color string parsing
//!
//! Only the 7-character form is accepted; there is no alpha channel in the
//! string, so alpha is always 255.

use serde::{Deserialize, Serialize};

use crate::hex::hex_digit;

/// 8-bit RGBA color
///
/// The default value is opaque black `(0, 0, 0, 255)`, which is also the
/// defined fallback for failed parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 255,
        }
    }
}

/// RGBA color with each channel normalized to [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbaF {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl From<Rgba8> for RgbaF {
    fn from(c: Rgba8) -> Self {
        Self {
            r: f32::from(c.r) / 255.0,
            g: f32::from(c.g) / 255.0,
            b: f32::from(c.b) / 255.0,
            a: f32::from(c.a) / 255.0,
        }
    }
}

/// Parse a `#RRGGBB` color string, case-insensitive
///
/// Any mismatch (wrong length, missing `#`, non-hex digit) yields `None`
/// before any channel is produced; callers wanting the silent fallback use
/// `parse_color(s).unwrap_or_default()`.
pub fn parse_color(color: &str) -> Option<Rgba8> {
    let bytes = color.as_bytes();
    if bytes.len() != 7 || bytes[0] != b'#' {
        return None;
    }

    let mut acc: u32 = 0;
    for &c in &bytes[1..] {
        acc = (acc << 4) | u32::from(hex_digit(c)?);
    }

    Some(Rgba8 {
        r: (acc >> 16) as u8,
        g: (acc >> 8) as u8,
        b: acc as u8,
        a: 255,
    })
}

/// Float-normalized variant of [`parse_color`]
pub fn parse_color_f(color: &str) -> Option<RgbaF> {
    parse_color(color).map(RgbaF::from)
}
