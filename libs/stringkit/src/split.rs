//! Delimiter-based string splitting with an empty-token policy
//!
//! Scans left to right for non-overlapping delimiter occurrences; every gap
//! between occurrences (including the leading and trailing gap) becomes a
//! token. The delimiter itself never appears in a token.

use serde::{Deserialize, Serialize};

/// Policy for zero-length tokens produced by splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitBehavior {
    /// Retain every token, empty ones included
    KeepEmptyParts,
    /// Drop zero-length tokens wherever they occur
    SkipEmptyParts,
}

/// Split `input` on occurrences of a string delimiter
///
/// The returned tokens borrow from `input`. An empty delimiter never
/// matches, so the whole input comes back as a single token (subject to the
/// empty-token policy).
pub fn split<'a>(input: &'a str, delimiter: &str, behavior: SplitBehavior) -> Vec<&'a str> {
    let mut result = Vec::new();
    if delimiter.is_empty() {
        push_part(&mut result, input, behavior);
        return result;
    }

    let mut start = 0;
    while let Some(pos) = input[start..].find(delimiter) {
        let end = start + pos;
        push_part(&mut result, &input[start..end], behavior);
        start = end + delimiter.len();
    }
    push_part(&mut result, &input[start..], behavior);
    result
}

/// Single-character variant of [`split`]
pub fn split_char<'a>(input: &'a str, delimiter: char, behavior: SplitBehavior) -> Vec<&'a str> {
    let mut buf = [0u8; 4];
    split(input, delimiter.encode_utf8(&mut buf), behavior)
}

fn push_part<'a>(result: &mut Vec<&'a str>, part: &'a str, behavior: SplitBehavior) {
    if behavior == SplitBehavior::SkipEmptyParts && part.is_empty() {
        return;
    }
    result.push(part);
}
