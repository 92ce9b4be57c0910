//! String predicates and fixed-width padding
//!
//! Padding counts characters, not display columns.

/// True when `input` begins with `prefix`; the empty prefix always matches
pub fn starts_with(input: &str, prefix: &str) -> bool {
    input.starts_with(prefix)
}

/// True when `input` ends with `suffix`; the empty suffix always matches
pub fn ends_with(input: &str, suffix: &str) -> bool {
    input.ends_with(suffix)
}

/// Copy of `s` with every occurrence of `c` removed, order preserved
pub fn remove_char(s: &str, c: char) -> String {
    s.chars().filter(|&a| a != c).collect()
}

/// Pad `text` on the right with `pad` up to `width` characters
///
/// Text already at or beyond `width` comes back unchanged.
pub fn left_justified(text: &str, width: usize, pad: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + (width - len) * pad.len_utf8());
    result.push_str(text);
    result.extend(std::iter::repeat(pad).take(width - len));
    result
}

/// Pad `text` on the left with `pad` up to `width` characters
pub fn right_justified(text: &str, width: usize, pad: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + (width - len) * pad.len_utf8());
    result.extend(std::iter::repeat(pad).take(width - len));
    result.push_str(text);
    result
}
