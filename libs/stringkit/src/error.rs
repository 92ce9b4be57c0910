//! Error types for stringkit

use thiserror::Error;

/// Errors produced by strict parsing operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StringkitError {
    #[error("hex string has odd length {0}")]
    OddHexLength(usize),

    #[error("invalid hex digit '{digit}' at offset {offset}")]
    InvalidHexDigit { digit: char, offset: usize },
}

pub type Result<T> = std::result::Result<T, StringkitError>;
