//! Error types for Soundex encoding operations.

use thiserror::Error;

/// Errors that can occur while encoding a word.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The input word has zero length.
    ///
    /// A Soundex code always starts with the word's first letter, so there is
    /// no meaningful code for an empty word.
    #[error("input is empty")]
    EmptyInput,

    /// The input word contains a character that is not an ASCII letter.
    ///
    /// Digits, punctuation, whitespace, and non-ASCII symbols are all
    /// rejected, in any position. The offending input is carried for
    /// diagnostics.
    #[error("input {0:?} contains a non-alphabetic character")]
    NonAlphabetic(String),
}

/// A specialized `Result` type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;
