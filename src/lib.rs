//! # libsoundex
//!
//! Soundex phonetic encoding for approximate name matching.
//!
//! Soundex collapses a word into a fixed four-character key (one letter and
//! three digits) chosen so that names that sound alike land on the same key
//! despite spelling differences ("Robert" and "Rupert" both encode to
//! `R163`). The scheme was built for surname indexing in records systems and
//! is still the classic first step for census, genealogy, and directory
//! lookups.
//!
//! The encoding implemented here is the American Soundex system:
//!
//! > Russell, Robert C. US Patents 1,261,167 (1918) and 1,435,663 (1922);
//! > described in Knuth, "The Art of Computer Programming", Vol. 3, §6.
//!
//! ## Example
//!
//! ```rust
//! use libsoundex::{encode, sounds_like};
//!
//! assert_eq!(encode("Washington")?, "W252");
//! assert_eq!(encode("Gutierrez")?, "G362");
//! assert!(sounds_like("Tymczak", "Tymcak")?);
//! # Ok::<(), libsoundex::EncodeError>(())
//! ```
//!
//! Invalid input, meaning an empty word or any character outside ASCII
//! letters, is rejected with an [`EncodeError`] rather than silently skipped:
//!
//! ```rust
//! use libsoundex::{encode, EncodeError};
//!
//! assert_eq!(encode(""), Err(EncodeError::EmptyInput));
//! assert!(matches!(encode("Mr.Smith"), Err(EncodeError::NonAlphabetic(_))));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod encoder;
pub mod error;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use classify::{digit_class, is_consonant, is_transparent, is_vowel, DigitClass, LetterKind};
pub use encoder::{encode, sounds_like, CODE_LENGTH};
pub use error::EncodeError;
