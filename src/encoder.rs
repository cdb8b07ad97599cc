//! The Soundex encoder.
//!
//! A Soundex code compresses a word into one letter and three digits: the
//! word's first letter kept verbatim (uppercased), then the digit classes of
//! its remaining consonants, zero-padded on the right. Words that sound alike
//! tend to collide on the same code, which is what makes the scheme useful
//! for matching names across spelling variations.
//!
//! The scan applies three rules beyond the raw letter-to-digit mapping:
//!
//! - Adjacent letters sharing a digit class collapse to a single digit, and
//!   the first letter's own class takes part in that comparison even though
//!   it is never emitted as a digit.
//! - Transparent letters (w, h, y) are invisible: they emit nothing and the
//!   duplicate comparison looks straight through them.
//! - Vowels emit nothing but reset the comparison, so the same class emits
//!   again after an intervening vowel.
//!
//! Encoding is pure and runs in one pass over the word.

use crate::classify::{digit_class, DigitClass, LetterKind};
use crate::error::{EncodeError, Result};

/// The fixed length of every Soundex code: one letter plus three digits.
pub const CODE_LENGTH: usize = 4;

/// Duplicate-suppression state for the encoding scan.
///
/// Tracks the digit class of the nearest preceding letter that still takes
/// part in suppression. Transparent letters leave the state untouched, a
/// vowel clears it, and every coded consonant replaces it, so "same class as
/// the previous consonant, with no vowel in between" reduces to an equality
/// check against the tracked class.
#[derive(Debug, Clone, Copy)]
struct SuppressionState {
    last_class: Option<DigitClass>,
}

impl SuppressionState {
    /// Seed the state with the first letter of the word.
    ///
    /// The first letter occupies the code's letter position and never emits a
    /// digit, but its class still suppresses an immediately following
    /// consonant of the same class. A first letter without a class (a vowel,
    /// or w/h/y) seeds the state empty.
    fn seeded(first: char) -> Self {
        Self {
            last_class: digit_class(first),
        }
    }

    /// Whether a consonant of `class` would duplicate the tracked class.
    fn suppresses(&self, class: DigitClass) -> bool {
        self.last_class == Some(class)
    }

    /// Advance the state machine by one letter.
    fn observe(&mut self, kind: LetterKind) {
        match kind {
            LetterKind::Coded(class) => self.last_class = Some(class),
            LetterKind::Vowel => self.last_class = None,
            LetterKind::Transparent => {}
        }
    }
}

/// Encode a word as a four-character Soundex code.
///
/// The word must be non-empty and consist entirely of ASCII letters; case is
/// irrelevant throughout. The whole word is validated before any encoding
/// happens, so a stray digit or space fails the call even when it sits past
/// the point where the code would have been complete.
///
/// # Errors
///
/// - [`EncodeError::EmptyInput`] when `word` is empty.
/// - [`EncodeError::NonAlphabetic`] when any character of `word` is not an
///   ASCII letter.
///
/// # Examples
///
/// ```
/// use libsoundex::encode;
///
/// assert_eq!(encode("Robert")?, "R163");
/// assert_eq!(encode("Rupert")?, "R163");
/// assert_eq!(encode("A")?, "A000");
/// assert!(encode("Mr.Smith").is_err());
/// # Ok::<(), libsoundex::EncodeError>(())
/// ```
pub fn encode(word: &str) -> Result<String> {
    let first = word.chars().next().ok_or(EncodeError::EmptyInput)?;
    if word.chars().any(|letter| !letter.is_ascii_alphabetic()) {
        return Err(EncodeError::NonAlphabetic(word.to_owned()));
    }

    let mut code = String::with_capacity(CODE_LENGTH);
    code.push(first.to_ascii_uppercase());

    let mut state = SuppressionState::seeded(first);
    for kind in word.chars().skip(1).filter_map(LetterKind::of) {
        if code.len() == CODE_LENGTH {
            break;
        }
        if let LetterKind::Coded(class) = kind {
            if !state.suppresses(class) {
                code.push(class.digit());
            }
        }
        state.observe(kind);
    }

    while code.len() < CODE_LENGTH {
        code.push('0');
    }

    Ok(code)
}

/// Check whether two words share a Soundex code.
///
/// This is the matching operation Soundex was designed for: surname lookups
/// that tolerate spelling variation. Both words are encoded and the codes
/// compared; a validation failure on either side propagates.
///
/// # Examples
///
/// ```
/// use libsoundex::sounds_like;
///
/// assert!(sounds_like("Robert", "Rupert")?);
/// assert!(sounds_like("Ashcraft", "Ashcroft")?);
/// assert!(!sounds_like("Robert", "Jackson")?);
/// # Ok::<(), libsoundex::EncodeError>(())
/// ```
pub fn sounds_like(a: &str, b: &str) -> Result<bool> {
    Ok(encode(a)? == encode(b)?)
}
