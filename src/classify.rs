//! Letter classification for Soundex encoding.
//!
//! Soundex partitions the 26 ASCII letters into three phonetic roles:
//!
//! - **Coded consonants** (18 letters) carry one of six [`DigitClass`]es and
//!   contribute digits to the code body.
//! - **Vowels** (a, e, i, o, u) emit nothing but separate consonant runs, so
//!   a repeated digit class is emitted again after a vowel.
//! - **Transparent letters** (w, h, y) emit nothing and are invisible to
//!   duplicate suppression: the scan compares straight through them.
//!
//! All classification is case-insensitive. The letter-to-class mapping is a
//! process-wide immutable constant; every function here is pure.

/// One of the six Soundex digit classes.
///
/// Each class groups consonants that are articulated similarly and therefore
/// share a code digit. The variant names follow the usual phonetic labels for
/// the groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum DigitClass {
    /// b, f, p, v: digit '1'.
    Labial,
    /// c, g, j, k, q, s, x, z (gutturals and sibilants): digit '2'.
    Guttural,
    /// d, t: digit '3'.
    Dental,
    /// l: digit '4'.
    Lateral,
    /// m, n: digit '5'.
    Nasal,
    /// r: digit '6'.
    Rhotic,
}

impl DigitClass {
    /// All six classes, in digit order.
    pub const ALL: [DigitClass; 6] = [
        DigitClass::Labial,
        DigitClass::Guttural,
        DigitClass::Dental,
        DigitClass::Lateral,
        DigitClass::Nasal,
        DigitClass::Rhotic,
    ];

    /// The digit symbol this class contributes to a code.
    pub fn digit(self) -> char {
        match self {
            DigitClass::Labial => '1',
            DigitClass::Guttural => '2',
            DigitClass::Dental => '3',
            DigitClass::Lateral => '4',
            DigitClass::Nasal => '5',
            DigitClass::Rhotic => '6',
        }
    }

    /// Get a human-readable name for this class
    pub fn name(self) -> &'static str {
        match self {
            DigitClass::Labial => "labial",
            DigitClass::Guttural => "guttural",
            DigitClass::Dental => "dental",
            DigitClass::Lateral => "lateral",
            DigitClass::Nasal => "nasal",
            DigitClass::Rhotic => "rhotic",
        }
    }

    /// The lowercase letters belonging to this class.
    pub fn letters(self) -> &'static str {
        match self {
            DigitClass::Labial => "bfpv",
            DigitClass::Guttural => "cgjkqsxz",
            DigitClass::Dental => "dt",
            DigitClass::Lateral => "l",
            DigitClass::Nasal => "mn",
            DigitClass::Rhotic => "r",
        }
    }
}

impl std::fmt::Display for DigitClass {
    /// Formats as the digit symbol, the class's representation inside a code.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digit())
    }
}

/// The phonetic role a letter plays during the encoding scan.
///
/// This is the classification the encoder's loop consumes: it decides whether
/// a letter emits a digit, breaks duplicate suppression, or is skipped
/// entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum LetterKind {
    /// A consonant carrying a digit class.
    Coded(DigitClass),
    /// A true vowel: emits nothing and breaks duplicate suppression.
    Vowel,
    /// A transparent letter (w, h, y): emits nothing and leaves duplicate
    /// suppression untouched.
    Transparent,
}

impl LetterKind {
    /// Classify a letter, case-insensitively.
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use libsoundex::classify::{DigitClass, LetterKind};
    ///
    /// assert_eq!(LetterKind::of('B'), Some(LetterKind::Coded(DigitClass::Labial)));
    /// assert_eq!(LetterKind::of('a'), Some(LetterKind::Vowel));
    /// assert_eq!(LetterKind::of('h'), Some(LetterKind::Transparent));
    /// assert_eq!(LetterKind::of('4'), None);
    /// ```
    pub fn of(letter: char) -> Option<LetterKind> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        if is_vowel(letter) {
            Some(LetterKind::Vowel)
        } else if is_transparent(letter) {
            Some(LetterKind::Transparent)
        } else {
            // The 18 remaining letters all carry a digit class.
            digit_class(letter).map(LetterKind::Coded)
        }
    }
}

/// Check if a letter is one of the five vowels a, e, i, o, u (either case).
#[inline]
pub fn is_vowel(letter: char) -> bool {
    matches!(
        letter,
        'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U'
    )
}

/// Check if a letter is an ASCII consonant.
///
/// Everything alphabetic that is not a vowel counts, so w, h, and y are
/// consonants here even though they never contribute a digit.
#[inline]
pub fn is_consonant(letter: char) -> bool {
    letter.is_ascii_alphabetic() && !is_vowel(letter)
}

/// Check if a letter is transparent: w, h, or y (either case).
#[inline]
pub fn is_transparent(letter: char) -> bool {
    matches!(letter, 'w' | 'h' | 'y' | 'W' | 'H' | 'Y')
}

/// Look up the digit class of a letter, case-insensitively.
///
/// Returns `None` for vowels, transparent letters, and anything that is not
/// an ASCII letter.
pub fn digit_class(letter: char) -> Option<DigitClass> {
    match letter.to_ascii_lowercase() {
        'b' | 'f' | 'p' | 'v' => Some(DigitClass::Labial),
        'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => Some(DigitClass::Guttural),
        'd' | 't' => Some(DigitClass::Dental),
        'l' => Some(DigitClass::Lateral),
        'm' | 'n' => Some(DigitClass::Nasal),
        'r' => Some(DigitClass::Rhotic),
        _ => None,
    }
}
