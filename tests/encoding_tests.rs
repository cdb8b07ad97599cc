//! End-to-end tests for the Soundex encoder.
//!
//! Scenarios build up from single-letter inputs to the canonical census
//! surname codes, then cover input validation and phonetic comparison.

use libsoundex::{encode, sounds_like, DigitClass, EncodeError, CODE_LENGTH};

fn code(word: &str) -> String {
    encode(word).unwrap()
}

#[test]
fn test_retains_sole_letter_of_one_letter_word() {
    assert_eq!(code("A"), "A000");
    assert_eq!(code("I"), "I000");
}

#[test]
fn test_pads_with_zeros_to_code_length() {
    assert_eq!(code("Ab"), "A100");
    assert_eq!(code("Ab").len(), CODE_LENGTH);
}

#[test]
fn test_replaces_consonants_with_digits() {
    assert_eq!(code("Ab"), "A100");
    assert_eq!(code("Ac"), "A200");
    assert_eq!(code("Ad"), "A300");
    assert_eq!(code("Al"), "A400");
    assert_eq!(code("Am"), "A500");
    assert_eq!(code("Ar"), "A600");
    assert_eq!(code("Fm"), "F500");
}

#[test]
fn test_accumulates_digits_in_order() {
    assert_eq!(code("Acdl"), "A234");
}

#[test]
fn test_every_letter_in_a_class_maps_to_its_digit() {
    for class in DigitClass::ALL {
        for letter in class.letters().chars() {
            let word = format!("A{}", letter);
            let expected = format!("A{}00", class.digit());
            assert_eq!(code(&word), expected, "letter {:?}", letter);
        }
    }
}

#[test]
fn test_skips_vowels_and_transparent_letters() {
    assert_eq!(code("Baeiouhycdl"), "B234");
}

#[test]
fn test_ignores_letter_case_past_the_first_letter() {
    assert_eq!(code("BCDL"), code("Bcdl"));
    assert_eq!(code("BaAeEiIoOuUhHyYcdl"), "B234");
}

#[test]
fn test_uppercases_first_letter() {
    assert_eq!(code("abcd"), "A123");
}

#[test]
fn test_combines_adjacent_same_class_consonants() {
    assert_eq!(code("Abfcgdt"), "A123");
    assert_eq!(code("Abdtl"), "A134");
}

#[test]
fn test_first_letter_suppresses_a_matching_first_digit() {
    assert_eq!(code("Bf"), "B000");
    assert_eq!(code("Dd"), "D000");
    assert_eq!(code("Mm"), "M000");
    assert_eq!(code("Bbcd"), "B230");
}

#[test]
fn test_vowel_separates_duplicate_digits() {
    assert_eq!(code("Jbob"), "J110");
}

#[test]
fn test_transparent_letters_do_not_separate_duplicates() {
    // The 'h' between 's' and 'c' does not break the run of class 2.
    assert_eq!(code("Ashcraft"), "A261");
}

#[test]
fn test_stops_after_three_digits() {
    assert_eq!(code("Dcdlb"), "D234");
    assert_eq!(code("Dcdlb").len(), CODE_LENGTH);
    assert_eq!(code("Lukasiewicz"), "L222");
}

#[test]
fn test_census_surname_codes() {
    let expected = [
        ("Robert", "R163"),
        ("Rupert", "R163"),
        ("Ashcraft", "A261"),
        ("Ashcroft", "A261"),
        ("Tymczak", "T522"),
        ("Pfister", "P236"),
        ("Honeyman", "H555"),
        ("Jackson", "J250"),
        ("Washington", "W252"),
        ("Lee", "L000"),
        ("Gutierrez", "G362"),
        ("Lloyd", "L300"),
        ("Young", "Y520"),
        ("White", "W300"),
        ("Wheaton", "W350"),
        ("VanDeusen", "V532"),
        ("Euler", "E460"),
        ("Gauss", "G200"),
        ("Hilbert", "H416"),
        ("Knuth", "K530"),
        ("Lukasiewicz", "L222"),
        ("Schmidt", "S530"),
    ];

    for (surname, surname_code) in expected {
        assert_eq!(code(surname), surname_code, "surname {:?}", surname);
    }
}

#[test]
fn test_rejects_empty_input() {
    assert_eq!(encode(""), Err(EncodeError::EmptyInput));
}

#[test]
fn test_rejects_non_alphabetic_input() {
    let invalid = [
        "123",
        "Mr.Smith",
        "Some sentence with spaces",
        ":/',f",
    ];

    for word in invalid {
        assert_eq!(
            encode(word),
            Err(EncodeError::NonAlphabetic(word.to_string())),
            "word {:?}",
            word
        );
    }
}

#[test]
fn test_rejects_words_validated_past_the_digit_limit() {
    // The '4' sits beyond the point where three digits were already
    // accumulated; validation still covers the whole word.
    assert_eq!(
        encode("Normalwordbutnumber4"),
        Err(EncodeError::NonAlphabetic("Normalwordbutnumber4".to_string()))
    );
}

#[test]
fn test_sounds_like_matches_equal_codes() {
    assert!(sounds_like("Robert", "Rupert").unwrap());
    assert!(sounds_like("Ashcraft", "Ashcroft").unwrap());
    assert!(sounds_like("Tymczak", "Tymcak").unwrap());
    assert!(!sounds_like("Robert", "Jackson").unwrap());
}

#[test]
fn test_sounds_like_propagates_errors() {
    assert_eq!(sounds_like("", "Robert"), Err(EncodeError::EmptyInput));
    assert_eq!(
        sounds_like("Robert", "Mr.Smith"),
        Err(EncodeError::NonAlphabetic("Mr.Smith".to_string()))
    );
}
