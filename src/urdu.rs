//! Built-in Urdu transliteration tables
//!
//! The word table carries common conversational tokens whose conventional
//! Roman Urdu spelling differs from what letter-by-letter mapping would
//! produce. The character table covers the Urdu alphabet — consonants,
//! vowels and semivowels, the extended Arabic-Indic digits, sentence
//! punctuation and the common short-vowel diacritics.
//!
//! Both tables are open-ended: callers can load replacements from JSON via
//! [`crate::loader`] instead of using these defaults.

use crate::tables::{CharMap, WordMap};

/// Whole-word entries, ordered; a later entry for the same key would win.
pub const WORD_PAIRS: &[(&str, &str)] = &[
    ("ہیلو", "salam"),
    ("آپ", "ap"),
    ("کیسے", "kese"),
    ("ہیں", "hain"),
    ("ہے", "hai"),
    ("ہوں", "hoon"),
    ("میں", "mein"),
    ("کرتا", "karta"),
    ("کرتی", "kartii"),
    ("تم", "tum"),
    ("کیسا", "kaisa"),
    ("ہو", "ho"),
    ("کیا", "kya"),
    ("نہیں", "nahin"),
    ("شکریہ", "shukriya"),
    ("اچھا", "acha"),
    ("ٹھیک", "theek"),
];

/// Single code point entries covering the Urdu alphabet.
pub const CHAR_PAIRS: &[(char, &str)] = &[
    // Consonants
    ('ب', "b"),
    ('پ', "p"),
    ('ت', "t"),
    ('ٹ', "t"),
    ('ث', "s"),
    ('ج', "j"),
    ('چ', "ch"),
    ('ح', "h"),
    ('خ', "kh"),
    ('د', "d"),
    ('ڈ', "d"),
    ('ذ', "z"),
    ('ر', "r"),
    ('ڑ', "r"),
    ('ز', "z"),
    ('ژ', "zh"),
    ('س', "s"),
    ('ش', "sh"),
    ('ص', "s"),
    ('ض', "z"),
    ('ط', "t"),
    ('ظ', "z"),
    ('غ', "gh"),
    ('ف', "f"),
    ('ق', "q"),
    ('ک', "k"),
    ('گ', "g"),
    ('ل', "l"),
    ('م', "m"),
    ('ن', "n"),
    ('ں', "n"),
    ('ہ', "h"),
    ('ھ', "h"),
    // Vowels, semivowels and carriers
    ('ا', "a"),
    ('آ', "aa"),
    ('أ', "a"),
    ('ع', "a"),
    ('و', "o"),
    ('ؤ', "o"),
    ('ی', "y"),
    ('ئ', "y"),
    ('ے', "e"),
    ('ۓ', "e"),
    ('ء', "'"),
    ('ۂ', "h"),
    // Short-vowel diacritics
    ('\u{064e}', "a"),
    ('\u{0650}', "i"),
    ('\u{064f}', "u"),
    // Extended Arabic-Indic digits
    ('۰', "0"),
    ('۱', "1"),
    ('۲', "2"),
    ('۳', "3"),
    ('۴', "4"),
    ('۵', "5"),
    ('۶', "6"),
    ('۷', "7"),
    ('۸', "8"),
    ('۹', "9"),
    // Punctuation
    ('۔', "."),
    ('،', ","),
    ('؟', "?"),
    ('؛', ";"),
];

pub fn default_word_map() -> WordMap {
    WordMap::from_pairs(
        WORD_PAIRS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
    .expect("built-in word table is valid")
}

pub fn default_char_map() -> CharMap {
    CharMap::from_pairs(CHAR_PAIRS.iter().map(|(k, v)| (*k, v.to_string())))
        .expect("built-in character table is valid")
}
