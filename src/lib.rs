pub mod loader;
pub mod mt;
pub mod tables;
pub mod urdu;

// Re-export table types for convenient access
pub use tables::{CharMap, TableError, WordMap};

/// Rule-based Urdu script to Roman Urdu transliterator.
///
/// Lookup is two-tiered and token-by-token: a whitespace-delimited token is
/// first looked up verbatim in the word table; only when that misses is it
/// rendered code point by code point through the character table, with
/// unmapped code points passing through unchanged. A token present in the
/// word table is replaced wholesale, never partially.
///
/// Both tables are injected at construction and never mutated afterwards, so
/// a `Transliterator` can be shared freely across threads.
pub struct Transliterator {
    word_map: WordMap,
    char_map: CharMap,
}

impl Transliterator {
    pub fn new(word_map: WordMap, char_map: CharMap) -> Self {
        Transliterator { word_map, char_map }
    }

    /// Construct a transliterator over the built-in Urdu tables.
    pub fn with_default_tables() -> Self {
        Transliterator {
            word_map: urdu::default_word_map(),
            char_map: urdu::default_char_map(),
        }
    }

    pub fn word_map(&self) -> &WordMap {
        &self.word_map
    }

    pub fn char_map(&self) -> &CharMap {
        &self.char_map
    }

    /// Transliterate `text` to its Roman Urdu rendering.
    ///
    /// The input is split on runs of whitespace; each token is resolved
    /// independently and the results are joined with single spaces, in the
    /// original order. Every input is valid: an empty string yields an empty
    /// string, and text in scripts the tables don't cover (Latin letters,
    /// digits, punctuation) comes back unchanged.
    ///
    /// Lookup is exact at the code-point level. No Unicode normalization is
    /// applied; callers that need NFC/NFD folding must normalize before
    /// calling.
    pub fn transliterate(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|token| self.transliterate_token(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn transliterate_token(&self, token: &str) -> String {
        // Whole-word match wins unconditionally over character mapping.
        if let Some(replacement) = self.word_map.get(token) {
            return replacement.to_string();
        }
        let mut result = String::new();
        for c in token.chars() {
            match self.char_map.get(c) {
                Some(mapped) => result.push_str(mapped),
                None => result.push(c),
            }
        }
        result
    }
}
