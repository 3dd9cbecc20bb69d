//! Lookup tables for the transliteration engine
//!
//! Two table kinds drive transliteration: a word table mapping whole
//! Urdu-script tokens to their Roman Urdu replacements, and a character
//! table mapping single Urdu code points to Latin substrings. Both are
//! built from an ordered sequence of `(key, value)` pairs folded left to
//! right, so a key that appears twice keeps its later value; the collision
//! is reported as a load-time warning rather than silently dropped.
//!
//! Validation happens here, once, at construction. A table that constructs
//! successfully can never make a transliteration call fail.

use std::collections::HashMap;

/// Error raised while constructing a lookup table.
///
/// These are configuration-time errors: they abort table loading at
/// startup and are never produced during transliteration itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A word entry with an empty key
    EmptyKey,
    /// An entry whose replacement is the empty string (would silently drop
    /// input characters)
    EmptyReplacement(String),
    /// A character entry whose key is not exactly one Unicode code point
    NotSingleCharacter(String),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::EmptyKey => write!(f, "Table entry has an empty key"),
            TableError::EmptyReplacement(key) => {
                write!(f, "Table entry '{}' has an empty replacement", key)
            }
            TableError::NotSingleCharacter(key) => {
                write!(
                    f,
                    "Character table key '{}' must be a single code point",
                    key
                )
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Whole-token lookup table: Urdu-script token → Roman Urdu replacement.
///
/// Keys match exactly at the code-point level; no case folding or Unicode
/// normalization is applied.
#[derive(Debug, Clone, Default)]
pub struct WordMap {
    entries: HashMap<String, String>,
}

impl WordMap {
    pub fn new() -> Self {
        WordMap {
            entries: HashMap::new(),
        }
    }

    /// Build a word table by folding `pairs` in order, last write winning.
    ///
    /// A repeated key overwrites the earlier definition and emits a warning
    /// on stderr. Empty keys and empty replacements are rejected.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries = HashMap::new();
        for (key, value) in pairs {
            if key.is_empty() {
                return Err(TableError::EmptyKey);
            }
            if value.is_empty() {
                return Err(TableError::EmptyReplacement(key));
            }
            if let Some(previous) = entries.insert(key.clone(), value) {
                eprintln!(
                    "Warning: duplicate word mapping '{}' overrides earlier value '{}'",
                    key, previous
                );
            }
        }
        Ok(WordMap { entries })
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Single code point lookup table: Urdu character → Latin substring.
///
/// The `char` key type guarantees each key is exactly one code point; a
/// replacement may be more than one Latin character (خ → "kh"). Characters
/// absent from the table pass through transliteration unchanged, which lets
/// mixed-script input keep its Latin segments, digits and punctuation.
#[derive(Debug, Clone, Default)]
pub struct CharMap {
    entries: HashMap<char, String>,
}

impl CharMap {
    pub fn new() -> Self {
        CharMap {
            entries: HashMap::new(),
        }
    }

    /// Build a character table by folding `pairs` in order, last write
    /// winning, with the same duplicate warning and empty-replacement
    /// rejection as [`WordMap::from_pairs`].
    pub fn from_pairs<I>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (char, String)>,
    {
        let mut entries = HashMap::new();
        for (key, value) in pairs {
            if value.is_empty() {
                return Err(TableError::EmptyReplacement(key.to_string()));
            }
            if let Some(previous) = entries.insert(key, value) {
                eprintln!(
                    "Warning: duplicate character mapping '{}' overrides earlier value '{}'",
                    key, previous
                );
            }
        }
        Ok(CharMap { entries })
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
