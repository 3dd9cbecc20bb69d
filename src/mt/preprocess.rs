//! Informal English normalization
//!
//! Chat shorthand ("u", "plz", "gr8") confuses translation models trained
//! on written prose, so it is expanded to full words before the text is
//! sent upstream. This is strictly a pre-translation concern: the
//! transliteration tables never contain shorthand entries.
//!
//! Matching is whole-word and case-insensitive; replacement output is the
//! expansion as authored. Anything not in the shorthand table is left
//! untouched.

use regex::Regex;
use std::collections::HashMap;

/// Built-in shorthand expansions, looked up lowercase.
pub const SHORTHAND_PAIRS: &[(&str, &str)] = &[
    ("u", "you"),
    ("r", "are"),
    ("ur", "your"),
    ("plz", "please"),
    ("pls", "please"),
    ("thx", "thanks"),
    ("gr8", "great"),
    ("b4", "before"),
    ("btw", "by the way"),
];

/// Expands informal English shorthand into full words.
pub struct InformalNormalizer {
    word_pattern: Regex,
    replacements: HashMap<String, String>,
}

impl InformalNormalizer {
    /// Create a normalizer over the built-in shorthand table.
    pub fn new() -> Self {
        Self::with_replacements(
            SHORTHAND_PAIRS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    /// Create a normalizer over a custom shorthand table. Keys are matched
    /// case-insensitively, so they should be supplied lowercase.
    pub fn with_replacements<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        InformalNormalizer {
            word_pattern: Regex::new(r"\b\w+\b").expect("word pattern is valid"),
            replacements: pairs.into_iter().collect(),
        }
    }

    /// Replace every shorthand word in `text` with its expansion.
    pub fn normalize(&self, text: &str) -> String {
        self.word_pattern
            .replace_all(text, |caps: &regex::Captures| {
                let word = &caps[0];
                match self.replacements.get(&word.to_lowercase()) {
                    Some(replacement) => replacement.clone(),
                    None => word.to_string(),
                }
            })
            .to_string()
    }
}

impl Default for InformalNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
