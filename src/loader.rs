//! Load transliteration tables from JSON files
//!
//! A table file is a flat JSON object of `"key": "replacement"` entries:
//!
//! ```json
//! {
//!     "@metadata": { "authors": ["..."] },
//!     "ہے": "hai",
//!     "آپ": "ap"
//! }
//! ```
//!
//! Keys starting with `@` are metadata and skipped. Non-string values are
//! skipped with a warning. For character tables every key must be exactly
//! one Unicode code point.
//!
//! JSON object parsing already collapses a duplicated key to its last
//! value, so duplicates inside one file are resolved before the table
//! fold sees them; the duplicate warning in [`crate::tables`] fires only
//! for collisions visible to the fold itself.

use crate::tables::{CharMap, TableError, WordMap};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a JSON table object into ordered (key, replacement) pairs.
fn pairs_from_json(content: &str, source: &str) -> Result<Vec<(String, String)>, String> {
    let json: Value = serde_json::from_str(content)
        .map_err(|e| format!("Failed to parse JSON from '{}': {}", source, e))?;

    let obj = json
        .as_object()
        .ok_or_else(|| format!("Invalid JSON in '{}': root must be an object", source))?;

    let mut pairs = Vec::new();
    for (key, value) in obj {
        // Skip metadata
        if key.starts_with('@') {
            continue;
        }

        if let Some(replacement) = value.as_str() {
            pairs.push((key.clone(), replacement.to_string()));
        } else {
            eprintln!("Warning: table entry '{}' is not a string, skipping", key);
        }
    }

    Ok(pairs)
}

/// Build a word table from JSON text.
pub fn word_map_from_json_str(content: &str, source: &str) -> Result<WordMap, String> {
    let pairs = pairs_from_json(content, source)?;
    WordMap::from_pairs(pairs).map_err(|e| format!("Invalid word table in '{}': {}", source, e))
}

/// Build a word table from a JSON file on disk.
pub fn word_map_from_file(path: &Path) -> Result<WordMap, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read file '{}': {}", path.display(), e))?;
    word_map_from_json_str(&content, &path.display().to_string())
}

/// Build a character table from JSON text.
///
/// Every key must be a single Unicode code point; anything longer belongs
/// in a word table instead.
pub fn char_map_from_json_str(content: &str, source: &str) -> Result<CharMap, String> {
    let pairs = pairs_from_json(content, source)?;

    let mut char_pairs = Vec::with_capacity(pairs.len());
    for (key, replacement) in pairs {
        let mut code_points = key.chars();
        let c = match (code_points.next(), code_points.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(format!(
                    "Invalid character table in '{}': {}",
                    source,
                    TableError::NotSingleCharacter(key)
                ));
            }
        };
        char_pairs.push((c, replacement));
    }

    CharMap::from_pairs(char_pairs)
        .map_err(|e| format!("Invalid character table in '{}': {}", source, e))
}

/// Build a character table from a JSON file on disk.
pub fn char_map_from_file(path: &Path) -> Result<CharMap, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read file '{}': {}", path.display(), e))?;
    char_map_from_json_str(&content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_map_from_json() {
        let json = r#"{ "ہے": "hai", "آپ": "ap" }"#;
        let map = word_map_from_json_str(json, "test").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("ہے"), Some("hai"));
    }

    #[test]
    fn test_metadata_keys_are_skipped() {
        let json = r#"{ "@metadata": { "authors": ["someone"] }, "ہے": "hai" }"#;
        let map = word_map_from_json_str(json, "test").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("@metadata"), None);
    }

    #[test]
    fn test_non_string_values_are_skipped() {
        let json = r#"{ "ہے": "hai", "bad": 42 }"#;
        let map = word_map_from_json_str(json, "test").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("bad"), None);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = word_map_from_json_str("{ not json", "test");
        assert!(result.unwrap_err().contains("Failed to parse JSON"));
    }

    #[test]
    fn test_non_object_root_is_an_error() {
        let result = word_map_from_json_str(r#"["ہے"]"#, "test");
        assert!(result.unwrap_err().contains("root must be an object"));
    }

    #[test]
    fn test_empty_replacement_is_an_error() {
        let result = word_map_from_json_str(r#"{ "ہے": "" }"#, "test");
        assert!(result.unwrap_err().contains("empty replacement"));
    }

    #[test]
    fn test_char_map_from_json() {
        let json = r#"{ "ک": "k", "خ": "kh" }"#;
        let map = char_map_from_json_str(json, "test").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get('خ'), Some("kh"));
    }

    #[test]
    fn test_char_map_rejects_multi_code_point_key() {
        let json = r#"{ "ہے": "hai" }"#;
        let result = char_map_from_json_str(json, "test");
        assert!(result.unwrap_err().contains("single code point"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = word_map_from_file(Path::new("/no/such/table.json"));
        assert!(result.unwrap_err().contains("Failed to read file"));
    }
}
