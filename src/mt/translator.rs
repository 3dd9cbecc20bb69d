//! Machine translation trait and locale utilities
//!
//! Defines the `MachineTranslator` trait so the rest of the crate never
//! couples to a specific MT backend. Providers do I/O, so the trait is
//! async; the mock provider satisfies it without any network access.

use crate::mt::error::{MtError, MtResult};
use async_trait::async_trait;

/// Generic trait for machine translation providers
///
/// The pipeline only ever talks to this trait. Implementations either call
/// a real service over HTTP or compute a deterministic stand-in result.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate a single text from `source_locale` to `target_locale`.
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String>;

    /// Translate several texts in one operation.
    ///
    /// Guarantees: output order matches input order and output length
    /// equals input length.
    async fn translate_batch(
        &self,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>>;

    /// Identify this provider for logging and error reporting.
    fn provider_name(&self) -> &str;
}

/// Normalize a locale code to its base language: `en-US` → `en`.
pub fn normalize_locale(locale: &str) -> String {
    locale.split('-').next().unwrap_or(locale).to_lowercase()
}

/// Validate that a locale code is non-empty and contains only
/// alphanumerics, hyphens and underscores.
pub fn validate_locale(locale: &str) -> MtResult<()> {
    if locale.is_empty() {
        return Err(MtError::InvalidLocale("locale code is empty".to_string()));
    }

    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(MtError::InvalidLocale(format!(
            "invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("en-US"), "en");
        assert_eq!(normalize_locale("ur-PK"), "ur");
        assert_eq!(normalize_locale("ur"), "ur");
        assert_eq!(normalize_locale("EN"), "en");
    }

    #[test]
    fn test_validate_locale_accepts_valid_codes() {
        assert!(validate_locale("en").is_ok());
        assert!(validate_locale("ur-PK").is_ok());
        assert!(validate_locale("de_DE").is_ok());
    }

    #[test]
    fn test_validate_locale_rejects_invalid_codes() {
        assert!(validate_locale("").is_err());
        assert!(validate_locale("en@US").is_err());
        assert!(validate_locale("ur!").is_err());
    }

    #[test]
    fn test_validate_locale_error_kind() {
        match validate_locale("en@US") {
            Err(MtError::InvalidLocale(msg)) => assert!(msg.contains("invalid characters")),
            _ => panic!("Expected InvalidLocale error"),
        }
    }
}
