//! Hugging Face Inference API provider for machine translation
//!
//! Calls hosted Helsinki-NLP MarianMT models (`opus-mt-{src}-{tgt}`)
//! through the Hugging Face Inference API. The model id is derived from the
//! language pair, so the same provider serves `en → ur` and any other pair
//! with a published opus-mt checkpoint.
//!
//! # Authentication
//!
//! The provider loads the access token from the `HF_API_TOKEN` environment
//! variable. Obtain one from https://huggingface.co/settings/tokens
//!
//! # Example
//!
//! ```ignore
//! use roman_urdu::mt::{HuggingFaceProvider, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = HuggingFaceProvider::from_env()?;
//!     let urdu = provider.translate("how are you", "en", "ur").await?;
//!     println!("{}", urdu);
//!     Ok(())
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::{MachineTranslator, normalize_locale, validate_locale};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// One translation in an Inference API response
#[derive(Debug, Deserialize)]
struct TranslationOutput {
    translation_text: String,
}

/// Hugging Face Inference API provider over Helsinki-NLP opus-mt models
#[derive(Clone)]
pub struct HuggingFaceProvider {
    /// Access token for authentication
    api_token: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL for the Inference API
    base_url: String,
}

impl HuggingFaceProvider {
    /// Maximum number of texts per API request
    const MAX_BATCH_SIZE: usize = 32;

    /// Maximum characters per string; MarianMT truncates long inputs, so
    /// oversized text is rejected instead of silently clipped
    const MAX_CHARS_PER_STRING: usize = 5_000;

    /// Create a provider with an explicit access token.
    pub fn new(api_token: String) -> MtResult<Self> {
        if api_token.trim().is_empty() {
            return Err(MtError::ConfigError(
                "API token cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_token,
            client,
            base_url: "https://api-inference.huggingface.co/models".to_string(),
        })
    }

    /// Create a provider from the `HF_API_TOKEN` environment variable.
    pub fn from_env() -> MtResult<Self> {
        let api_token = std::env::var("HF_API_TOKEN").map_err(|_| {
            MtError::ConfigError("HF_API_TOKEN environment variable not set".to_string())
        })?;

        Self::new(api_token)
    }

    /// Derive the opus-mt model id for a language pair.
    fn model_id(source_locale: &str, target_locale: &str) -> String {
        format!(
            "Helsinki-NLP/opus-mt-{}-{}",
            normalize_locale(source_locale),
            normalize_locale(target_locale)
        )
    }

    /// Chunk a batch of texts into API-safe sizes.
    fn chunk_batch(texts: &[String]) -> Vec<&[String]> {
        texts.chunks(Self::MAX_BATCH_SIZE).collect()
    }

    /// Translate a single chunk of texts (≤ MAX_BATCH_SIZE) via the API.
    async fn translate_chunk(
        &self,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>> {
        validate_locale(source_locale)?;
        validate_locale(target_locale)?;

        let url = format!(
            "{}/{}",
            self.base_url,
            Self::model_id(source_locale, target_locale)
        );

        // wait_for_model holds the request while a cold model spins up
        // instead of returning 503
        let body = json!({
            "inputs": texts,
            "options": { "wait_for_model": true }
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                MtError::ConfigError(format!("API client error ({}): {}", status, error_text))
            } else {
                MtError::TranslationError(format!("API server error ({}): {}", status, error_text))
            });
        }

        let translations: Vec<TranslationOutput> = response.json().await.map_err(|e| {
            MtError::TranslationError(format!("Failed to parse API response: {}", e))
        })?;

        if translations.len() != texts.len() {
            return Err(MtError::TranslationError(format!(
                "API returned {} translations for {} inputs",
                translations.len(),
                texts.len()
            )));
        }

        Ok(translations
            .into_iter()
            .map(|t| t.translation_text)
            .collect())
    }
}

impl std::fmt::Debug for HuggingFaceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceProvider")
            .field("api_token", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for HuggingFaceProvider {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        validate_locale(source_locale)?;
        validate_locale(target_locale)?;

        if text.is_empty() {
            return Ok(String::new());
        }

        if text.len() > Self::MAX_CHARS_PER_STRING {
            return Err(MtError::TranslationError(format!(
                "Text exceeds maximum length of {} characters",
                Self::MAX_CHARS_PER_STRING
            )));
        }

        let results = self
            .translate_chunk(&[text.to_string()], source_locale, target_locale)
            .await?;

        results
            .into_iter()
            .next()
            .ok_or_else(|| MtError::TranslationError("API returned no translation".to_string()))
    }

    async fn translate_batch(
        &self,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut results = Vec::with_capacity(texts.len());
        for chunk in Self::chunk_batch(texts) {
            let translated = self
                .translate_chunk(chunk, source_locale, target_locale)
                .await?;
            results.extend(translated);
        }
        Ok(results)
    }

    fn provider_name(&self) -> &str {
        "Hugging Face Inference API"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_rejected() {
        let result = HuggingFaceProvider::new("".to_string());
        match result {
            Err(MtError::ConfigError(msg)) => assert!(msg.contains("token")),
            _ => panic!("Expected ConfigError"),
        }

        assert!(HuggingFaceProvider::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_model_id_derivation() {
        assert_eq!(
            HuggingFaceProvider::model_id("en", "ur"),
            "Helsinki-NLP/opus-mt-en-ur"
        );
        assert_eq!(
            HuggingFaceProvider::model_id("en-US", "ur-PK"),
            "Helsinki-NLP/opus-mt-en-ur"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let provider = HuggingFaceProvider::new("hf_secret".to_string()).unwrap();
        let debug = format!("{:?}", provider);
        assert!(!debug.contains("hf_secret"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_chunk_batch_splits_large_batches() {
        let texts: Vec<String> = (0..70).map(|i| format!("text {}", i)).collect();
        let chunks = HuggingFaceProvider::chunk_batch(&texts);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 32);
        assert_eq!(chunks[2].len(), 6);
    }

    #[test]
    fn test_provider_name() {
        let provider = HuggingFaceProvider::new("hf_token".to_string()).unwrap();
        assert_eq!(provider.provider_name(), "Hugging Face Inference API");
    }
}
