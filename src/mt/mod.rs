/// Machine Translation Layer
///
/// The transliteration engine consumes Urdu-script text; this module is the
/// boundary to the system that produces it. It supplies English-to-Urdu
/// translation through a provider abstraction plus the upstream text
/// normalization that precedes translation.
///
/// # Overview
///
/// 1. **Informal Normalizer** - Expands English chat shorthand ("u" → "you")
///    before the text reaches the translation service
/// 2. **MT Trait & Providers** - Generic trait for MT systems with a Hugging
///    Face Inference API implementation (MarianMT opus-mt models)
/// 3. **Mock Translator** - Deterministic, API-free provider for tests
/// 4. **Pipeline** - Composes normalize → translate → transliterate
///
/// # Example
///
/// ```ignore
/// use roman_urdu::Transliterator;
/// use roman_urdu::mt::{HuggingFaceProvider, translate_to_roman_urdu};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let provider = HuggingFaceProvider::from_env()?;
///     let engine = Transliterator::with_default_tables();
///
///     let roman = translate_to_roman_urdu(&provider, &engine, "how r u", "en").await?;
///     println!("{}", roman);
///     Ok(())
/// }
/// ```
pub mod error;
pub mod huggingface;
pub mod mock;
pub mod pipeline;
pub mod preprocess;
pub mod translator;

#[cfg(test)]
mod integration_tests;

pub use error::{MtError, MtResult};
pub use huggingface::HuggingFaceProvider;
pub use mock::{MockMode, MockTranslator};
pub use pipeline::translate_to_roman_urdu;
pub use preprocess::InformalNormalizer;
pub use translator::MachineTranslator;
