//! End-to-end pipeline: informal English → Urdu → Roman Urdu
//!
//! Composes the three stages the application performs: shorthand
//! normalization, machine translation into Urdu script, and rule-based
//! transliteration into Roman Urdu. A translation failure propagates as an
//! [`MtError`](crate::mt::MtError) and the transliteration engine is never
//! invoked for that input.

use crate::Transliterator;
use crate::mt::error::MtResult;
use crate::mt::preprocess::InformalNormalizer;
use crate::mt::translator::MachineTranslator;

/// Translate `text` from `source_locale` into Urdu and render it as Roman
/// Urdu.
pub async fn translate_to_roman_urdu(
    translator: &dyn MachineTranslator,
    engine: &Transliterator,
    text: &str,
    source_locale: &str,
) -> MtResult<String> {
    let normalizer = InformalNormalizer::new();
    let normalized = normalizer.normalize(text);

    let urdu = translator.translate(&normalized, source_locale, "ur").await?;

    Ok(engine.transliterate(&urdu))
}
