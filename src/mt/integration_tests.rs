//! Integration tests for the full translation pipeline
//!
//! Every test runs against the mock translator, so the suite needs no
//! network access or API tokens.

use crate::Transliterator;
use crate::mt::error::MtError;
use crate::mt::mock::{MockMode, MockTranslator};
use crate::mt::pipeline::translate_to_roman_urdu;
use std::collections::HashMap;

fn urdu_mock() -> MockTranslator {
    let mut map = HashMap::new();
    map.insert(
        ("how are you".to_string(), "ur".to_string()),
        "آپ کیسے ہیں".to_string(),
    );
    map.insert(
        ("hello".to_string(), "ur".to_string()),
        "ہیلو".to_string(),
    );
    MockTranslator::new(MockMode::Mappings(map))
}

#[tokio::test]
async fn test_pipeline_full_translation() {
    let engine = Transliterator::with_default_tables();
    let result = translate_to_roman_urdu(&urdu_mock(), &engine, "how are you", "en")
        .await
        .unwrap();
    assert_eq!(result, "ap kese hain");
}

#[tokio::test]
async fn test_pipeline_expands_shorthand_before_translation() {
    // "how r u" must reach the translator as "how are you", otherwise the
    // mapping misses and the suffix fallback would show through.
    let engine = Transliterator::with_default_tables();
    let result = translate_to_roman_urdu(&urdu_mock(), &engine, "how r u", "en")
        .await
        .unwrap();
    assert_eq!(result, "ap kese hain");
}

#[tokio::test]
async fn test_pipeline_single_word() {
    let engine = Transliterator::with_default_tables();
    let result = translate_to_roman_urdu(&urdu_mock(), &engine, "hello", "en")
        .await
        .unwrap();
    assert_eq!(result, "salam");
}

#[tokio::test]
async fn test_pipeline_propagates_translation_failure() {
    let engine = Transliterator::with_default_tables();
    let failing = MockTranslator::new(MockMode::Error("service down".to_string()));
    let result = translate_to_roman_urdu(&failing, &engine, "hello", "en").await;
    match result {
        Err(MtError::TranslationError(msg)) => assert_eq!(msg, "service down"),
        _ => panic!("Expected TranslationError"),
    }
}

#[tokio::test]
async fn test_pipeline_with_noop_translator_transliterates_directly() {
    // A NoOp translator hands the input straight to the engine, which is
    // how already-Urdu text flows through the pipeline.
    let engine = Transliterator::with_default_tables();
    let noop = MockTranslator::new(MockMode::NoOp);
    let result = translate_to_roman_urdu(&noop, &engine, "آپ کیسے ہیں", "ur")
        .await
        .unwrap();
    assert_eq!(result, "ap kese hain");
}

#[tokio::test]
async fn test_pipeline_empty_input() {
    let engine = Transliterator::with_default_tables();
    let noop = MockTranslator::new(MockMode::NoOp);
    let result = translate_to_roman_urdu(&noop, &engine, "", "en").await.unwrap();
    assert_eq!(result, "");
}

#[tokio::test]
async fn test_pipeline_unmapped_translation_passes_through() {
    // The suffix fallback yields Latin text the tables don't cover; the
    // engine must return it unchanged rather than dropping anything.
    let engine = Transliterator::with_default_tables();
    let suffix = MockTranslator::new(MockMode::Suffix);
    let result = translate_to_roman_urdu(&suffix, &engine, "goodbye", "en")
        .await
        .unwrap();
    assert_eq!(result, "goodbye_ur");
}
