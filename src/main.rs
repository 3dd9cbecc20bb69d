use clap::{Arg, Command};
use roman_urdu::Transliterator;
use roman_urdu::loader;
use roman_urdu::mt::{
    HuggingFaceProvider, InformalNormalizer, MachineTranslator, MockMode, MockTranslator,
};
use std::env;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("roman-urdu")
        .version("0.1.0")
        .about("English to Roman Urdu translation CLI")
        .arg(
            Arg::new("text")
                .help("Source text to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .short('s')
                .help("Source language code (default: en)")
                .default_value("en"),
        )
        .arg(
            Arg::new("transliterate-only")
                .long("transliterate-only")
                .short('t')
                .help("Treat the input as Urdu script and skip translation")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the mock translator instead of the Hugging Face API")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("word-map")
                .long("word-map")
                .help("JSON file overriding the built-in word table"),
        )
        .arg(
            Arg::new("char-map")
                .long("char-map")
                .help("JSON file overriding the built-in character table"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show each pipeline stage")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let text = matches.get_one::<String>("text").unwrap();
    let source_locale = matches.get_one::<String>("source").unwrap();
    let transliterate_only = matches.get_flag("transliterate-only");
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    // 1. Build the transliteration tables (fatal on invalid configuration)
    let word_map = match matches.get_one::<String>("word-map") {
        Some(path) => match loader::word_map_from_file(Path::new(path)) {
            Ok(map) => map,
            Err(e) => {
                eprintln!("❌ {}", e);
                return Err(e.into());
            }
        },
        None => roman_urdu::urdu::default_word_map(),
    };
    let char_map = match matches.get_one::<String>("char-map") {
        Some(path) => match loader::char_map_from_file(Path::new(path)) {
            Ok(map) => map,
            Err(e) => {
                eprintln!("❌ {}", e);
                return Err(e.into());
            }
        },
        None => roman_urdu::urdu::default_char_map(),
    };

    let engine = Transliterator::new(word_map, char_map);

    if verbose {
        println!(
            "✅ Tables loaded ({} word entries, {} character entries)",
            engine.word_map().len(),
            engine.char_map().len()
        );
    }

    if transliterate_only {
        println!("{}", engine.transliterate(text));
        return Ok(());
    }

    // 2. Normalize informal shorthand before translation
    let normalizer = InformalNormalizer::new();
    let normalized = normalizer.normalize(text);

    if verbose {
        println!("📝 Source: \"{}\"", text);
        if normalized != *text {
            println!("📝 Normalized: \"{}\"", normalized);
        }
        println!("🌍 {} → ur", source_locale);
        println!();
    }

    // 3. Translate to Urdu script
    let urdu = if use_mock {
        let mock = MockTranslator::new(MockMode::Suffix);
        mock.translate(&normalized, source_locale, "ur").await?
    } else {
        if env::var("HF_API_TOKEN").is_err() {
            eprintln!("❌ HF_API_TOKEN environment variable not set");
            eprintln!("   Set it with: export HF_API_TOKEN=your_token");
            eprintln!("   Or use --mock to use the mock translator");
            return Err("Missing API token".into());
        }

        let provider = HuggingFaceProvider::from_env()?;
        match provider.translate(&normalized, source_locale, "ur").await {
            Ok(urdu) => urdu,
            Err(e) => {
                eprintln!("❌ Translation failed: {}", e);
                return Err(e.into());
            }
        }
    };

    if verbose {
        println!("🌍 Urdu: \"{}\"", urdu);
    }

    // 4. Transliterate to Roman Urdu
    println!("{}", engine.transliterate(&urdu));

    Ok(())
}
