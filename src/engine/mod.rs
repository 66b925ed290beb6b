/// Translation Engine
///
/// This module rewrites text between corporate speak and honest speak using a
/// static bidirectional phrase dictionary, and scores how much corporate jargon
/// a text contains.
///
/// # Overview
///
/// The engine consists of several components working together:
///
/// 1. **Sentence Segmenter** - Splits input into sentences, keeping terminators
/// 2. **Candidates** - Per-direction dictionary entries with compiled match patterns
/// 3. **Phrase Translator** - Longest-first phrase substitution with a fuzzy word fallback
/// 4. **Suggestions** - Dictionary sources ranked by normalized edit distance
/// 5. **Scoring** - Confidence tiers and the bullshit level
///
/// # Example
///
/// ```ignore
/// use buzzword_translator::{Direction, TranslationEngine};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let engine = TranslationEngine::builtin()?;
///
///     let result = engine.translate("Let's circle back on this.", Direction::CorporateToHonest);
///     println!("{} ({}%)", result.output, result.confidence);
///
///     let level = engine.calculate_bullshit_level("We need to leverage synergy.");
///     println!("Bullshit level: {}", level);
///     Ok(())
/// }
/// ```
pub mod candidates;
pub mod error;
pub mod messages;
pub mod scoring;
pub mod segmenter;
pub mod sentence;
pub mod similarity;
pub mod translator;

#[cfg(test)]
mod integration_tests;

pub use error::{TranslatorError, TranslatorResult};
pub use messages::{FALLBACK_MESSAGE, MessageKind, pick_witty_message};
pub use scoring::calculate_bullshit_level;
pub use segmenter::split_into_sentences;
pub use similarity::{levenshtein_distance, similarity};
pub use translator::{
    MAX_SUGGESTIONS, MatchStats, Suggestion, TranslationEngine, TranslationResult,
};
