//! The translation engine.
//!
//! Owns the phrase book and the compiled candidates for both directions. All
//! operations take `&self` and never fail, so one engine can be shared by
//! reference (or behind an `Arc`) between any number of callers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::candidates::CandidateSet;
use super::error::TranslatorResult;
use super::messages::{MessageKind, pick_witty_message};
use super::scoring::calculate_bullshit_level;
use super::segmenter::{join_sentences, split_into_sentences};
use super::sentence::translate_sentence;
use super::similarity::similarity;
use crate::Direction;
use crate::phrasebook::PhraseBook;

/// Suggestions returned to the caller at most.
pub const MAX_SUGGESTIONS: usize = 5;

/// Suggestions at or below this similarity are dropped.
pub const SUGGESTION_THRESHOLD: u8 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub text: String,
    pub confidence: u8,
    pub is_exact: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub output: String,
    pub confidence: u8,
    pub suggestions: Vec<Suggestion>,
    pub is_easter_egg: bool,
}

impl TranslationResult {
    pub fn empty() -> Self {
        TranslationResult {
            output: String::new(),
            confidence: 0,
            suggestions: Vec::new(),
            is_easter_egg: false,
        }
    }
}

/// Substitution counts aggregated over all sentences of one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    pub translation_count: usize,
    pub exact_matches: usize,
}

pub struct TranslationEngine {
    book: PhraseBook,
    corporate_to_honest: CandidateSet,
    honest_to_corporate: CandidateSet,
}

impl TranslationEngine {
    /// Compile the candidates for both directions.
    pub fn new(book: PhraseBook) -> TranslatorResult<Self> {
        book.validate()?;
        let corporate_to_honest =
            CandidateSet::build(book.all_entries(), Direction::CorporateToHonest)?;
        let honest_to_corporate =
            CandidateSet::build(book.all_entries(), Direction::HonestToCorporate)?;

        debug!(
            phrases = book.phrases.len(),
            easter_eggs = book.easter_eggs.len(),
            corporate_candidates = corporate_to_honest.len(),
            honest_candidates = honest_to_corporate.len(),
            "translation engine ready"
        );

        Ok(TranslationEngine {
            book,
            corporate_to_honest,
            honest_to_corporate,
        })
    }

    /// Engine over the built-in tables.
    pub fn builtin() -> TranslatorResult<Self> {
        TranslationEngine::new(PhraseBook::builtin())
    }

    pub fn phrase_book(&self) -> &PhraseBook {
        &self.book
    }

    fn candidates(&self, direction: Direction) -> &CandidateSet {
        match direction {
            Direction::CorporateToHonest => &self.corporate_to_honest,
            Direction::HonestToCorporate => &self.honest_to_corporate,
        }
    }

    pub fn translate(&self, input: &str, direction: Direction) -> TranslationResult {
        self.translate_with_stats(input, direction).0
    }

    /// Translate and also report how many substitutions were made.
    #[tracing::instrument(skip_all, fields(direction = %direction))]
    pub fn translate_with_stats(
        &self,
        input: &str,
        direction: Direction,
    ) -> (TranslationResult, MatchStats) {
        if input.trim().is_empty() {
            return (TranslationResult::empty(), MatchStats::default());
        }

        if let Some(result) = self.check_easter_eggs(input, direction) {
            debug!("easter egg hit");
            return (result, MatchStats::default());
        }

        let candidates = self.candidates(direction);
        let mut stats = MatchStats::default();
        let sentences = split_into_sentences(input);
        let mut translated = Vec::with_capacity(sentences.len());

        for sentence in &sentences {
            let sentence = translate_sentence(sentence, candidates);
            stats.translation_count += sentence.translation_count;
            stats.exact_matches += sentence.exact_matches;
            translated.push(sentence.output);
        }

        let output = join_sentences(&sentences, &translated);
        let mut suggestions = self.generate_suggestions(input, direction);
        suggestions.truncate(MAX_SUGGESTIONS);
        let confidence = calculate_confidence(input, &output, stats);

        debug!(
            sentences = translated.len(),
            translation_count = stats.translation_count,
            exact_matches = stats.exact_matches,
            confidence,
            suggestions = suggestions.len(),
            "translated input"
        );

        let result = TranslationResult {
            output,
            confidence,
            suggestions,
            is_easter_egg: false,
        };
        (result, stats)
    }

    fn check_easter_eggs(&self, input: &str, direction: Direction) -> Option<TranslationResult> {
        let input_lower = input.to_lowercase();
        let input_lower = input_lower.trim();

        self.book
            .easter_eggs
            .iter()
            .filter_map(|egg| egg.pair(direction))
            .find(|(source, _)| source.to_lowercase() == input_lower)
            .map(|(_, target)| TranslationResult {
                output: target.to_string(),
                confidence: 100,
                suggestions: Vec::new(),
                is_easter_egg: true,
            })
    }

    /// Rank dictionary sources that overlap `input` by substring, best first.
    ///
    /// The list is not truncated; `translate` keeps the top five.
    pub fn generate_suggestions(&self, input: &str, direction: Direction) -> Vec<Suggestion> {
        let input_lower = input.to_lowercase();

        let mut suggestions: Vec<Suggestion> = self
            .candidates(direction)
            .in_table_order()
            .filter(|c| {
                c.source_lower.contains(&input_lower) || input_lower.contains(&c.source_lower)
            })
            .filter_map(|c| {
                let confidence = similarity(&input_lower, &c.source_lower);
                (confidence > SUGGESTION_THRESHOLD).then(|| Suggestion {
                    text: c.source.clone(),
                    confidence,
                    is_exact: c.source_lower == input_lower,
                })
            })
            .collect();

        suggestions.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        suggestions
    }

    pub fn calculate_bullshit_level(&self, text: &str) -> u8 {
        calculate_bullshit_level(text, &self.book.phrases)
    }

    pub fn random_witty_message(&self, kind: MessageKind) -> String {
        pick_witty_message(&self.book, kind, &mut rand::thread_rng())
    }
}

/// Confidence tiers: unchanged 0, exact matches 70-95, fuzzy only 40-70, otherwise 10.
pub fn calculate_confidence(input: &str, output: &str, stats: MatchStats) -> u8 {
    if input == output {
        0
    } else if stats.exact_matches > 0 {
        (70 + 10 * stats.exact_matches).min(95) as u8
    } else if stats.translation_count > 0 {
        (40 + 15 * stats.translation_count).min(70) as u8
    } else {
        10
    }
}
