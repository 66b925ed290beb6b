//! Bullshit level: density of recognized corporate phrases and buzzwords.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::sentence::clean_word;
use crate::PhraseEntry;
use crate::phrasebook::data::SCORING_BUZZWORDS;

static BUZZWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SCORING_BUZZWORDS.iter().copied().collect());

/// Score `text` from 0 to 100.
///
/// Each corporate phrase found anywhere in the text adds its word count once,
/// however often it occurs. Each buzzword token adds 1 per occurrence.
#[tracing::instrument(skip_all)]
pub fn calculate_bullshit_level(text: &str, phrases: &[PhraseEntry]) -> u8 {
    let total_words = text.split_whitespace().count();
    if total_words == 0 {
        return 0;
    }

    let lower = text.to_lowercase();
    let mut corporate_words = 0usize;

    for phrase in phrases
        .iter()
        .filter_map(|p| p.corporate.as_deref())
        .filter(|p| !p.is_empty())
    {
        let phrase_lower = phrase.to_lowercase();
        if lower.contains(&phrase_lower) {
            corporate_words += phrase_lower.split(' ').count();
        }
    }

    for word in lower.split_whitespace() {
        if BUZZWORD_SET.contains(clean_word(word).as_str()) {
            corporate_words += 1;
        }
    }

    let level = (100.0 * corporate_words as f64 / total_words as f64).round();
    tracing::debug!(total_words, corporate_words, level, "scored text");
    level.min(100.0) as u8
}
