//! Dictionary substitution within a single sentence.
//!
//! Two passes:
//!
//! 1. **Exact phrases** - every candidate, longest source first, is replaced
//!    wherever it matches as a whole word sequence. Replacements mutate the
//!    working string in place, so later (shorter) candidates see the output of
//!    earlier ones.
//! 2. **Fuzzy words** - only when pass 1 found nothing. Each word longer than
//!    three characters that appears inside some candidate's source is replaced
//!    by that candidate's target. The first candidate in table order wins.

use regex::NoExpand;
use tracing::{trace, warn};

use super::candidates::{CandidateSet, word_pattern};

/// Minimum length (exclusive) of a cleaned word for fuzzy matching.
const FUZZY_MIN_WORD_LEN: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceTranslation {
    pub output: String,
    /// Exact and fuzzy substitutions combined
    pub translation_count: usize,
    pub exact_matches: usize,
}

pub fn translate_sentence(sentence: &str, candidates: &CandidateSet) -> SentenceTranslation {
    let mut result = sentence.to_string();
    let mut translation_count = 0;
    let mut exact_matches = 0;

    for candidate in candidates.longest_first() {
        if candidate.pattern.is_match(&result) {
            result = candidate
                .pattern
                .replace_all(&result, NoExpand(&candidate.target))
                .into_owned();
            translation_count += 1;
            exact_matches += 1;
            trace!(source = %candidate.source, "exact phrase match");
        }
    }

    if translation_count == 0 {
        for word in sentence.split_whitespace() {
            let clean = clean_word(word);
            if clean.chars().count() <= FUZZY_MIN_WORD_LEN {
                continue;
            }
            let clean_lower = clean.to_lowercase();

            let Some(candidate) = candidates
                .in_table_order()
                .find(|c| c.source_lower.contains(&clean_lower))
            else {
                continue;
            };

            match word_pattern(&clean) {
                Ok(pattern) => {
                    result = pattern
                        .replace_all(&result, NoExpand(&candidate.target))
                        .into_owned();
                }
                Err(e) => warn!(word = %clean, error = %e, "skipping fuzzy word"),
            }
            // Counted even when an earlier substitution already consumed the word
            translation_count += 1;
            trace!(word = %clean, source = %candidate.source, "fuzzy word match");
        }
    }

    SentenceTranslation {
        output: result,
        translation_count,
        exact_matches,
    }
}

/// Keep only ASCII word characters (`[A-Za-z0-9_]`).
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
