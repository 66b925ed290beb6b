//! End-to-end tests for the translation engine over the built-in phrase book.
//!
//! ```bash
//! cargo test --lib engine::integration_tests
//! ```

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::phrasebook::{PhraseBook, parse_phrase_book};
    use crate::{Direction, PhraseEntry};
    use std::sync::Arc;
    use std::thread;

    const DIRECTIONS: [Direction; 2] = [Direction::CorporateToHonest, Direction::HonestToCorporate];

    fn engine() -> TranslationEngine {
        TranslationEngine::builtin().unwrap()
    }

    /// Inputs that exercise punctuation, regex metacharacters and non-Latin text
    fn awkward_inputs() -> Vec<&'static str> {
        vec![
            "",
            " ",
            "...",
            "?!?",
            "(.*)[?+ $1 \\b",
            "a|b{2,}^$",
            "Синергия и ünïcödé 🚀. Next.",
            "Dr.",
            "3.14.15",
            "Let's circle back. Let's circle back! Let's circle back?",
            "SYNERGY synergy Synergy leverage-leverage",
            "We need to leverage synergy to optimize our paradigm.",
        ]
    }

    // ============================================================================
    // Bounds
    // ============================================================================

    #[test]
    fn test_scores_always_in_range() {
        let engine = engine();
        for input in awkward_inputs() {
            for direction in DIRECTIONS {
                let result = engine.translate(input, direction);
                assert!(result.confidence <= 100, "confidence out of range for {:?}", input);
                assert!(result.suggestions.len() <= MAX_SUGGESTIONS);
                for suggestion in &result.suggestions {
                    assert!(suggestion.confidence > 30 && suggestion.confidence <= 100);
                }
            }
            assert!(engine.calculate_bullshit_level(input) <= 100);
        }
    }

    #[test]
    fn test_metacharacters_pass_through_untouched() {
        let engine = engine();
        let result = engine.translate("(.*)[?+ $1 \\b", Direction::CorporateToHonest);
        assert_eq!(result.output, "(.*)[?+ $1 \\b");
        assert_eq!(result.confidence, 0);
    }

    // ============================================================================
    // Direction handling
    // ============================================================================

    #[test]
    fn test_honest_to_corporate_sentences() {
        let engine = engine();
        let result = engine.translate(
            "You're wrong. This is stupid!",
            Direction::HonestToCorporate,
        );
        assert_eq!(
            result.output,
            "I have a different perspective on this. I'd love to explore alternative approaches!"
        );
        assert_eq!(result.confidence, 90);
        assert!(!result.is_easter_egg);
    }

    #[test]
    fn test_abbreviation_stays_in_sentence() {
        let engine = engine();
        let result = engine.translate("Dr. Smith wants a deep dive.", Direction::CorporateToHonest);
        assert_eq!(
            result.output,
            "Dr. Smith wants a Pretend to analyze something thoroughly."
        );
    }

    #[test]
    fn test_fuzzy_only_translation() {
        let engine = engine();
        let (result, stats) =
            engine.translate_with_stats("circle back", Direction::CorporateToHonest);
        assert_eq!(stats.exact_matches, 0);
        assert_eq!(stats.translation_count, 2);
        assert_eq!(result.confidence, 70);
        assert_eq!(
            result.output,
            "I wasn't listening and need time to Google this I wasn't listening and need time to Google this"
        );
    }

    // ============================================================================
    // Round trips
    // ============================================================================

    #[test]
    fn test_round_trip_can_restore_simple_phrase() {
        let engine = engine();
        let honest = engine.translate("Touch base.", Direction::CorporateToHonest);
        assert_eq!(honest.output, "Interrupt your actual work.");
        let corporate = engine.translate(&honest.output, Direction::HonestToCorporate);
        assert_eq!(corporate.output, "Touch base.");
    }

    #[test]
    fn test_round_trip_is_not_bijective() {
        // Expected: the dictionary is not invertible in general
        let engine = engine();
        let original = "Let's circle back offline.";
        let honest = engine.translate(original, Direction::CorporateToHonest);
        let back = engine.translate(&honest.output, Direction::HonestToCorporate);
        assert_eq!(back.output, "Let's Circle back offline.");
        assert_ne!(back.output, original);
    }

    // ============================================================================
    // Custom phrase books
    // ============================================================================

    #[test]
    fn test_engine_over_loaded_book() {
        let book = parse_phrase_book(
            r#"{
                "phrases": [
                    { "corporate": "Quick sync", "honest": "Hour-long meeting" },
                    { "honest": "No" }
                ],
                "easter_eggs": [ { "corporate": "Web3", "honest": "Web2 with fees" } ],
                "witty_messages": { "errors": ["Synergy overflow"] }
            }"#,
        )
        .unwrap();
        let engine = TranslationEngine::new(book).unwrap();

        let result = engine.translate("Got a quick sync?", Direction::CorporateToHonest);
        assert_eq!(result.output, "Got a Hour-long meeting?");

        let result = engine.translate("web3", Direction::CorporateToHonest);
        assert!(result.is_easter_egg);
        assert_eq!(result.output, "Web2 with fees");

        // One-sided entry never translates
        let result = engine.translate("No", Direction::HonestToCorporate);
        assert_eq!(result.output, "No");
        assert_eq!(result.confidence, 0);

        assert_eq!(engine.random_witty_message(MessageKind::Error), "Synergy overflow");
        assert_eq!(engine.random_witty_message(MessageKind::Loading), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_target_starting_with_punctuation_keeps_sentence_space() {
        let mut book = PhraseBook::new();
        book.with_phrase(PhraseEntry::new("Wow", "!!! wow"));
        let engine = TranslationEngine::new(book).unwrap();

        let result = engine.translate("Fine. Wow it works.", Direction::CorporateToHonest);
        assert_eq!(result.output, "Fine. !!! wow it works.");
    }

    #[test]
    fn test_engine_rejects_invalid_book() {
        let mut book = PhraseBook::new();
        book.with_phrase(PhraseEntry {
            corporate: None,
            honest: None,
        });
        assert!(matches!(
            TranslationEngine::new(book),
            Err(TranslatorError::InvalidEntry(_))
        ));
    }

    // ============================================================================
    // Sharing
    // ============================================================================

    #[test]
    fn test_engine_shared_between_threads() {
        let engine = Arc::new(engine());
        let expected = engine.translate("Let's circle back on this.", Direction::CorporateToHonest);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || {
                    engine.translate("Let's circle back on this.", Direction::CorporateToHonest)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
