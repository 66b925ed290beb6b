//! Sentence segmentation.
//!
//! A character scan with a few heuristics: titles such as "Dr." and decimal
//! numbers do not end a sentence, other abbreviations only hold the sentence
//! together when glued to the next word, and a terminator glued to a
//! capitalised word ("done.Next") still ends one.

use std::sync::LazyLock;

use regex::Regex;

static TITLE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:Mr|Mrs|Ms|Dr|Prof|Sr|Jr)\.$").unwrap());

static ABBREVIATION_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:vs|etc|i\.e|e\.g)\.$").unwrap());

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split `text` into trimmed, non-empty sentences, keeping their terminators.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        current.push(c);

        if is_terminator(c) {
            let next = chars.get(i + 1).copied();
            let next_next = chars.get(i + 2).copied();

            // "Dr. Smith" and "Dr.Smith" both stay in one sentence
            let title = c == '.' && TITLE_END.is_match(&current);
            let abbreviation = c == '.'
                && next.is_some_and(|n| !n.is_whitespace())
                && ABBREVIATION_END.is_match(&current);

            let decimal = c == '.'
                && i > 0
                && chars[i - 1].is_ascii_digit()
                && next.is_some_and(|n| n.is_ascii_digit());

            let boundary = match next {
                None => true,
                Some(n) if n.is_whitespace() => true,
                Some(n) => {
                    n.is_ascii_uppercase() && next_next.is_some_and(|nn| nn.is_ascii_lowercase())
                }
            };

            if !title && !abbreviation && !decimal && boundary {
                push_trimmed(&mut sentences, &current);
                current.clear();
                while i + 1 < chars.len() && chars[i + 1].is_whitespace() {
                    i += 1;
                }
            }
        }

        i += 1;
    }

    push_trimmed(&mut sentences, &current);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, sentence: &str) {
    let trimmed = sentence.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// True when `sentence` starts with punctuation that attaches to the previous one.
pub fn starts_with_punctuation(sentence: &str) -> bool {
    sentence
        .chars()
        .next()
        .is_some_and(|c| matches!(c, '.' | '!' | '?' | ',' | ':' | ';'))
}

/// Join translated sentences with single spaces.
///
/// The space is left out where the next *source* sentence starts with
/// punctuation; what a sentence was translated into never affects spacing.
/// `sources` and `translated` are parallel.
pub fn join_sentences(sources: &[String], translated: &[String]) -> String {
    let mut result = String::new();
    for (i, sentence) in translated.iter().enumerate() {
        result.push_str(sentence);
        if i + 1 < translated.len()
            && !sources.get(i + 1).is_some_and(|next| starts_with_punctuation(next))
        {
            result.push(' ');
        }
    }
    result
}
