//! Per-direction match candidates, compiled once at engine construction.

use regex::Regex;

use super::error::TranslatorResult;
use crate::{Direction, PhraseEntry};

/// One usable dictionary entry for a fixed direction.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub source: String,
    pub target: String,
    pub source_lower: String,
    pub pattern: Regex,
}

impl Candidate {
    fn new(source: &str, target: &str) -> TranslatorResult<Self> {
        Ok(Candidate {
            source: source.to_string(),
            target: target.to_string(),
            source_lower: source.to_lowercase(),
            pattern: word_pattern(source)?,
        })
    }
}

/// Candidates for one direction, in table order plus a longest-first view.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    direction: Direction,
    candidates: Vec<Candidate>,
    longest_first: Vec<usize>,
}

impl CandidateSet {
    /// Build from entries in table order, skipping entries missing either side.
    pub fn build<'a>(
        entries: impl IntoIterator<Item = &'a PhraseEntry>,
        direction: Direction,
    ) -> TranslatorResult<Self> {
        let mut candidates = Vec::new();
        for entry in entries {
            if let Some((source, target)) = entry.pair(direction) {
                candidates.push(Candidate::new(source, target)?);
            }
        }

        // Stable sort keeps table order among equal lengths
        let mut longest_first: Vec<usize> = (0..candidates.len()).collect();
        longest_first.sort_by(|&a, &b| {
            let a_len = candidates[a].source.chars().count();
            let b_len = candidates[b].source.chars().count();
            b_len.cmp(&a_len)
        });

        Ok(CandidateSet {
            direction,
            candidates,
            longest_first,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn in_table_order(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    pub fn longest_first(&self) -> impl Iterator<Item = &Candidate> {
        self.longest_first.iter().map(|&i| &self.candidates[i])
    }
}

/// Case-insensitive, word-boundary-anchored literal match for `phrase`.
pub fn word_pattern(phrase: &str) -> TranslatorResult<Regex> {
    Ok(Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase)))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<PhraseEntry> {
        vec![
            PhraseEntry::new("Touch base", "Interrupt"),
            PhraseEntry {
                corporate: None,
                honest: Some("I quit".to_string()),
            },
            PhraseEntry::new("Circle back offline", "Pretend"),
            PhraseEntry::new("Deep dive", "Skim"),
        ]
    }

    #[test]
    fn test_skips_entries_missing_a_side() {
        let set = CandidateSet::build(&entries(), Direction::CorporateToHonest).unwrap();
        assert_eq!(set.len(), 3);
        let set = CandidateSet::build(&entries(), Direction::HonestToCorporate).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.direction(), Direction::HonestToCorporate);
    }

    #[test]
    fn test_longest_first_is_stable() {
        let set = CandidateSet::build(&entries(), Direction::CorporateToHonest).unwrap();
        let order: Vec<&str> = set.longest_first().map(|c| c.source.as_str()).collect();
        assert_eq!(order, vec!["Circle back offline", "Touch base", "Deep dive"]);
        let table: Vec<&str> = set.in_table_order().map(|c| c.source.as_str()).collect();
        assert_eq!(table, vec!["Touch base", "Circle back offline", "Deep dive"]);
    }

    #[test]
    fn test_equal_length_ties_keep_table_order() {
        let tied = vec![
            PhraseEntry::new("abcd", "first"),
            PhraseEntry::new("wxyz", "second"),
        ];
        let set = CandidateSet::build(&tied, Direction::CorporateToHonest).unwrap();
        let order: Vec<&str> = set.longest_first().map(|c| c.target.as_str()).collect();
        assert_eq!(order, vec!["first", "second"]);
    }

    #[test]
    fn test_word_pattern_escapes_metacharacters() {
        let re = word_pattern("C++ (beta)").unwrap();
        assert!(!re.is_match("C plus"));
        let re = word_pattern("value.add").unwrap();
        assert!(re.is_match("Our VALUE.ADD is clear"));
        assert!(!re.is_match("valueXadd"));
    }

    #[test]
    fn test_word_pattern_respects_boundaries() {
        let re = word_pattern("pivot").unwrap();
        assert!(re.is_match("We must Pivot now"));
        assert!(!re.is_match("pivotal moment"));
    }
}
