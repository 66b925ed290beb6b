//! Random corporate phrase generator.
//!
//! Fills sentence templates with `{verb}`, `{noun}` and `{adjective}` slots
//! from fixed vocabularies. Every slot is drawn independently.

use rand::Rng;
use rand::seq::SliceRandom;
use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::phrasebook::data::BUZZWORDS;

static SLOT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{(verb|noun|adjective)\}").unwrap());

const TEMPLATES: &[&str] = &[
    "We need to {verb} our {noun} to {verb} {adjective} {noun}",
    "Let's {verb} a {adjective} {noun} that will {verb} our {noun}",
    "Our {adjective} {noun} will {verb} the {noun} and {verb} {adjective} results",
    "By {verb}ing our {noun}, we can {verb} {adjective} {noun} across the {noun}",
    "This {adjective} {noun} will {verb} our ability to {verb} {adjective} {noun}",
    "We should {verb} our {noun} to create a more {adjective} {noun}",
    "Let's {verb} {adjective} {noun} to {verb} our competitive {noun}",
    "Our {noun} needs to {verb} {adjective} {noun} for maximum {noun}",
    "We must {verb} our {adjective} {noun} to {verb} market {noun}",
    "This initiative will {verb} our {noun} and {verb} {adjective} outcomes",
];

const VERBS: &[&str] = &[
    "leverage", "optimize", "streamline", "enhance", "maximize", "revolutionize",
    "transform", "innovate", "disrupt", "scale", "integrate", "orchestrate",
    "synthesize", "monetize", "amplify", "accelerate", "cultivate", "architect",
    "engineer", "facilitate", "operationalize", "strategize", "visualize",
];

const NOUNS: &[&str] = &[
    "synergies", "paradigms", "ecosystems", "solutions", "platforms", "frameworks",
    "methodologies", "strategies", "initiatives", "deliverables", "capabilities",
    "competencies", "opportunities", "workflows", "processes", "outcomes",
    "touchpoints", "stakeholders", "bandwidth", "mindshare", "market share",
    "value proposition", "ROI", "KPIs", "metrics", "analytics", "insights",
];

const ADJECTIVES: &[&str] = &[
    "robust", "scalable", "dynamic", "strategic", "holistic", "comprehensive",
    "innovative", "disruptive", "cutting-edge", "next-generation", "world-class",
    "mission-critical", "best-in-class", "value-driven", "results-oriented",
    "customer-centric", "data-driven", "agile", "lean", "efficient", "seamless",
    "intuitive", "turnkey", "enterprise-grade", "future-proof", "game-changing",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct BuzzwordGenerator;

impl BuzzwordGenerator {
    pub fn new() -> Self {
        BuzzwordGenerator
    }

    /// A random template with every slot filled.
    pub fn generate_phrase<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let template = pick(TEMPLATES, rng);
        SLOT.replace_all(template, |caps: &Captures| {
            let words = match &caps[1] {
                "verb" => VERBS,
                "noun" => NOUNS,
                _ => ADJECTIVES,
            };
            pick(words, rng).to_string()
        })
        .into_owned()
    }

    /// `count` words drawn without replacement from every vocabulary and the
    /// buzzword list. Duplicates across lists may both appear.
    pub fn generate_buzzword_list<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<String> {
        let mut pool: Vec<&str> = VERBS
            .iter()
            .chain(NOUNS)
            .chain(ADJECTIVES)
            .chain(BUZZWORDS)
            .copied()
            .collect();
        pool.shuffle(rng);
        pool.into_iter().take(count).map(str::to_string).collect()
    }

    pub fn random_phrase(&self) -> String {
        self.generate_phrase(&mut rand::thread_rng())
    }

    pub fn random_buzzwords(&self, count: usize) -> Vec<String> {
        self.generate_buzzword_list(&mut rand::thread_rng(), count)
    }
}

fn pick<'a, R: Rng + ?Sized>(items: &[&'a str], rng: &mut R) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_phrase_has_no_unfilled_slots() {
        let generator = BuzzwordGenerator::new();
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..50 {
            let phrase = generator.generate_phrase(&mut rng);
            assert!(!phrase.contains('{'), "unfilled slot in {:?}", phrase);
            assert!(!phrase.is_empty());
        }
    }

    #[test]
    fn test_phrase_is_reproducible_with_seed() {
        let generator = BuzzwordGenerator::new();
        let a = generator.generate_phrase(&mut StdRng::seed_from_u64(9));
        let b = generator.generate_phrase(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_buzzword_list_count() {
        let generator = BuzzwordGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);
        let words = generator.generate_buzzword_list(&mut rng, 5);
        assert_eq!(words.len(), 5);

        let pool = VERBS.len() + NOUNS.len() + ADJECTIVES.len() + BUZZWORDS.len();
        let all = generator.generate_buzzword_list(&mut rng, pool + 10);
        assert_eq!(all.len(), pool);
        assert!(generator.generate_buzzword_list(&mut rng, 0).is_empty());
    }

    #[test]
    fn test_buzzwords_come_from_vocabularies() {
        let generator = BuzzwordGenerator::new();
        let mut rng = StdRng::seed_from_u64(11);
        for word in generator.generate_buzzword_list(&mut rng, 20) {
            let known = VERBS
                .iter()
                .chain(NOUNS)
                .chain(ADJECTIVES)
                .chain(BUZZWORDS)
                .any(|w| *w == word);
            assert!(known, "unexpected word {:?}", word);
        }
    }
}
