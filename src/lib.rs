use serde::{Deserialize, Serialize};

pub mod engine;
pub mod generator;
pub mod phrasebook;

// Re-export the engine surface for convenient access
pub use engine::{
    MessageKind, Suggestion, TranslationEngine, TranslationResult, TranslatorError,
    TranslatorResult,
};
pub use generator::BuzzwordGenerator;
pub use phrasebook::PhraseBook;

/// Which register is read as input and which is produced as output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    CorporateToHonest,
    HonestToCorporate,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::CorporateToHonest => Direction::HonestToCorporate,
            Direction::HonestToCorporate => Direction::CorporateToHonest,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::CorporateToHonest => write!(f, "corporate-to-honest"),
            Direction::HonestToCorporate => write!(f, "honest-to-corporate"),
        }
    }
}

/// One dictionary entry. At least one side is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corporate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honest: Option<String>,
}

impl PhraseEntry {
    pub fn new(corporate: &str, honest: &str) -> Self {
        PhraseEntry {
            corporate: Some(corporate.to_owned()),
            honest: Some(honest.to_owned()),
        }
    }

    /// The side read as input for `direction`. Empty strings count as absent.
    pub fn source(&self, direction: Direction) -> Option<&str> {
        let side = match direction {
            Direction::CorporateToHonest => self.corporate.as_deref(),
            Direction::HonestToCorporate => self.honest.as_deref(),
        };
        side.filter(|s| !s.is_empty())
    }

    /// The side produced as output for `direction`.
    pub fn target(&self, direction: Direction) -> Option<&str> {
        self.source(direction.reversed())
    }

    /// Source and target together, only when both are present.
    pub fn pair(&self, direction: Direction) -> Option<(&str, &str)> {
        Some((self.source(direction)?, self.target(direction)?))
    }
}
