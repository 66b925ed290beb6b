//! Witty status messages for the loading, error and empty states.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::error::TranslatorError;
use crate::phrasebook::PhraseBook;

/// Returned when a message table is missing or empty.
pub const FALLBACK_MESSAGE: &str = "Something went wrong with our corporate jargon!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Loading,
    Error,
    Empty,
}

impl MessageKind {
    /// Name of the phrase-book table holding messages of this kind.
    pub fn table_key(self) -> &'static str {
        match self {
            MessageKind::Loading => "loading",
            MessageKind::Error => "errors",
            MessageKind::Empty => "empty",
        }
    }
}

impl std::str::FromStr for MessageKind {
    type Err = TranslatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "loading" => Ok(MessageKind::Loading),
            "error" | "errors" => Ok(MessageKind::Error),
            "empty" => Ok(MessageKind::Empty),
            other => Err(TranslatorError::Other(format!(
                "Unknown message kind '{}', expected loading, error or empty",
                other
            ))),
        }
    }
}

/// Pick a message of `kind` uniformly at random.
pub fn pick_witty_message<R: Rng + ?Sized>(
    book: &PhraseBook,
    kind: MessageKind,
    rng: &mut R,
) -> String {
    book.messages(kind.table_key())
        .and_then(|messages| messages.choose(rng))
        .cloned()
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_error_kind_reads_errors_table() {
        let book = PhraseBook::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let message = pick_witty_message(&book, MessageKind::Error, &mut rng);
        assert!(book.messages("errors").unwrap().contains(&message));
    }

    #[test]
    fn test_every_kind_comes_from_its_table() {
        let book = PhraseBook::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        for kind in [MessageKind::Loading, MessageKind::Error, MessageKind::Empty] {
            for _ in 0..20 {
                let message = pick_witty_message(&book, kind, &mut rng);
                assert!(book.messages(kind.table_key()).unwrap().contains(&message));
            }
        }
    }

    #[test]
    fn test_missing_table_falls_back() {
        let book = PhraseBook::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            pick_witty_message(&book, MessageKind::Loading, &mut rng),
            FALLBACK_MESSAGE
        );
    }

    #[test]
    fn test_empty_table_falls_back() {
        let mut book = PhraseBook::new();
        book.with_messages("empty", &[]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            pick_witty_message(&book, MessageKind::Empty, &mut rng),
            FALLBACK_MESSAGE
        );
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("loading".parse::<MessageKind>().unwrap(), MessageKind::Loading);
        assert_eq!("Error".parse::<MessageKind>().unwrap(), MessageKind::Error);
        assert_eq!("empty".parse::<MessageKind>().unwrap(), MessageKind::Empty);
        assert!("panic".parse::<MessageKind>().is_err());
    }
}
