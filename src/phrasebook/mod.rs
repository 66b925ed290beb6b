//! Phrase tables consumed by the translation engine.
//!
//! A `PhraseBook` bundles the regular dictionary, the easter-egg overrides and
//! the witty status messages. The built-in book is assembled from the constant
//! tables in [`data`]; [`loader`] reads an alternative book from JSON.

pub mod data;
pub mod loader;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::PhraseEntry;
use crate::engine::error::{TranslatorError, TranslatorResult};
use data::RawPhrase;

pub use loader::{load_phrase_book_from_file, parse_phrase_book};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseBook {
    pub phrases: Vec<PhraseEntry>,
    #[serde(default)]
    pub easter_eggs: Vec<PhraseEntry>,
    // Keyed by table name: "loading", "errors", "empty"
    #[serde(default)]
    pub witty_messages: HashMap<String, Vec<String>>,
}

impl PhraseBook {
    pub fn new() -> Self {
        PhraseBook {
            phrases: Vec::new(),
            easter_eggs: Vec::new(),
            witty_messages: HashMap::new(),
        }
    }

    /// The tables shipped with the crate.
    pub fn builtin() -> Self {
        let mut witty_messages = HashMap::new();
        witty_messages.insert("loading".to_string(), to_owned_list(data::LOADING_MESSAGES));
        witty_messages.insert("errors".to_string(), to_owned_list(data::ERROR_MESSAGES));
        witty_messages.insert("empty".to_string(), to_owned_list(data::EMPTY_MESSAGES));

        PhraseBook {
            phrases: to_entries(data::PHRASES),
            easter_eggs: to_entries(data::EASTER_EGGS),
            witty_messages,
        }
    }

    pub fn with_phrase(&mut self, entry: PhraseEntry) -> &mut Self {
        self.phrases.push(entry);
        self
    }

    pub fn with_easter_egg(&mut self, entry: PhraseEntry) -> &mut Self {
        self.easter_eggs.push(entry);
        self
    }

    pub fn with_messages(&mut self, key: &str, messages: &[&str]) -> &mut Self {
        self.witty_messages
            .insert(key.to_string(), to_owned_list(messages));
        self
    }

    /// Regular entries followed by easter eggs, in table order.
    pub fn all_entries(&self) -> impl Iterator<Item = &PhraseEntry> {
        self.phrases.iter().chain(self.easter_eggs.iter())
    }

    pub fn messages(&self, key: &str) -> Option<&[String]> {
        self.witty_messages.get(key).map(Vec::as_slice)
    }

    /// Reject entries with neither side present.
    pub fn validate(&self) -> TranslatorResult<()> {
        let tables = [("phrases", &self.phrases), ("easter_eggs", &self.easter_eggs)];
        for (table, entries) in tables {
            for (index, entry) in entries.iter().enumerate() {
                if entry.corporate.is_none() && entry.honest.is_none() {
                    return Err(TranslatorError::InvalidEntry(format!(
                        "{}[{}] has neither a corporate nor an honest phrase",
                        table, index
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for PhraseBook {
    fn default() -> Self {
        PhraseBook::builtin()
    }
}

fn to_entries(raw: &[RawPhrase]) -> Vec<PhraseEntry> {
    raw.iter()
        .map(|(corporate, honest)| PhraseEntry {
            corporate: corporate.map(str::to_string),
            honest: honest.map(str::to_string),
        })
        .collect()
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
