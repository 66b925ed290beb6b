use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::PhraseBook;
use crate::engine::error::{TranslatorError, TranslatorResult};

/// Load a phrase book from a single JSON file
///
/// The JSON file should have the following structure:
/// ```json
/// {
///     "phrases": [
///         { "corporate": "Touch base", "honest": "Interrupt your actual work" }
///     ],
///     "easter_eggs": [ { "corporate": "AI", "honest": "Autocomplete" } ],
///     "witty_messages": { "loading": ["..."], "errors": ["..."], "empty": ["..."] }
/// }
/// ```
///
/// `easter_eggs` and `witty_messages` may be omitted.
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON
/// - An entry with neither side present
pub fn load_phrase_book_from_file(path: &Path) -> TranslatorResult<PhraseBook> {
    let content = fs::read_to_string(path).map_err(|e| {
        TranslatorError::Io(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    let book = parse_phrase_book(&content).map_err(|e| match e {
        TranslatorError::Parse(msg) => {
            TranslatorError::Parse(format!("{} (in '{}')", msg, path.display()))
        }
        other => other,
    })?;

    debug!(
        path = %path.display(),
        phrases = book.phrases.len(),
        easter_eggs = book.easter_eggs.len(),
        "loaded phrase book"
    );
    Ok(book)
}

/// Parse and validate a phrase book from a JSON string
pub fn parse_phrase_book(content: &str) -> TranslatorResult<PhraseBook> {
    let book: PhraseBook = serde_json::from_str(content)
        .map_err(|e| TranslatorError::Parse(format!("Failed to parse phrase book: {}", e)))?;

    book.validate()?;

    if book.phrases.is_empty() {
        warn!("phrase book has no regular phrases");
    }
    for (key, messages) in &book.witty_messages {
        if messages.is_empty() {
            warn!(key = %key, "witty message table is empty");
        }
    }

    Ok(book)
}
