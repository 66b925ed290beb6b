/// Error types for the translation engine and its phrase book
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatorError {
    /// Reading a phrase book from disk failed
    Io(String),
    /// Phrase book content is not valid JSON for the expected shape
    Parse(String),
    /// A phrase book entry is unusable
    InvalidEntry(String),
    /// A match pattern could not be compiled
    Pattern(String),
    /// General error with context
    Other(String),
}

impl std::fmt::Display for TranslatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslatorError::Io(msg) => write!(f, "I/O error: {}", msg),
            TranslatorError::Parse(msg) => write!(f, "Parse error: {}", msg),
            TranslatorError::InvalidEntry(msg) => write!(f, "Invalid entry: {}", msg),
            TranslatorError::Pattern(msg) => write!(f, "Pattern error: {}", msg),
            TranslatorError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for TranslatorError {}

impl From<regex::Error> for TranslatorError {
    fn from(err: regex::Error) -> Self {
        TranslatorError::Pattern(err.to_string())
    }
}

/// Result type for engine operations
pub type TranslatorResult<T> = Result<T, TranslatorError>;
