//! Error types for the style resolution engine.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing style value syntax.
///
/// The resolver itself never surfaces these to callers: every parse failure
/// during resolution degrades to a diagnostic plus a dropped property.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value string could not be parsed.
    #[error("failed to parse value '{value}': {message}")]
    Parse { value: String, message: String },

    /// A media-query predicate could not be parsed.
    #[error("invalid media predicate '{predicate}': {message}")]
    InvalidPredicate { predicate: String, message: String },
}

impl Error {
    /// Create a parse error.
    pub fn parse(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a predicate error.
    pub fn invalid_predicate(predicate: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPredicate {
            predicate: predicate.into(),
            message: message.into(),
        }
    }
}
