use thiserror::Error;

/// Errors returned by a translation backend.
///
/// Both variants carry the service's own message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// The service cannot translate into (or from) the requested language.
    #[error("{0}")]
    UnsupportedLanguage(String),
    #[error("{0}")]
    ServiceFailed(String),
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, TranslationError>;
