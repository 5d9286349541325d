use thiserror::Error;

use crate::storage::RepositoryError;
use crate::translation::TranslationError;

pub const MISSING_PK: &str = "Missing pk in path";
pub const MISSING_PK_OR_SK: &str = "Missing pk or sk in path";
pub const MISSING_BODY: &str = "Missing request body";
pub const MISSING_KEYS: &str = "PK and SK are required";
pub const MISSING_LANGUAGE: &str = "Missing target language in query string";
pub const ITEM_NOT_FOUND: &str = "Item not found";

/// Errors surfaced by the item handlers.
///
/// The display string of every variant is the message returned to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Translation(#[from] TranslationError),
}

impl ItemError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// True for failures caused by the caller rather than a dependency.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound(_))
    }
}
