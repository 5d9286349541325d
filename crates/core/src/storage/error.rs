use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// Backend failures carry the store's own message so it reaches the caller
/// unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The store could not be reached (dispatch failure, timeout).
    #[error("{0}")]
    ConnectionFailed(String),
    /// A read (query or point lookup) was rejected by the store.
    #[error("{0}")]
    ReadFailed(String),
    /// A write (put or update) was rejected by the store.
    #[error("{0}")]
    WriteFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
