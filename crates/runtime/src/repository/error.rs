//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
///
/// "Nothing stored" is never an error: lookups return `Ok(None)` for that.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("roster repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("character not found: {0}")]
    NotFound(String),

    #[error("invalid roster id: {0:?}")]
    InvalidId(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
