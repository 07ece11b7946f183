use thiserror::Error;

/// Errors produced by the expense store.
///
/// `Validation` and `NotFound` are recoverable at the presentation boundary
/// (reported as a message, the session continues). `Storage` fails the current
/// operation; if the database cannot be opened at all, startup fails outright.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid expense: {0}")]
    Validation(String),

    #[error("no expense with id {0}")]
    NotFound(i64),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
