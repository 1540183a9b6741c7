use thiserror::Error;

/// Failure modes of the match store. A missing id is a normal outcome and is
/// handled locally by the caller; anything else bubbles up to the 500 boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("match not found")]
    NotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
