use thiserror::Error;

/// Failure reported by a document-store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    /// Raised by non-MongoDB backends.
    #[error("{0}")]
    Backend(String),
}
