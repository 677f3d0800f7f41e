/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from reading or writing the session document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem failure while reading, writing, or deleting the document.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be serialized.
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
