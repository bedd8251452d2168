use appnames_storage::StorageError;
use thiserror::Error;

/// A central error enum for alias persistence.
///
/// Malformed persisted data never produces one of these; it is skipped on load.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The legacy format has no escaping, so ids or aliases containing a
    /// separator cannot be written with it.
    #[error("Cannot write in legacy format: {0}")]
    Unrepresentable(String),

    #[error("Config error: {0}")]
    Config(String),
}
