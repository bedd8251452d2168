use thiserror::Error;

/// Everything that can go wrong while reading or writing a slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unable to locate config dir")]
    NoConfigDir,
}
