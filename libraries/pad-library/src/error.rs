//! Error types for the library manager

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("No valid audio sources found")]
    EmptyBatch,

    #[error("API credential is empty")]
    InvalidCredential,

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] pad_storage::StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
