//! Error Types
//!
//! Failures at the persistence seam. Nothing above the store surfaces them.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("failed to read key {key}: {message}")]
    Read { key: String, message: String },

    #[error("failed to write key {key}: {message}")]
    Write { key: String, message: String },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;
