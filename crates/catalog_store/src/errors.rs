//! Error types for catalog storage

use thiserror::Error;

/// Error types for author collection operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<fjall::Error> for StoreError {
    fn from(err: fjall::Error) -> Self {
        StoreError::Storage(format!("fjall error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Encoding(format!("JSON error: {}", err))
    }
}
