//! Error types for the key-value store.

use thiserror::Error;

/// Main error type for store operations.
///
/// Only reads can fail: commands are total over every key and value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Key not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// Whether this error reports an absent key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
