//! Error types for vendas-core

use thiserror::Error;

use crate::storage::StorageError;

/// Result type alias using vendas-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vendas-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Preference storage error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
