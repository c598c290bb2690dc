use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] vendas_core::Error),
    #[error(transparent)]
    Storage(#[from] vendas_core::StorageError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Nothing to change; pass at least one option")]
    NothingToUpdate,
    #[error("Failed to read sales file {path}: {message}")]
    SalesFile { path: String, message: String },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Missing configuration values: {}", .0.join(", "))]
    MissingConfig(Vec<String>),
}
