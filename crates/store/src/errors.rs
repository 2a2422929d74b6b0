use crate::config::ConfigError;
use thiserror::Error;

/// Errors surfaced by the store layer.
///
/// Callers can always distinguish an empty result from a failed query:
/// repository functions return `Ok` with empty output for "nothing
/// matched" and an error variant for infrastructure failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}
