mod config_error;
mod embedding_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;

/// Top-level error for every PubOracle operation.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type OracleResult<T> = Result<T, OracleError>;
