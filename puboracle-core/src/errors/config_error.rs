/// Invalid parameters, detected before any computation starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid threshold {value}: must lie in (0, 1]")]
    InvalidThreshold { value: f64 },

    #[error("invalid look-ahead {value}: must be at least 1")]
    InvalidLookAhead { value: usize },

    #[error("invalid n-gram size {value}: must be at least 1")]
    InvalidNgramSize { value: usize },

    #[error("unknown similarity kind: {name}")]
    UnknownSimilarity { name: String },

    #[error("similarity kind {kind} requires an embedding provider")]
    MissingEmbeddingProvider { kind: String },

    #[error("unknown combine policy: {name}")]
    UnknownCombinePolicy { name: String },

    #[error("item {item:?} in record {record} is missing from the vocabulary")]
    ItemNotInVocabulary { item: String, record: usize },

    #[error("config parse failed: {reason}")]
    ParseFailed { reason: String },
}
