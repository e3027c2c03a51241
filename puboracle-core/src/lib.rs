//! # puboracle-core
//!
//! Foundation crate for the PubOracle affiliation metrics.
//! Defines the shared types, traits, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::OracleConfig;
pub use errors::{OracleError, OracleResult};
pub use models::{CombineWeights, CountedItem, OccurrenceTable, SimilarityKind};
pub use traits::IEmbeddingProvider;
