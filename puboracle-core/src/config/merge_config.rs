use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::SimilarityKind;

/// Similarity merger configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Number of merged items returned.
    pub top_n: usize,
    /// Number of ranked items considered for similarity merging.
    pub look_ahead: usize,
    /// Items merge when their similarity is strictly above this value.
    pub threshold: f64,
    /// Similarity strategy.
    pub similarity: SimilarityKind,
    /// Shingle length for the token-overlap strategy.
    pub ngram_size: usize,
}

impl MergeConfig {
    /// Check the parameters. Called before any merge computation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold {
                value: self.threshold,
            });
        }
        if self.look_ahead < 1 {
            return Err(ConfigError::InvalidLookAhead {
                value: self.look_ahead,
            });
        }
        if self.ngram_size < 1 {
            return Err(ConfigError::InvalidNgramSize {
                value: self.ngram_size,
            });
        }
        Ok(())
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            top_n: defaults::DEFAULT_TOP_N,
            look_ahead: defaults::DEFAULT_LOOK_AHEAD,
            threshold: defaults::DEFAULT_THRESHOLD,
            similarity: SimilarityKind::default(),
            ngram_size: defaults::DEFAULT_NGRAM_SIZE,
        }
    }
}
