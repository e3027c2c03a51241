//! Similarity strategy dispatch.
//!
//! One pure scoring function per [`SimilarityKind`]. The semantic kind scores
//! precomputed embeddings from an injected [`IEmbeddingProvider`].

use rayon::prelude::*;

use puboracle_core::errors::{ConfigError, EmbeddingError, OracleResult};
use puboracle_core::{IEmbeddingProvider, SimilarityKind};

use crate::algorithms::{cosine_similarity, jaccard_similarity, quick_ratio, ratio};

/// A similarity metric computed from the strings alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMetric {
    TokenOverlap { ngram_size: usize },
    SequenceAlignment,
    QuickRatio,
}

impl TextMetric {
    /// The string metric for `kind`, or `None` for the semantic kind.
    pub fn from_kind(kind: SimilarityKind, ngram_size: usize) -> Option<Self> {
        match kind {
            SimilarityKind::TokenOverlap => Some(Self::TokenOverlap { ngram_size }),
            SimilarityKind::SequenceAlignment => Some(Self::SequenceAlignment),
            SimilarityKind::QuickRatio => Some(Self::QuickRatio),
            SimilarityKind::SemanticVector => None,
        }
    }

    pub fn score(&self, a: &str, b: &str) -> f64 {
        match *self {
            Self::TokenOverlap { ngram_size } => jaccard_similarity(a, b, ngram_size),
            Self::SequenceAlignment => ratio(a, b),
            Self::QuickRatio => quick_ratio(a, b),
        }
    }
}

/// Similarity of two strings under a string-only `kind`.
pub fn text_similarity(
    kind: SimilarityKind,
    a: &str,
    b: &str,
    ngram_size: usize,
) -> OracleResult<f64> {
    let metric = TextMetric::from_kind(kind, ngram_size).ok_or_else(|| {
        ConfigError::MissingEmbeddingProvider {
            kind: kind.to_string(),
        }
    })?;
    Ok(metric.score(a, b))
}

/// Similarity of `source` against every string in `targets`.
pub fn string_similarity(
    source: &str,
    targets: &[String],
    kind: SimilarityKind,
    ngram_size: usize,
) -> OracleResult<Vec<f64>> {
    let metric = TextMetric::from_kind(kind, ngram_size).ok_or_else(|| {
        ConfigError::MissingEmbeddingProvider {
            kind: kind.to_string(),
        }
    })?;
    Ok(targets.par_iter().map(|t| metric.score(source, t)).collect())
}

/// Scores rows of the pairwise similarity matrix over a fixed list of items.
pub enum WindowScorer {
    Text {
        metric: TextMetric,
        items: Vec<String>,
    },
    Vectors {
        embeddings: Vec<Vec<f32>>,
    },
}

impl WindowScorer {
    /// Prepare a scorer. The semantic kind embeds every item up front.
    pub fn new(
        kind: SimilarityKind,
        ngram_size: usize,
        items: Vec<String>,
        provider: Option<&dyn IEmbeddingProvider>,
    ) -> OracleResult<Self> {
        if let Some(metric) = TextMetric::from_kind(kind, ngram_size) {
            return Ok(Self::Text { metric, items });
        }

        let provider = provider.ok_or_else(|| ConfigError::MissingEmbeddingProvider {
            kind: kind.to_string(),
        })?;
        // Nothing to embed: an empty window never touches the provider.
        if items.is_empty() {
            return Ok(Self::Vectors {
                embeddings: Vec::new(),
            });
        }
        if !provider.is_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: provider.name().to_string(),
            }
            .into());
        }

        let embeddings = provider.embed_batch(&items)?;
        if embeddings.len() != items.len() {
            return Err(EmbeddingError::BatchSizeMismatch {
                expected: items.len(),
                actual: embeddings.len(),
            }
            .into());
        }
        let expected = provider.dimensions();
        if let Some(bad) = embeddings.iter().find(|e| e.len() != expected) {
            return Err(EmbeddingError::DimensionMismatch {
                expected,
                actual: bad.len(),
            }
            .into());
        }
        Ok(Self::Vectors { embeddings })
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Text { items, .. } => items.len(),
            Self::Vectors { embeddings } => embeddings.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Similarity of item `origin` against every item, itself included.
    /// Computed in parallel against the immutable item list.
    pub fn row(&self, origin: usize) -> Vec<f64> {
        match self {
            Self::Text { metric, items } => {
                let source = &items[origin];
                items.par_iter().map(|t| metric.score(source, t)).collect()
            }
            Self::Vectors { embeddings } => {
                let source = &embeddings[origin];
                embeddings
                    .par_iter()
                    .map(|t| cosine_similarity(source, t))
                    .collect()
            }
        }
    }

    /// Full pairwise matrix.
    pub fn matrix(&self) -> Vec<Vec<f64>> {
        (0..self.len()).map(|i| self.row(i)).collect()
    }
}
