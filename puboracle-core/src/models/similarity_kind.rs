//! String similarity strategies available to the merger.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Closed set of similarity strategies. Every strategy scores in `[0, 1]`
/// with higher meaning more similar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityKind {
    /// Jaccard index over character n-gram shingles.
    #[default]
    #[serde(alias = "jaccard")]
    TokenOverlap,
    /// Ratcliff/Obershelp longest-matching-block ratio.
    SequenceAlignment,
    /// Character multiset overlap, an upper bound of the alignment ratio.
    /// `seq_matcher` configs score with this bound, not the full ratio.
    #[serde(alias = "seq_matcher")]
    QuickRatio,
    /// Cosine similarity of embeddings from an injected provider.
    #[serde(alias = "spacy")]
    SemanticVector,
}

impl SimilarityKind {
    pub const ALL: [SimilarityKind; 4] = [
        Self::TokenOverlap,
        Self::SequenceAlignment,
        Self::QuickRatio,
        Self::SemanticVector,
    ];

    /// Parse from a name. Accepts the snake_case names and the legacy aliases.
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "token_overlap" | "jaccard" => Some(Self::TokenOverlap),
            "sequence_alignment" => Some(Self::SequenceAlignment),
            "quick_ratio" | "seq_matcher" => Some(Self::QuickRatio),
            "semantic_vector" | "spacy" => Some(Self::SemanticVector),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TokenOverlap => "token_overlap",
            Self::SequenceAlignment => "sequence_alignment",
            Self::QuickRatio => "quick_ratio",
            Self::SemanticVector => "semantic_vector",
        }
    }

    /// Whether this strategy needs an embedding provider.
    pub fn requires_embeddings(&self) -> bool {
        matches!(self, Self::SemanticVector)
    }
}

impl FromStr for SimilarityKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_name(s).ok_or_else(|| ConfigError::UnknownSimilarity {
            name: s.to_string(),
        })
    }
}

impl std::fmt::Display for SimilarityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
