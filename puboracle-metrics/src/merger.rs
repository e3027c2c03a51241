//! Similarity merger: folds near-duplicate items of an occurrence table into
//! one representative and reports what was folded.
//!
//! Ranking ties keep the table's first-seen order. Only the first
//! `look_ahead` ranked items take part in clustering; the rest pass through
//! unmerged.

use serde::{Deserialize, Serialize};

use puboracle_core::config::MergeConfig;
use puboracle_core::errors::{ConfigError, OracleResult};
use puboracle_core::{CountedItem, IEmbeddingProvider, OccurrenceTable, SimilarityKind};
use puboracle_observability::{events, merge_span};

use crate::similarity::WindowScorer;

/// A group of items judged equivalent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityCluster {
    /// The lowest-ranked-index member, which keeps the summed count.
    pub representative: String,
    /// Every member with its original count, representative first.
    pub members: Vec<CountedItem>,
    /// Sum of the members' original counts.
    pub count: u64,
}

/// Result of a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// Top items after merging, descending by count.
    pub ranked: Vec<CountedItem>,
    /// Items folded into a representative, with their original counts,
    /// descending by count.
    pub excluded: Vec<CountedItem>,
    /// Clusters in the order they were formed.
    pub clusters: Vec<SimilarityCluster>,
}

/// Merges near-duplicate items using a configured similarity strategy.
pub struct SimilarityMerger {
    config: MergeConfig,
    /// Needed only by the semantic-vector strategy.
    embedding_provider: Option<Box<dyn IEmbeddingProvider>>,
}

impl SimilarityMerger {
    pub fn new(config: MergeConfig) -> Self {
        Self {
            config,
            embedding_provider: None,
        }
    }

    /// Inject the embedding provider used by the semantic-vector strategy.
    pub fn with_embedding_provider(mut self, provider: Box<dyn IEmbeddingProvider>) -> Self {
        self.embedding_provider = Some(provider);
        self
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Check the configuration without running a merge.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()?;
        if self.config.similarity.requires_embeddings() && self.embedding_provider.is_none() {
            return Err(ConfigError::MissingEmbeddingProvider {
                kind: self.config.similarity.to_string(),
            });
        }
        Ok(())
    }

    /// Merge `table`. Fails before any computation on an invalid configuration.
    pub fn merge(&self, table: &OccurrenceTable) -> OracleResult<MergeOutcome> {
        if let Err(e) = self.validate() {
            events::config_rejected("merge", &e.to_string());
            return Err(e.into());
        }

        let _span = merge_span!(table.len(), self.config.similarity).entered();

        let ranked = table.ranked();
        let window_len = self.config.look_ahead.min(ranked.len());
        let (window, tail) = ranked.split_at(window_len);

        let scorer = WindowScorer::new(
            self.config.similarity,
            self.config.ngram_size,
            window.iter().map(|e| e.item.clone()).collect(),
            self.embedding_provider.as_deref(),
        )?;

        let mut counts: Vec<u64> = window.iter().map(|e| e.count).collect();
        let mut clustered = vec![false; window_len];
        let mut absorbed = vec![false; window_len];
        let mut clusters = Vec::new();

        for origin in 0..window_len {
            if clustered[origin] {
                continue;
            }
            let row = scorer.row(origin);
            // Ascending, so the first qualifying index is the representative.
            let qualifying: Vec<usize> = (0..window_len)
                .filter(|&j| !clustered[j] && row[j] > self.config.threshold)
                .collect();
            if qualifying.len() < 2 {
                continue;
            }

            let rep = qualifying[0];
            let total: u64 = qualifying.iter().map(|&j| counts[j]).sum();
            counts[rep] = total;
            for &j in &qualifying {
                clustered[j] = true;
                absorbed[j] = j != rep;
            }

            events::cluster_formed(&window[rep].item, qualifying.len(), total);
            clusters.push(SimilarityCluster {
                representative: window[rep].item.clone(),
                members: qualifying.iter().map(|&j| window[j].clone()).collect(),
                count: total,
            });
        }

        let mut excluded: Vec<CountedItem> = window
            .iter()
            .zip(&absorbed)
            .filter(|(_, absorbed)| **absorbed)
            .map(|(e, _)| e.clone())
            .collect();
        excluded.sort_by(|a, b| b.count.cmp(&a.count));

        let mut remaining: Vec<CountedItem> = window
            .iter()
            .zip(counts)
            .zip(&absorbed)
            .filter(|(_, absorbed)| !**absorbed)
            .map(|((e, count), _)| CountedItem::new(e.item.clone(), count))
            .chain(tail.iter().cloned())
            .collect();
        remaining.sort_by(|a, b| b.count.cmp(&a.count));

        if remaining.len() < self.config.top_n {
            events::top_n_clamped(self.config.top_n, remaining.len());
        }
        remaining.truncate(self.config.top_n);

        events::merge_completed(window_len, clusters.len(), excluded.len(), remaining.len());

        Ok(MergeOutcome {
            ranked: remaining,
            excluded,
            clusters,
        })
    }
}

/// Merge with a string-only similarity strategy.
///
/// Shorthand for [`SimilarityMerger::merge`] with default n-gram size and no
/// embedding provider; the semantic-vector kind is rejected here.
pub fn merge_by_similarity(
    table: &OccurrenceTable,
    top_n: usize,
    look_ahead: usize,
    threshold: f64,
    similarity: SimilarityKind,
) -> OracleResult<MergeOutcome> {
    let config = MergeConfig {
        top_n,
        look_ahead,
        threshold,
        similarity,
        ..MergeConfig::default()
    };
    SimilarityMerger::new(config).merge(table)
}
