//! # puboracle-metrics
//!
//! Text metrics over extracted affiliation and author strings:
//! frequency counting → similarity merging of near-duplicates → ranked lists.
//! Also hosts the string similarity algorithms, a TF-IDF embedding provider,
//! top/bottom-N record marking, and simple text statistics.

pub mod algorithms;
pub mod counter;
pub mod merger;
pub mod selection;
pub mod similarity;
pub mod text_stats;
pub mod tfidf;

pub use counter::{count_occurrences, split_records, FrequencyCount};
pub use merger::{merge_by_similarity, MergeOutcome, SimilarityCluster, SimilarityMerger};
pub use selection::{mark_top_bottom_n, Extremity, TopBottomSelection};
pub use tfidf::TfIdfEmbedder;
