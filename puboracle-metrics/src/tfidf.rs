//! Corpus-fitted TF-IDF embeddings.
//!
//! Lets the semantic-vector strategy run without an external model: fit on
//! the strings being merged, then compare by cosine.

use std::collections::{BTreeSet, HashMap, HashSet};

use puboracle_core::errors::OracleResult;
use puboracle_core::IEmbeddingProvider;

use crate::algorithms::cosine_similarity;

/// TF-IDF embedding provider with a vocabulary fitted on a corpus.
///
/// Term frequency is the raw count, IDF is smoothed
/// (`ln((1 + n) / (1 + df)) + 1`), and vectors are L2-normalized. Terms
/// outside the fitted vocabulary are ignored.
#[derive(Debug, Clone, Default)]
pub struct TfIdfEmbedder {
    /// Term → dimension, dimensions in sorted term order.
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfIdfEmbedder {
    /// Fit the vocabulary and IDF weights on `corpus`.
    pub fn fit<S: AsRef<str>>(corpus: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = corpus.iter().map(|d| tokenize(d.as_ref())).collect();

        let terms: BTreeSet<&str> = tokenized.iter().flatten().map(String::as_str).collect();
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect();

        // Document frequency: how many documents contain each term.
        let mut df = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: HashSet<&String> = tokens.iter().collect();
            for term in unique {
                if let Some(&dim) = vocabulary.get(term) {
                    df[dim] += 1;
                }
            }
        }

        let n_docs = corpus.len() as f32;
        let idf = df
            .iter()
            .map(|&d| ((1.0 + n_docs) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.vocabulary.len()];
        for token in tokenize(text) {
            if let Some(&dim) = self.vocabulary.get(&token) {
                vec[dim] += self.idf[dim];
            }
        }

        // L2 normalize.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for TfIdfEmbedder {
    fn embed(&self, text: &str) -> OracleResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> OracleResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.vocabulary.len()
    }

    fn name(&self) -> &str {
        "tfidf"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Pairwise cosine similarity of TF-IDF vectors fitted on `texts` itself.
pub fn pairwise_similarity<S: AsRef<str>>(texts: &[S]) -> Vec<Vec<f64>> {
    let embedder = TfIdfEmbedder::fit(texts);
    let vectors: Vec<Vec<f32>> = texts.iter().map(|t| embedder.vector(t.as_ref())).collect();
    vectors
        .iter()
        .map(|a| vectors.iter().map(|b| cosine_similarity(a, b)).collect())
        .collect()
}

/// Lowercase alphanumeric terms of two or more characters, stop words removed.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.chars().count() >= 2)
        .map(str::to_lowercase)
        .filter(|w| !is_stop_word(w))
        .collect()
}

fn is_stop_word(word: &str) -> bool {
    matches!(
        word,
        "a" | "an"
            | "and"
            | "are"
            | "as"
            | "at"
            | "be"
            | "by"
            | "for"
            | "from"
            | "in"
            | "is"
            | "it"
            | "its"
            | "of"
            | "on"
            | "or"
            | "the"
            | "to"
            | "with"
    )
}
