//! Node vocabulary: label ↔ node index.

use std::collections::{HashMap, HashSet};

/// Ordered, de-duplicated node labels with O(1) lookup.
///
/// A label's index is the position of its first appearance; later repeats
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vocabulary from caller-supplied labels, first occurrence wins.
    pub fn from_items<S: AsRef<str>>(items: &[S]) -> Self {
        let mut vocab = Self::new();
        for item in items {
            vocab.insert(item.as_ref());
        }
        vocab
    }

    /// Vocabulary in order of first appearance across `records`, skipping
    /// blank and excluded items.
    pub fn from_records<R, S>(records: &[R], exclude: &[String]) -> Self
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let excluded: HashSet<&str> = exclude.iter().map(String::as_str).collect();
        let mut vocab = Self::new();
        for item in records.iter().flat_map(|r| r.as_ref()) {
            let item = item.as_ref();
            if is_blank(item) || excluded.contains(item) {
                continue;
            }
            vocab.insert(item);
        }
        vocab
    }

    /// Insert `label` if new. Returns its index either way.
    pub fn insert(&mut self, label: &str) -> usize {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.labels.len();
        self.index.insert(label.to_string(), idx);
        self.labels.push(label.to_string());
        idx
    }

    /// Node index of `label`.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn label(&self, idx: usize) -> Option<&str> {
        self.labels.get(idx).map(String::as_str)
    }

    /// Labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Empty or whitespace-only.
pub(crate) fn is_blank(item: &str) -> bool {
    item.trim().is_empty()
}
