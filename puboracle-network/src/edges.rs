//! Raw co-occurrence observations.
//!
//! One [`RawEdge`] per pair of positions inside a record. Nothing is merged
//! here; aggregation happens in [`crate::simplify`].

use std::collections::HashSet;

use rayon::prelude::*;

use puboracle_core::errors::ConfigError;

use crate::vocabulary::{is_blank, Vocabulary};

/// One observed co-occurrence between two node indices.
///
/// Undirected edges are canonical: `source <= target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawEdge {
    pub source: usize,
    pub target: usize,
}

impl RawEdge {
    pub fn new(source: usize, target: usize, directed: bool) -> Self {
        if directed || source <= target {
            Self { source, target }
        } else {
            Self {
                source: target,
                target: source,
            }
        }
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Emit the raw edges of every record, record order preserved.
///
/// Blank and excluded items are dropped first. Every remaining pair of
/// positions `i < j` yields an edge oriented from the earlier position, so a
/// record with fewer than two items yields nothing and an item repeated in
/// one record yields a self pair. An item missing from `vocabulary` fails
/// with the lowest offending record index.
pub fn construct_edge_list<R, S>(
    vocabulary: &Vocabulary,
    records: &[R],
    exclude: &[String],
    directed: bool,
) -> Result<Vec<RawEdge>, ConfigError>
where
    R: AsRef<[S]> + Sync,
    S: AsRef<str> + Sync,
{
    let excluded: HashSet<&str> = exclude.iter().map(String::as_str).collect();

    // Results are collected in record order before the first error is taken,
    // so the reported record does not depend on thread scheduling.
    let per_record: Vec<Result<Vec<RawEdge>, ConfigError>> = records
        .par_iter()
        .enumerate()
        .map(|(record, items)| record_edges(vocabulary, record, items.as_ref(), &excluded, directed))
        .collect();

    let mut edges = Vec::new();
    for result in per_record {
        edges.extend(result?);
    }
    Ok(edges)
}

fn record_edges<S: AsRef<str>>(
    vocabulary: &Vocabulary,
    record: usize,
    items: &[S],
    excluded: &HashSet<&str>,
    directed: bool,
) -> Result<Vec<RawEdge>, ConfigError> {
    let mut nodes = Vec::with_capacity(items.len());
    for item in items {
        let item = item.as_ref();
        if is_blank(item) || excluded.contains(item) {
            continue;
        }
        let idx = vocabulary
            .get(item)
            .ok_or_else(|| ConfigError::ItemNotInVocabulary {
                item: item.to_string(),
                record,
            })?;
        nodes.push(idx);
    }

    let mut edges = Vec::with_capacity(nodes.len() * nodes.len().saturating_sub(1) / 2);
    for (i, &a) in nodes.iter().enumerate() {
        for &b in &nodes[i + 1..] {
            edges.push(RawEdge::new(a, b, directed));
        }
    }
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::from_items(&["A", "B", "C"])
    }

    #[test]
    fn every_position_pair_is_emitted() {
        let records = vec![vec!["C", "A", "B"]];
        let edges = construct_edge_list(&vocab(), &records, &[], false).unwrap();
        assert_eq!(
            edges,
            vec![RawEdge::new(0, 2, false), RawEdge::new(1, 2, false), RawEdge::new(0, 1, false)]
        );
        assert_eq!(edges[0], RawEdge { source: 0, target: 2 });
    }

    #[test]
    fn directed_keeps_record_orientation() {
        let records = vec![vec!["C", "A"]];
        let edges = construct_edge_list(&vocab(), &records, &[], true).unwrap();
        assert_eq!(edges, vec![RawEdge { source: 2, target: 0 }]);
    }

    #[test]
    fn short_records_emit_nothing() {
        let records: Vec<Vec<&str>> = vec![vec![], vec!["A"], vec!["A", " ", ""]];
        assert!(construct_edge_list(&vocab(), &records, &[], false)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn repeated_item_yields_self_pair() {
        let records = vec![vec!["B", "B"]];
        let edges = construct_edge_list(&vocab(), &records, &[], false).unwrap();
        assert_eq!(edges.len(), 1);
        assert!(edges[0].is_loop());
    }

    #[test]
    fn unknown_item_names_the_first_bad_record() {
        let records = vec![vec!["A", "B"], vec!["A", "X"], vec!["Y", "B"]];
        let err = construct_edge_list(&vocab(), &records, &[], false).unwrap_err();
        match err {
            ConfigError::ItemNotInVocabulary { item, record } => {
                assert_eq!(item, "X");
                assert_eq!(record, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn excluded_items_are_not_looked_up() {
        let records = vec![vec!["A", "unknown", "B"]];
        let edges =
            construct_edge_list(&vocab(), &records, &["unknown".to_string()], false).unwrap();
        assert_eq!(edges, vec![RawEdge { source: 0, target: 1 }]);
    }
}
