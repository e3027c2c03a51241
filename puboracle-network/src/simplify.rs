//! Simplification: raw observations → one weighted edge per key.
//!
//! Raw edges are first aggregated by key, the count becoming the weight.
//! Loops are then dropped unless allowed, and the combine policy runs over
//! the instances of each key. Since aggregation leaves one instance per key,
//! `mean` yields the aggregated count just like `sum`.

use std::collections::HashMap;

use puboracle_core::config::GraphConfig;
use puboracle_core::CombineWeights;

use crate::edges::RawEdge;

/// Group raw edges by key. Keys keep first-seen order.
pub fn aggregate(raw: &[RawEdge]) -> Vec<(RawEdge, u64)> {
    let mut position: HashMap<RawEdge, usize> = HashMap::new();
    let mut counts: Vec<(RawEdge, u64)> = Vec::new();
    for &edge in raw {
        match position.get(&edge) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                position.insert(edge, counts.len());
                counts.push((edge, 1));
            }
        }
    }
    counts
}

/// Aggregate, drop loops unless allowed, collapse, and sort by
/// `(source, target)`.
pub fn simplify(raw: &[RawEdge], config: &GraphConfig) -> Vec<(RawEdge, f64)> {
    let policy = config.combine_weights.unwrap_or(CombineWeights::Sum);
    let collapse = config.collapses_multiple();

    let mut edges: Vec<(RawEdge, f64)> = aggregate(raw)
        .into_iter()
        .filter(|(edge, _)| config.allow_loops || !edge.is_loop())
        .map(|(edge, count)| {
            let weight = count as f64;
            if collapse {
                (edge, policy.combine(&[weight]))
            } else {
                (edge, weight)
            }
        })
        .collect();
    edges.sort_by_key(|(edge, _)| *edge);
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(usize, usize)]) -> Vec<RawEdge> {
        pairs.iter().map(|&(s, t)| RawEdge::new(s, t, false)).collect()
    }

    #[test]
    fn counts_become_weights() {
        let edges = simplify(&raw(&[(1, 2), (0, 1), (1, 0)]), &GraphConfig::default());
        assert_eq!(
            edges,
            vec![(RawEdge::new(0, 1, false), 2.0), (RawEdge::new(1, 2, false), 1.0)]
        );
    }

    #[test]
    fn loops_need_opt_in() {
        let input = raw(&[(2, 2), (0, 2)]);
        assert_eq!(simplify(&input, &GraphConfig::default()).len(), 1);

        let config = GraphConfig {
            allow_loops: true,
            ..GraphConfig::default()
        };
        let edges = simplify(&input, &config);
        assert_eq!(edges.len(), 2);
        assert!(edges[1].0.is_loop());
    }

    #[test]
    fn sum_and_mean_agree_after_aggregation() {
        let input = raw(&[(0, 1), (0, 1), (0, 1)]);
        for combine in [Some(CombineWeights::Sum), Some(CombineWeights::Mean), None] {
            let config = GraphConfig {
                combine_weights: combine,
                ..GraphConfig::default()
            };
            assert_eq!(simplify(&input, &config)[0].1, 3.0);
        }
    }

    #[test]
    fn aggregation_keeps_first_seen_order() {
        let counts = aggregate(&raw(&[(3, 4), (0, 1), (3, 4)]));
        assert_eq!(counts[0], (RawEdge::new(3, 4, false), 2));
        assert_eq!(counts[1], (RawEdge::new(0, 1, false), 1));
    }
}
