//! Property tests for graph construction.

use proptest::prelude::*;

use puboracle_core::config::GraphConfig;
use puboracle_network::build_graph;

const LABELS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn records_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(LABELS.to_vec()), 0..6)
            .prop_map(|r| r.into_iter().map(str::to_string).collect()),
        0..20,
    )
}

/// Pairs of positions whose items differ (the non-loop raw edges).
fn distinct_pairs(records: &[Vec<String>]) -> usize {
    records
        .iter()
        .map(|r| {
            (0..r.len())
                .flat_map(|i| (i + 1..r.len()).map(move |j| (i, j)))
                .filter(|&(i, j)| r[i] != r[j])
                .count()
        })
        .sum()
}

fn all_pairs(records: &[Vec<String>]) -> usize {
    records.iter().map(|r| r.len() * r.len().saturating_sub(1) / 2).sum()
}

proptest! {
    #[test]
    fn weight_is_conserved_without_loops(records in records_strategy(), directed in any::<bool>()) {
        let config = GraphConfig { directed, ..GraphConfig::default() };
        let graph = build_graph(&LABELS, &records, &config).unwrap();
        prop_assert_eq!(graph.total_weight(), distinct_pairs(&records) as f64);
        prop_assert!(graph.edges().iter().all(|e| e.source != e.target));
    }

    #[test]
    fn weight_is_conserved_with_loops(records in records_strategy()) {
        let config = GraphConfig { allow_loops: true, ..GraphConfig::default() };
        let graph = build_graph(&LABELS, &records, &config).unwrap();
        prop_assert_eq!(graph.total_weight(), all_pairs(&records) as f64);
    }

    #[test]
    fn every_vocabulary_entry_is_a_node(records in records_strategy()) {
        let graph = build_graph(&LABELS, &records, &GraphConfig::default()).unwrap();
        prop_assert_eq!(graph.node_count(), LABELS.len());
        prop_assert_eq!(graph.labels(), &LABELS);
    }

    #[test]
    fn edges_are_sorted_and_canonical(records in records_strategy()) {
        let graph = build_graph(&LABELS, &records, &GraphConfig::default()).unwrap();
        let edges = graph.edges();
        prop_assert!(edges.iter().all(|e| e.source <= e.target));
        prop_assert!(edges
            .windows(2)
            .all(|w| (w[0].source, w[0].target) < (w[1].source, w[1].target)));
    }

    #[test]
    fn building_is_deterministic(records in records_strategy()) {
        let a = build_graph(&LABELS, &records, &GraphConfig::default()).unwrap();
        let b = build_graph(&LABELS, &records, &GraphConfig::default()).unwrap();
        prop_assert_eq!(a.export(), b.export());
    }
}
