//! Graph builder: vocabulary + records → [`CoOccurrenceGraph`].

use puboracle_core::config::GraphConfig;
use puboracle_core::errors::OracleResult;
use puboracle_observability::{events, graph_span};

use crate::edges::construct_edge_list;
use crate::graph::CoOccurrenceGraph;
use crate::simplify::simplify;
use crate::vocabulary::Vocabulary;

/// Builds co-occurrence graphs with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
}

impl GraphBuilder {
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Build a graph whose nodes are `vocabulary`, in order, and whose edges
    /// come from items sharing a record.
    ///
    /// Every node is kept, isolated or not. Fails if a record item (after
    /// blank and excluded items are dropped) is not in the vocabulary.
    pub fn build<V, R, S>(&self, vocabulary: &[V], records: &[R]) -> OracleResult<CoOccurrenceGraph>
    where
        V: AsRef<str>,
        R: AsRef<[S]> + Sync,
        S: AsRef<str> + Sync,
    {
        self.build_with(Vocabulary::from_items(vocabulary), records)
    }

    /// Build with the vocabulary taken from the records themselves, in order
    /// of first appearance.
    pub fn build_from_records<R, S>(&self, records: &[R]) -> OracleResult<CoOccurrenceGraph>
    where
        R: AsRef<[S]> + Sync,
        S: AsRef<str> + Sync,
    {
        self.build_with(Vocabulary::from_records(records, &self.config.exclude), records)
    }

    fn build_with<R, S>(&self, vocabulary: Vocabulary, records: &[R]) -> OracleResult<CoOccurrenceGraph>
    where
        R: AsRef<[S]> + Sync,
        S: AsRef<str> + Sync,
    {
        let _span = graph_span!(vocabulary.len(), records.len()).entered();

        let raw = match construct_edge_list(
            &vocabulary,
            records,
            &self.config.exclude,
            self.config.directed,
        ) {
            Ok(raw) => raw,
            Err(e) => {
                events::config_rejected("graph", &e.to_string());
                return Err(e.into());
            }
        };
        let edges = simplify(&raw, &self.config);
        let graph = CoOccurrenceGraph::from_parts(vocabulary, &edges, self.config.directed);

        events::graph_built(
            graph.node_count(),
            raw.len(),
            graph.edge_count(),
            graph.total_weight(),
        );
        Ok(graph)
    }
}

/// Build a co-occurrence graph over `vocabulary` from per-record item lists.
pub fn build_graph<V, R, S>(
    vocabulary: &[V],
    records: &[R],
    config: &GraphConfig,
) -> OracleResult<CoOccurrenceGraph>
where
    V: AsRef<str>,
    R: AsRef<[S]> + Sync,
    S: AsRef<str> + Sync,
{
    GraphBuilder::new(config.clone()).build(vocabulary, records)
}

/// Build with the default configuration (undirected, no loops, mean
/// combine), nodes in order of first appearance in `records`.
pub fn build_graph_from_records<R, S>(records: &[R]) -> OracleResult<CoOccurrenceGraph>
where
    R: AsRef<[S]> + Sync,
    S: AsRef<str> + Sync,
{
    GraphBuilder::default().build_from_records(records)
}
