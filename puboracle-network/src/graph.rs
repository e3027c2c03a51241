//! petgraph-backed co-occurrence graph with label lookup.

use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use puboracle_core::errors::OracleResult;

use crate::edges::RawEdge;
use crate::vocabulary::Vocabulary;

/// An edge between two node indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// Serializable snapshot of a graph for plotting or persistence layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
    pub directed: bool,
    /// Node labels in index order.
    pub nodes: Vec<String>,
    /// Edges sorted by `(source, target)`.
    pub edges: Vec<WeightedEdge>,
}

/// Immutable weighted co-occurrence graph.
///
/// Node `i` carries the `i`-th vocabulary label. Edges are stored in
/// `(source, target)` order; undirected edges are canonical
/// (`source <= target`) and stored once.
#[derive(Debug, Clone)]
pub struct CoOccurrenceGraph {
    graph: DiGraph<String, f64>,
    vocabulary: Vocabulary,
    directed: bool,
}

impl CoOccurrenceGraph {
    /// Assemble from simplified edges, which must already be sorted.
    pub(crate) fn from_parts(vocabulary: Vocabulary, edges: &[(RawEdge, f64)], directed: bool) -> Self {
        let mut graph = DiGraph::with_capacity(vocabulary.len(), edges.len());
        for label in vocabulary.labels() {
            graph.add_node(label.clone());
        }
        for &(edge, weight) in edges {
            graph.add_edge(NodeIndex::new(edge.source), NodeIndex::new(edge.target), weight);
        }
        Self {
            graph,
            vocabulary,
            directed,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Index of the node labelled `label`.
    pub fn node_index(&self, label: &str) -> Option<usize> {
        self.vocabulary.get(label)
    }

    pub fn label(&self, idx: usize) -> Option<&str> {
        self.vocabulary.label(idx)
    }

    /// Node labels in index order.
    pub fn labels(&self) -> &[String] {
        self.vocabulary.labels()
    }

    /// Edges sorted by `(source, target)`.
    pub fn edges(&self) -> Vec<WeightedEdge> {
        self.graph
            .edge_references()
            .map(|e| WeightedEdge {
                source: e.source().index(),
                target: e.target().index(),
                weight: *e.weight(),
            })
            .collect()
    }

    /// Edges as `(source label, target label, weight)`.
    pub fn labelled_edges(&self) -> Vec<(&str, &str, f64)> {
        self.graph
            .edge_references()
            .map(|e| {
                (
                    self.graph[e.source()].as_str(),
                    self.graph[e.target()].as_str(),
                    *e.weight(),
                )
            })
            .collect()
    }

    /// Weight of the edge between two labels. Undirected graphs ignore the
    /// argument order.
    pub fn edge_weight(&self, source: &str, target: &str) -> Option<f64> {
        let a = self.node_index(source)?;
        let b = self.node_index(target)?;
        let (a, b) = if self.directed || a <= b { (a, b) } else { (b, a) };
        let edge = self.graph.find_edge(NodeIndex::new(a), NodeIndex::new(b))?;
        self.graph.edge_weight(edge).copied()
    }

    /// Number of incident edge endpoints. A loop counts twice.
    pub fn degree(&self, label: &str) -> Option<usize> {
        let idx = NodeIndex::new(self.node_index(label)?);
        Some(
            self.graph.edges_directed(idx, Direction::Outgoing).count()
                + self.graph.edges_directed(idx, Direction::Incoming).count(),
        )
    }

    /// Sum of incident edge weights. A loop counts twice.
    pub fn strength(&self, label: &str) -> Option<f64> {
        let idx = NodeIndex::new(self.node_index(label)?);
        let out: f64 = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| *e.weight())
            .sum();
        let inc: f64 = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| *e.weight())
            .sum();
        Some(out + inc)
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.graph.raw_edges().iter().map(|e| e.weight).sum()
    }

    /// Labels of nodes with no incident edge, in index order.
    pub fn isolated_nodes(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|&n| self.graph.neighbors_undirected(n).next().is_none())
            .map(|n| self.graph[n].as_str())
            .collect()
    }

    /// The underlying directed petgraph graph.
    pub fn as_petgraph(&self) -> &DiGraph<String, f64> {
        &self.graph
    }

    /// Copy into an undirected petgraph graph. Directed edges lose their
    /// orientation; opposite edges stay parallel.
    pub fn to_undirected(&self) -> UnGraph<String, f64> {
        self.graph.clone().into_edge_type()
    }

    pub fn export(&self) -> GraphExport {
        GraphExport {
            directed: self.directed,
            nodes: self.vocabulary.labels().to_vec(),
            edges: self.edges(),
        }
    }

    pub fn to_json(&self) -> OracleResult<String> {
        Ok(serde_json::to_string(&self.export())?)
    }
}
