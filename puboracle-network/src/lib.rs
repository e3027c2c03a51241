//! # puboracle-network
//!
//! Co-occurrence graphs: every pair of items that appear in the same record
//! (authors of one paper, affiliations of one author list) becomes an edge
//! weighted by how many records they share.

pub mod builder;
pub mod edges;
pub mod graph;
pub mod simplify;
pub mod vocabulary;

pub use builder::{build_graph, build_graph_from_records, GraphBuilder};
pub use graph::{CoOccurrenceGraph, GraphExport, WeightedEdge};
pub use vocabulary::Vocabulary;
