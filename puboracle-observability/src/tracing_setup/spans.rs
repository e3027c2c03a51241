//! Span definitions per operation: counting, merging, graph building.

/// Create a frequency-count span.
#[macro_export]
macro_rules! count_span {
    ($records:expr) => {
        tracing::info_span!("puboracle.count", records = $records)
    };
}

/// Create a similarity-merge span.
#[macro_export]
macro_rules! merge_span {
    ($table_len:expr, $similarity:expr) => {
        tracing::info_span!("puboracle.merge", table_len = $table_len, similarity = %$similarity)
    };
}

/// Create a graph-build span.
#[macro_export]
macro_rules! graph_span {
    ($nodes:expr, $records:expr) => {
        tracing::info_span!("puboracle.graph", nodes = $nodes, records = $records)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const COUNT: &str = "puboracle.count";
    pub const MERGE: &str = "puboracle.merge";
    pub const GRAPH: &str = "puboracle.graph";
}
