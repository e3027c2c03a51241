//! Structured log events for the metric operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed frequency count.
pub fn occurrences_counted(records: usize, items: usize, unique: usize) {
    tracing::info!(
        event = "occurrences_counted",
        records = records,
        items = items,
        unique = unique,
        "occurrences counted"
    );
}

/// Log a similarity cluster being formed.
pub fn cluster_formed(representative: &str, members: usize, count: u64) {
    tracing::debug!(
        event = "cluster_formed",
        representative = %representative,
        members = members,
        count = count,
        "similarity cluster formed"
    );
}

/// Log a completed similarity merge.
pub fn merge_completed(window: usize, clusters: usize, excluded: usize, returned: usize) {
    tracing::info!(
        event = "merge_completed",
        window = window,
        clusters = clusters,
        excluded = excluded,
        returned = returned,
        "similarity merge completed"
    );
}

/// Log a `top_n` request clamped to the available items.
pub fn top_n_clamped(requested: usize, available: usize) {
    tracing::debug!(
        event = "top_n_clamped",
        requested = requested,
        available = available,
        "top_n clamped to available items"
    );
}

/// Log a completed graph build.
pub fn graph_built(nodes: usize, raw_edges: usize, edges: usize, total_weight: f64) {
    tracing::info!(
        event = "graph_built",
        nodes = nodes,
        raw_edges = raw_edges,
        edges = edges,
        total_weight = total_weight,
        "co-occurrence graph built"
    );
}

/// Log a configuration rejection.
pub fn config_rejected(operation: &str, reason: &str) {
    tracing::warn!(
        event = "config_rejected",
        operation = %operation,
        reason = %reason,
        "configuration rejected"
    );
}
