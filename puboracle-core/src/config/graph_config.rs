use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::CombineWeights;

/// Co-occurrence graph configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Keep edge orientation as emitted instead of canonical unordered pairs.
    pub directed: bool,
    /// Keep parallel instances of one edge. Ignored when `combine_weights` is set.
    pub allow_multiple: bool,
    /// Keep self pairs produced by an item repeated inside one record.
    pub allow_loops: bool,
    /// Policy collapsing parallel edge instances.
    pub combine_weights: Option<CombineWeights>,
    /// Items dropped from every record before edges are emitted.
    pub exclude: Vec<String>,
}

impl GraphConfig {
    /// Whether the simplification pass collapses parallel instances.
    pub fn collapses_multiple(&self) -> bool {
        !self.allow_multiple || self.combine_weights.is_some()
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: defaults::DEFAULT_DIRECTED,
            allow_multiple: defaults::DEFAULT_ALLOW_MULTIPLE,
            allow_loops: defaults::DEFAULT_ALLOW_LOOPS,
            combine_weights: Some(CombineWeights::Mean),
            exclude: Vec::new(),
        }
    }
}
