use serde::{Deserialize, Serialize};

use super::defaults;

/// Frequency counter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Character separating the sub-items of one raw record.
    pub delimiter: char,
    /// Literal sub-items dropped before counting.
    pub exclude: Vec<String>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            delimiter: defaults::DEFAULT_DELIMITER,
            exclude: defaults::DEFAULT_COUNTER_EXCLUDE
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
