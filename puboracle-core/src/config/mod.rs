pub mod defaults;

mod counter_config;
mod graph_config;
mod merge_config;
mod observability_config;

pub use counter_config::CounterConfig;
pub use graph_config::GraphConfig;
pub use merge_config::MergeConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, OracleResult};

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    pub counter: CounterConfig,
    pub merge: MergeConfig,
    pub graph: GraphConfig,
    pub observability: ObservabilityConfig,
}

impl OracleConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(s: &str) -> OracleResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.merge.validate()?;
        Ok(config)
    }
}
