use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// How parallel instances of one edge collapse into a single weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombineWeights {
    /// Total of the instance weights.
    #[default]
    Sum,
    /// Average of the instance weights.
    Mean,
}

impl CombineWeights {
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "sum" => Some(Self::Sum),
            "mean" => Some(Self::Mean),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Mean => "mean",
        }
    }

    /// Combine a group of instance weights. An empty group combines to 0.
    pub fn combine(&self, weights: &[f64]) -> f64 {
        if weights.is_empty() {
            return 0.0;
        }
        let total: f64 = weights.iter().sum();
        match self {
            Self::Sum => total,
            Self::Mean => total / weights.len() as f64,
        }
    }
}

impl FromStr for CombineWeights {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_name(s).ok_or_else(|| ConfigError::UnknownCombinePolicy {
            name: s.to_string(),
        })
    }
}

impl std::fmt::Display for CombineWeights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
