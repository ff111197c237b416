use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_HOPS, DEFAULT_MAX_PATHS, MAX_HOPS_CEILING};
use crate::errors::ConfigError;

/// Path retrieval bounds. `max_hops` guarantees termination of the search
/// regardless of graph density.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub max_hops: usize,
    pub max_paths: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_hops: DEFAULT_MAX_HOPS,
            max_paths: DEFAULT_MAX_PATHS,
        }
    }
}

impl RetrievalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check_hops(self.max_hops)?;
        if self.max_paths == 0 {
            return Err(ConfigError::MaxPathsZero);
        }
        Ok(())
    }

    /// Shared bound check, also applied to per-query overrides.
    pub fn check_hops(max_hops: usize) -> Result<(), ConfigError> {
        if max_hops == 0 || max_hops > MAX_HOPS_CEILING {
            return Err(ConfigError::MaxHopsOutOfRange {
                value: max_hops,
                ceiling: MAX_HOPS_CEILING,
            });
        }
        Ok(())
    }
}
