//! Runtime configuration. Every section deserializes with defaults and is
//! validated once at startup; a misconfigured engine never serves queries.

mod fusion_config;
mod pcs_config;
mod retrieval_config;

pub use fusion_config::{DecayCurve, FusionConfig};
pub use pcs_config::{PcsConfig, PcsWeights};
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration for the reasoning engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CausewayConfig {
    pub pcs: PcsConfig,
    pub fusion: FusionConfig,
    pub retrieval: RetrievalConfig,
}

impl CausewayConfig {
    /// Parse from TOML and validate. Any violation aborts startup.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pcs.validate()?;
        self.fusion.validate()?;
        self.retrieval.validate()?;
        Ok(())
    }
}
