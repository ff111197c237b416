use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DROP_THRESHOLD, DEFAULT_PCS_WEIGHTS, DEFAULT_STRONG_THRESHOLD, PCS_WEIGHT_SUM_MAX,
    PCS_WEIGHT_SUM_MIN,
};
use crate::errors::ConfigError;

/// Weight vector for the four PCS sub-scores. Sum = 1.0 by convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PcsWeights {
    pub domain_proximity: f64,
    pub semantic_strength: f64,
    pub source_trust: f64,
    pub consistency: f64,
}

impl PcsWeights {
    pub fn sum(&self) -> f64 {
        self.domain_proximity + self.semantic_strength + self.source_trust + self.consistency
    }
}

impl Default for PcsWeights {
    fn default() -> Self {
        let [w1, w2, w3, w4] = DEFAULT_PCS_WEIGHTS;
        Self {
            domain_proximity: w1,
            semantic_strength: w2,
            source_trust: w3,
            consistency: w4,
        }
    }
}

/// Personal Confidence Score configuration: sub-score weights and the
/// category thresholds. Thresholds are configuration, never hardcoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PcsConfig {
    pub weights: PcsWeights,
    /// PCS >= this is STRONG.
    pub strong_threshold: f64,
    /// PCS below this is NOISY.
    pub drop_threshold: f64,
}

impl Default for PcsConfig {
    fn default() -> Self {
        Self {
            weights: PcsWeights::default(),
            strong_threshold: DEFAULT_STRONG_THRESHOLD,
            drop_threshold: DEFAULT_DROP_THRESHOLD,
        }
    }
}

impl PcsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("domain_proximity", self.weights.domain_proximity),
            ("semantic_strength", self.weights.semantic_strength),
            ("source_trust", self.weights.source_trust),
            ("consistency", self.weights.consistency),
        ];
        for (name, value) in named {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(ConfigError::WeightOutOfRange { name, value });
            }
        }

        let sum = self.weights.sum();
        if !(PCS_WEIGHT_SUM_MIN..=PCS_WEIGHT_SUM_MAX).contains(&sum) {
            return Err(ConfigError::WeightSumUnbalanced { sum });
        }

        for (name, value) in [
            ("strong_threshold", self.strong_threshold),
            ("drop_threshold", self.drop_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        if self.drop_threshold >= self.strong_threshold {
            return Err(ConfigError::ThresholdsInverted {
                drop: self.drop_threshold,
                strong: self.strong_threshold,
            });
        }

        Ok(())
    }
}
