use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EVIDENCE_BONUS_RATE, DEFAULT_GOLD_BONUS, DEFAULT_PERSONAL_DAMPING,
};
use crate::errors::ConfigError;

/// Functional form of domain-edge decay. Decay grows monotonically with
/// edge age (time since load or last reconfirmation); the fusion contract
/// is agnostic to which curve is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "curve", rename_all = "snake_case")]
pub enum DecayCurve {
    /// `decay = rate_per_day * age_days`, clamped.
    Linear { rate_per_day: f64 },
    /// `decay = 1 - 2^(-age_days / half_life_days)`, clamped.
    Exponential { half_life_days: f64 },
}

impl Default for DecayCurve {
    fn default() -> Self {
        Self::Exponential {
            half_life_days: 180.0,
        }
    }
}

/// Edge weight fusion (EES) parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Damping applied to the personal contribution when a domain edge
    /// exists for the same key. Must be in (0, 1).
    pub personal_damping: f64,
    /// Per-evidence increment of the domain evidence bonus.
    pub evidence_bonus_rate: f64,
    /// Multiplier for human-verified domain edges. Must be >= 1.
    pub gold_bonus: f64,
    pub decay: DecayCurve,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            personal_damping: DEFAULT_PERSONAL_DAMPING,
            evidence_bonus_rate: DEFAULT_EVIDENCE_BONUS_RATE,
            gold_bonus: DEFAULT_GOLD_BONUS,
            decay: DecayCurve::default(),
        }
    }
}

impl FusionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.personal_damping.is_finite() || self.personal_damping <= 0.0 || self.personal_damping >= 1.0 {
            return Err(ConfigError::FusionParamInvalid {
                name: "personal_damping",
                value: self.personal_damping,
            });
        }
        if !self.evidence_bonus_rate.is_finite() || self.evidence_bonus_rate < 0.0 {
            return Err(ConfigError::FusionParamInvalid {
                name: "evidence_bonus_rate",
                value: self.evidence_bonus_rate,
            });
        }
        if !self.gold_bonus.is_finite() || self.gold_bonus < 1.0 {
            return Err(ConfigError::FusionParamInvalid {
                name: "gold_bonus",
                value: self.gold_bonus,
            });
        }
        match self.decay {
            DecayCurve::Linear { rate_per_day } => {
                if !rate_per_day.is_finite() || rate_per_day < 0.0 {
                    return Err(ConfigError::DecayParamInvalid {
                        name: "rate_per_day",
                        value: rate_per_day,
                    });
                }
            }
            DecayCurve::Exponential { half_life_days } => {
                if !half_life_days.is_finite() || half_life_days <= 0.0 {
                    return Err(ConfigError::DecayParamInvalid {
                        name: "half_life_days",
                        value: half_life_days,
                    });
                }
            }
        }
        Ok(())
    }
}
