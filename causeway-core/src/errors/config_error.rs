/// Configuration errors. All of these are fatal at startup; none are
/// recoverable per-query.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("max_hops must be between 1 and {ceiling}, got {value}")]
    MaxHopsOutOfRange { value: usize, ceiling: usize },

    #[error("max_paths must be at least 1")]
    MaxPathsZero,

    #[error("pcs weight `{name}` out of [0, 1]: {value}")]
    WeightOutOfRange { name: &'static str, value: f64 },

    #[error("pcs weights sum to {sum}, expected ~1.0")]
    WeightSumUnbalanced { sum: f64 },

    #[error("pcs thresholds inverted: drop {drop} >= strong {strong}")]
    ThresholdsInverted { drop: f64, strong: f64 },

    #[error("threshold `{name}` out of [0, 1]: {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("fusion parameter `{name}` invalid: {value}")]
    FusionParamInvalid { name: &'static str, value: f64 },

    #[error("decay parameter `{name}` must be positive: {value}")]
    DecayParamInvalid { name: &'static str, value: f64 },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
