//! Edge-age decay. Evaluates the configured curve; monotonically
//! non-decreasing in age and clamped so age alone never erases an edge.

use causeway_core::config::DecayCurve;
use causeway_core::constants::MAX_DECAY;

/// Decay factor for an edge of the given age. Range: [0.0, MAX_DECAY].
/// Fusion multiplies the domain confidence by `1 - decay`.
pub fn factor(curve: &DecayCurve, age: chrono::Duration) -> f64 {
    let days = age.num_seconds().max(0) as f64 / 86400.0;
    let raw = match curve {
        DecayCurve::Linear { rate_per_day } => rate_per_day * days,
        DecayCurve::Exponential { half_life_days } => {
            1.0 - (-days * std::f64::consts::LN_2 / half_life_days).exp()
        }
    };
    raw.clamp(0.0, MAX_DECAY)
}
