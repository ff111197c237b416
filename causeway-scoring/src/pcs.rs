//! Personal Confidence Score (PCS).
//!
//! ```text
//! PCS = w1*P1(domain_proximity) + w2*P2(semantic) + w3*P3(source) + w4*P4(consistency)
//! ```
//!
//! Category: STRONG (>= strong_threshold), WEAK (>= drop_threshold),
//! NOISY (below).

use causeway_core::config::PcsConfig;
use causeway_core::models::{PcsBreakdown, PcsSubscores};
use causeway_core::types::PcsCategory;

/// Compute the weighted composite and its category.
pub fn score(subscores: &PcsSubscores, config: &PcsConfig) -> PcsBreakdown {
    let w = &config.weights;
    let weighted = [
        w.domain_proximity * subscores.domain_proximity.clamp(0.0, 1.0),
        w.semantic_strength * subscores.semantic_strength.clamp(0.0, 1.0),
        w.source_trust * subscores.source_trust.clamp(0.0, 1.0),
        w.consistency * subscores.consistency.clamp(0.0, 1.0),
    ];
    let score = weighted.iter().sum::<f64>().clamp(0.0, 1.0);

    PcsBreakdown {
        subscores: *subscores,
        weighted,
        score,
        category: categorize(score, config),
    }
}

/// Categorical label for a PCS score under the configured thresholds.
pub fn categorize(score: f64, config: &PcsConfig) -> PcsCategory {
    if score >= config.strong_threshold {
        PcsCategory::Strong
    } else if score >= config.drop_threshold {
        PcsCategory::Weak
    } else {
        PcsCategory::Noisy
    }
}

/// Weight a personal edge carries into fusion, tiered by category:
/// strong beliefs keep their full score, weak ones are halved, noisy
/// hypotheses are kept for history but heavily discounted.
pub fn personal_weight(breakdown: &PcsBreakdown) -> f64 {
    match breakdown.category {
        PcsCategory::Strong => breakdown.score,
        PcsCategory::Weak => breakdown.score * 0.5,
        PcsCategory::Noisy => breakdown.score * 0.1,
    }
}
