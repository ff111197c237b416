use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::PcsCategory;

/// The four PCS sub-scores, each in [0, 1], computed by upstream
/// validation collaborators and attached to every personal upsert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PcsSubscores {
    /// P1: agreement with nearby domain knowledge.
    pub domain_proximity: f64,
    /// P2: strength of the semantic validation tag.
    pub semantic_strength: f64,
    /// P3: trust in the source of origin.
    pub source_trust: f64,
    /// P4: internal consistency over time.
    pub consistency: f64,
}

impl PcsSubscores {
    pub fn new(p1: f64, p2: f64, p3: f64, p4: f64) -> Self {
        Self {
            domain_proximity: p1,
            semantic_strength: p2,
            source_trust: p3,
            consistency: p4,
        }
    }
}

/// Full PCS result: weighted composite plus the per-factor contributions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PcsBreakdown {
    pub subscores: PcsSubscores,
    /// Weighted contribution of each sub-score, in P1..P4 order.
    pub weighted: [f64; 4],
    /// `Σ wᵢ·Pᵢ`, clamped to [0, 1].
    pub score: f64,
    pub category: PcsCategory,
}

/// One entry of a personal edge's append-only score history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PcsHistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub score: f64,
    pub category: PcsCategory,
}
