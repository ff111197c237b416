//! Named defaults and bounds shared across the workspace.
//! Config structs reference these instead of hardcoding literals.

/// Default retrieval hop bound.
pub const DEFAULT_MAX_HOPS: usize = 3;

/// Upper bound any hop limit (configured or per-query override) must respect.
/// An unbounded search is a configuration error, never a runtime fault.
pub const MAX_HOPS_CEILING: usize = 8;

/// Default cap on retrieved paths per query.
pub const DEFAULT_MAX_PATHS: usize = 10;

/// Damping applied to the personal contribution when a domain edge exists
/// for the same key.
pub const DEFAULT_PERSONAL_DAMPING: f64 = 0.3;

/// Per-evidence increment of the domain evidence bonus.
pub const DEFAULT_EVIDENCE_BONUS_RATE: f64 = 0.02;

/// Cap on the accumulated evidence bonus.
pub const EVIDENCE_BONUS_CAP: f64 = 0.2;

/// Multiplier for human-verified (gold) domain edges.
pub const DEFAULT_GOLD_BONUS: f64 = 1.2;

/// Fused edge weights are clamped to [MIN_FUSED_WEIGHT, 1.0] before path
/// strength multiplication.
pub const MIN_FUSED_WEIGHT: f64 = 0.01;

/// Decay never fully erases a domain edge.
pub const MAX_DECAY: f64 = 0.99;

/// Net evidence within this band is reported as neutral.
pub const NEUTRAL_BAND: f64 = 0.05;

/// PCS category thresholds.
pub const DEFAULT_STRONG_THRESHOLD: f64 = 0.7;
pub const DEFAULT_DROP_THRESHOLD: f64 = 0.4;

/// Default PCS sub-score weights (domain proximity, semantic strength,
/// source trust, consistency).
pub const DEFAULT_PCS_WEIGHTS: [f64; 4] = [0.25, 0.3, 0.2, 0.25];

/// Sanity bounds for the PCS weight vector sum. Sum = 1.0 is the
/// convention; anything outside this range is rejected at startup.
pub const PCS_WEIGHT_SUM_MIN: f64 = 0.5;
pub const PCS_WEIGHT_SUM_MAX: f64 = 1.5;

/// Blend ratio applied when a repeat upsert refreshes the stored PCS score
/// and personal weight: `new = old * PCS_BLEND_OLD + incoming * PCS_BLEND_NEW`.
pub const PCS_BLEND_OLD: f64 = 0.7;
pub const PCS_BLEND_NEW: f64 = 0.3;
