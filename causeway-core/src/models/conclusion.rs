use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::FusedPath;
use crate::types::{EdgeKey, Sign, TermId};

/// Net direction of a causal query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "+")]
    Positive,
    #[serde(rename = "-")]
    Negative,
    #[serde(rename = "neutral")]
    Neutral,
    /// No paths connected the endpoints within the hop bound.
    #[serde(rename = "unknown")]
    Unknown,
}

/// Multi-path aggregation result. Dissent is always surfaced, never
/// silently dropped: it feeds downstream policy learning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasoningOutcome {
    pub direction: Direction,
    /// Saturating corroboration damped by directional agreement; <= 1.0.
    pub confidence: f64,

    pub positive_evidence: f64,
    pub negative_evidence: f64,
    /// Strength mass of sign-neutral paths.
    pub neutral_evidence: f64,

    /// Paths carrying the minority sign.
    pub dissenting_paths: usize,
    /// Evidence mass on the minority side.
    pub dissent_mass: f64,

    pub paths: Vec<FusedPath>,
    /// Index into `paths` of the strongest contributing path.
    pub strongest_path: Option<usize>,
}

impl ReasoningOutcome {
    pub fn empty() -> Self {
        Self {
            direction: Direction::Unknown,
            confidence: 0.0,
            positive_evidence: 0.0,
            negative_evidence: 0.0,
            neutral_evidence: 0.0,
            dissenting_paths: 0,
            dissent_mass: 0.0,
            paths: Vec::new(),
            strongest_path: None,
        }
    }
}

/// A single evidence reference cited by the conclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceCitation {
    pub reference: String,
    pub key: EdgeKey,
    /// True when the citing personal edge was excluded from numeric fusion
    /// by the sign-conflict rule.
    pub excluded_by_conflict: bool,
}

/// A domain/personal sign disagreement observed on a contributing edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictAnnotation {
    pub key: EdgeKey,
    pub domain_sign: Sign,
    pub personal_sign: Sign,
    pub personal_evidence: Vec<String>,
}

/// The structured output of one query. Plain record, no transport framing;
/// narration is an external concern. Owned by the query execution that
/// produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasoningConclusion {
    pub query_id: String,
    pub source: TermId,
    pub target: TermId,

    pub direction: Direction,
    pub confidence: f64,

    pub paths: Vec<FusedPath>,
    pub strongest_path: Option<FusedPath>,

    pub positive_evidence: f64,
    pub negative_evidence: f64,
    pub dissenting_paths: usize,
    pub dissent_mass: f64,

    pub evidence: Vec<EvidenceCitation>,
    pub conflicts: Vec<ConflictAnnotation>,

    pub generated_at: DateTime<Utc>,
}
