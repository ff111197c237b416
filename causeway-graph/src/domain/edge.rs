use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use causeway_core::types::{EdgeKey, Sign, TermId, Weight};

/// A directed causal relation in the domain graph. Immutable for the
/// process lifetime once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEdge {
    pub id: String,
    pub key: EdgeKey,
    pub sign: Sign,
    pub confidence: Weight,
    pub conditions: Vec<String>,
    pub evidence_count: u32,
    /// Human-verified (gold set) relation.
    pub gold: bool,
    /// Semantic validation score in [0, 1], from the curation pipeline.
    pub semantic_score: f64,
    /// Load time, or the last curation reconfirmation if provided.
    /// Decay is measured from here.
    pub last_confirmed_at: DateTime<Utc>,
}

fn default_evidence_count() -> u32 {
    1
}

fn default_semantic_score() -> f64 {
    1.0
}

/// One relation row of the bootstrap input. Malformed rows abort startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationSpec {
    pub subject: TermId,
    pub predicate: String,
    pub object: TermId,
    pub sign: Sign,
    pub confidence: f64,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default = "default_evidence_count")]
    pub evidence_count: u32,
    #[serde(default)]
    pub gold: bool,
    #[serde(default = "default_semantic_score")]
    pub semantic_score: f64,
    #[serde(default)]
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl RelationSpec {
    pub fn new(
        subject: impl Into<TermId>,
        predicate: impl Into<String>,
        object: impl Into<TermId>,
        sign: Sign,
        confidence: f64,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            sign,
            confidence,
            conditions: Vec::new(),
            evidence_count: default_evidence_count(),
            gold: false,
            semantic_score: default_semantic_score(),
            confirmed_at: None,
        }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(
            self.subject.clone(),
            self.predicate.clone(),
            self.object.clone(),
        )
    }
}
