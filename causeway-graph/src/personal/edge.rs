use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use causeway_core::models::{PcsHistoryEntry, PcsSubscores, RouteDecision};
use causeway_core::types::{EdgeKey, PcsCategory, Sign, TermId};

/// A directed causal relation in the personal graph.
///
/// Never deleted. Repeat observations of the same key increment
/// `occurrence_count`, advance `last_occurred_at`, and append to `history`;
/// the sign is fixed by the first observation and prior history entries are
/// never rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalEdge {
    pub id: String,
    pub key: EdgeKey,
    pub sign: Sign,

    /// Monotonically non-decreasing observation counter.
    pub occurrence_count: u32,
    pub first_seen_at: DateTime<Utc>,
    /// Monotonically non-decreasing across updates.
    pub last_occurred_at: DateTime<Utc>,

    /// Blended PCS score (recent observations weigh in gradually).
    pub pcs_score: f64,
    pub category: PcsCategory,
    /// Tiered fusion weight derived from the PCS category.
    pub personal_weight: f64,
    /// Append-only score history, one entry per upsert.
    pub history: Vec<PcsHistoryEntry>,

    /// Id of the conflicting domain edge, when the domain disagrees on sign.
    pub domain_conflict: Option<String>,
    /// Fragment/document references, insertion-ordered, deduplicated.
    pub evidence: Vec<String>,
}

/// A validated edge candidate arriving from the intake collaborators.
/// Schema validation happened upstream; the store only applies the upsert
/// contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalCandidate {
    pub subject: TermId,
    pub predicate: String,
    pub object: TermId,
    pub sign: Sign,
    pub evidence_ref: String,
    /// P1..P4, computed upstream.
    pub subscores: PcsSubscores,
    /// Destination hint from the intake pipeline. The store recomputes the
    /// authoritative decision; a mismatch is logged, not an error.
    #[serde(default)]
    pub hint: Option<RouteDecision>,
}

impl PersonalCandidate {
    pub fn new(
        subject: impl Into<TermId>,
        predicate: impl Into<String>,
        object: impl Into<TermId>,
        sign: Sign,
        evidence_ref: impl Into<String>,
        subscores: PcsSubscores,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            sign,
            evidence_ref: evidence_ref.into(),
            subscores,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: RouteDecision) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(
            self.subject.clone(),
            self.predicate.clone(),
            self.object.clone(),
        )
    }
}
