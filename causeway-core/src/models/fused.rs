use serde::{Deserialize, Serialize};

use crate::types::{EdgeKey, Sign, TermId};

/// Which store(s) contributed to a fused edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Domain,
    Personal,
    Both,
}

/// One logical edge after weight fusion. Query-scoped; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusedEdge {
    pub key: EdgeKey,
    /// Effective sign. On a sign conflict this is the domain sign.
    pub sign: Sign,
    pub provenance: Provenance,

    /// `W_D = domain_conf * (1 - decay) * semantic`, with evidence and gold
    /// bonuses applied. 0 when no domain edge exists for the key.
    pub domain_weight: f64,
    /// `W_P = PCS * personal_weight`, damped when a domain edge exists.
    /// 0 when no personal edge exists, or when excluded by a sign conflict.
    pub personal_weight: f64,
    /// `W_D + W_P`, clamped to the documented [0.01, 1.0] range.
    pub fused_weight: f64,

    pub domain_conf: f64,
    pub decay_factor: f64,
    pub semantic_score: f64,
    pub pcs_score: f64,
    /// Sign of the personal edge for this key, when one exists (kept even
    /// when the contribution was excluded).
    pub personal_sign: Option<Sign>,

    /// True when a personal edge with the opposite sign was excluded from
    /// the numeric fusion.
    pub sign_conflict: bool,
    /// Evidence references contributing to the fused weight.
    pub evidence: Vec<String>,
    /// Evidence of a conflicting personal edge, retained as annotation only.
    pub excluded_evidence: Vec<String>,
}

/// A retrieved path after per-edge fusion. Query-scoped; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusedPath {
    pub id: String,
    pub nodes: Vec<TermId>,
    pub edges: Vec<FusedEdge>,
    /// Product of edge signs.
    pub sign: Sign,
    /// Product of clamped fused weights, in (0, 1].
    pub strength: f64,
    pub domain_edge_count: usize,
}

impl FusedPath {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn has_conflict(&self) -> bool {
        self.edges.iter().any(|e| e.sign_conflict)
    }
}
