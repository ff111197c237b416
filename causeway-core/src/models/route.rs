use serde::{Deserialize, Serialize};

/// Destination decision for an incoming personal candidate, relative to the
/// domain graph. Produced by one routing function and consumed as a tag,
/// never re-derived ad hoc at call sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RouteDecision {
    /// A domain edge exists for the key and the signs agree.
    DomainMatch { domain_edge_id: String },
    /// No domain edge exists for the key.
    Unknown,
    /// A domain edge exists but the signs differ. Domain keeps numeric
    /// priority; the personal record is tagged.
    Conflict { domain_edge_id: String },
}

impl RouteDecision {
    pub fn is_conflict(&self) -> bool {
        matches!(self, RouteDecision::Conflict { .. })
    }
}
