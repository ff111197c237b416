//! Destination routing: where does an incoming candidate sit relative to
//! the domain graph? One function, one tagged result.

use causeway_core::models::RouteDecision;
use causeway_core::types::Sign;

use crate::domain::DomainEdge;

/// Compare a candidate's sign against the matching domain edge, if any.
/// Conflict iff a domain edge exists and the signs differ.
pub fn route(candidate_sign: Sign, domain_edge: Option<&DomainEdge>) -> RouteDecision {
    match domain_edge {
        None => RouteDecision::Unknown,
        Some(edge) if edge.sign == candidate_sign => RouteDecision::DomainMatch {
            domain_edge_id: edge.id.clone(),
        },
        Some(edge) => RouteDecision::Conflict {
            domain_edge_id: edge.id.clone(),
        },
    }
}
