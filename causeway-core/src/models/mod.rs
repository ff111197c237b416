//! Shared record types crossing crate boundaries: PCS scoring artifacts,
//! routing decisions, fused paths, and the query conclusion.

mod conclusion;
mod fused;
mod pcs;
mod route;

pub use conclusion::{
    ConflictAnnotation, Direction, EvidenceCitation, ReasoningConclusion, ReasoningOutcome,
};
pub use fused::{FusedEdge, FusedPath, Provenance};
pub use pcs::{PcsBreakdown, PcsHistoryEntry, PcsSubscores};
pub use route::RouteDecision;
