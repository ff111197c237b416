//! # causeway-reasoning
//!
//! Answers causal queries over the union of the domain and personal graphs:
//! domain-first path retrieval, per-edge weight fusion with sign-conflict
//! arbitration, multi-path aggregation, and the structured conclusion.
//!
//! Query execution is read-only with respect to both stores and runs fully
//! in parallel across independent queries.

pub mod aggregate;
pub mod conclusion;
pub mod engine;
pub mod fusion;
pub mod retrieval;

pub use aggregate::PathAggregator;
pub use conclusion::ConclusionBuilder;
pub use engine::ReasoningEngine;
pub use fusion::EdgeWeightFuser;
pub use retrieval::{GraphRetriever, RawEdge, RawPath};
