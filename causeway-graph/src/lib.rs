//! # causeway-graph
//!
//! The two causal stores and the seams between them:
//!
//! - [`DomainStore`]: immutable baseline graph, loaded once at bootstrap.
//!   No mutation entry point exists after load; immutability is a property
//!   of the type, not a runtime check.
//! - [`PersonalStore`]: append-only evidence graph. Updates increment
//!   counters and append history; nothing is ever deleted or overwritten.
//! - [`routing`]: the tagged domain/personal destination decision.
//!
//! Term identifiers are shared by reference through [`TermRegistry`]; each
//! store owns its edge set exclusively.

pub mod domain;
pub mod personal;
pub mod registry;
pub mod routing;

pub use domain::{DomainEdge, DomainStore, RelationSpec};
pub use personal::{AppendLog, PersonalCandidate, PersonalEdge, PersonalStore, UpsertEvent};
pub use registry::TermRegistry;
