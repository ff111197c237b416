//! Immutable domain graph: baseline causal knowledge, loaded once.

mod edge;
mod store;

pub use edge::{DomainEdge, RelationSpec};
pub use store::DomainStore;
