//! Append-only personal evidence graph.

mod append_log;
mod edge;
mod store;

pub use append_log::{AppendLog, UpsertEvent};
pub use edge::{PersonalCandidate, PersonalEdge};
pub use store::{PersonalStats, PersonalStore};
