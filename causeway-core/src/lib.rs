//! # causeway-core
//!
//! Foundation crate for the Causeway dual-layer reasoning engine.
//! Defines the shared types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::CausewayConfig;
pub use errors::{CausewayError, CausewayResult};
pub use types::{EdgeKey, PcsCategory, Sign, Term, TermId, Weight};
