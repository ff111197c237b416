//! # causeway-scoring
//!
//! Pure scoring functions: the PCS weighted composite that classifies
//! personal evidence, and the decay curves that age domain edges.
//! Everything here is stateless and deterministic: identical inputs always
//! yield identical output, which fusion and offline policy re-tuning rely on.

pub mod decay;
pub mod pcs;
