//! Shared value types: term identifiers, edge keys, signs, clamped weights.

mod key;
mod sign;
mod term;
mod weight;

pub use key::EdgeKey;
pub use sign::Sign;
pub use term::{Term, TermId};
pub use weight::Weight;

use serde::{Deserialize, Serialize};

/// Categorical label attached to a PCS score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PcsCategory {
    /// Reliable personal evidence.
    Strong,
    /// Usable but weakly supported.
    Weak,
    /// Below the drop threshold; kept for history, heavily discounted.
    Noisy,
}
