use std::fmt;

use serde::{Deserialize, Serialize};

use super::TermId;

/// Logical identity of a directed causal edge: (subject, predicate, object).
/// The same key may appear in both the domain and personal stores; fusion
/// merges the two contributions into one weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    pub subject: TermId,
    pub predicate: String,
    pub object: TermId,
}

impl EdgeKey {
    pub fn new(
        subject: impl Into<TermId>,
        predicate: impl Into<String>,
        object: impl Into<TermId>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]-> {}", self.subject, self.predicate, self.object)
    }
}
