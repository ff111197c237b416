//! Shared term registry. Both stores resolve term identifiers against it;
//! neither owns it.

use std::collections::HashMap;

use causeway_core::errors::GraphError;
use causeway_core::types::{Term, TermId};

/// Read-only map of term id to term, built once at bootstrap.
#[derive(Debug, Default)]
pub struct TermRegistry {
    terms: HashMap<TermId, Term>,
}

impl TermRegistry {
    /// Build from the bootstrap entity collection. Duplicate or empty ids
    /// abort startup.
    pub fn from_terms(terms: Vec<Term>) -> Result<Self, GraphError> {
        let mut map = HashMap::with_capacity(terms.len());
        for term in terms {
            if term.id.as_str().is_empty() {
                return Err(GraphError::MalformedKey {
                    reason: "empty term id".to_string(),
                });
            }
            if map.insert(term.id.clone(), term.clone()).is_some() {
                return Err(GraphError::DuplicateTerm {
                    term: term.id.to_string(),
                });
            }
        }
        Ok(Self { terms: map })
    }

    pub fn get(&self, id: &TermId) -> Option<&Term> {
        self.terms.get(id)
    }

    pub fn contains(&self, id: &TermId) -> bool {
        self.terms.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.values()
    }
}
