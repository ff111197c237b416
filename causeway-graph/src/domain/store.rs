use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::Direction;

use causeway_core::errors::GraphError;
use causeway_core::types::{EdgeKey, TermId, Weight};

use super::{DomainEdge, RelationSpec};
use crate::registry::TermRegistry;

/// The immutable baseline causal graph.
///
/// Built exactly once by [`DomainStore::load`], before any query is served.
/// Every accessor takes `&self` and the type offers no way to alter edges;
/// the immutability invariant is enforced by the absence of write paths,
/// not by runtime guards.
pub struct DomainStore {
    graph: StableGraph<TermId, DomainEdge>,
    nodes: HashMap<TermId, NodeIndex>,
    by_key: HashMap<EdgeKey, EdgeIndex>,
    registry: Arc<TermRegistry>,
    loaded_at: DateTime<Utc>,
}

impl DomainStore {
    /// Bootstrap load. Fails fast on dangling term references, duplicate
    /// keys, or out-of-range confidences; a partially valid input never
    /// produces a store.
    pub fn load(
        registry: Arc<TermRegistry>,
        relations: Vec<RelationSpec>,
    ) -> Result<Self, GraphError> {
        let loaded_at = Utc::now();
        let mut graph = StableGraph::new();
        let mut nodes = HashMap::with_capacity(registry.len());
        for term in registry.iter() {
            let idx = graph.add_node(term.id.clone());
            nodes.insert(term.id.clone(), idx);
        }

        let mut by_key = HashMap::with_capacity(relations.len());
        for (i, spec) in relations.into_iter().enumerate() {
            let key = spec.key();

            if spec.predicate.is_empty() {
                return Err(GraphError::MalformedKey {
                    reason: format!("empty predicate on {} -> {}", key.subject, key.object),
                });
            }
            for term in [&spec.subject, &spec.object] {
                if !registry.contains(term) {
                    return Err(GraphError::DanglingReference {
                        term: term.to_string(),
                        subject: key.subject.to_string(),
                        object: key.object.to_string(),
                    });
                }
            }
            if !spec.confidence.is_finite() || !(0.0..=1.0).contains(&spec.confidence) {
                return Err(GraphError::ConfidenceOutOfRange {
                    key: key.to_string(),
                    value: spec.confidence,
                });
            }
            if by_key.contains_key(&key) {
                return Err(GraphError::DuplicateRelation {
                    key: key.to_string(),
                });
            }

            let edge = DomainEdge {
                id: format!("dom_{i:04}"),
                key: key.clone(),
                sign: spec.sign,
                confidence: Weight::new(spec.confidence),
                conditions: spec.conditions,
                evidence_count: spec.evidence_count,
                gold: spec.gold,
                semantic_score: spec.semantic_score.clamp(0.0, 1.0),
                last_confirmed_at: spec.confirmed_at.unwrap_or(loaded_at),
            };

            let subject_idx = nodes[&key.subject];
            let object_idx = nodes[&key.object];
            let edge_idx = graph.add_edge(subject_idx, object_idx, edge);
            by_key.insert(key, edge_idx);
        }

        tracing::info!(
            terms = nodes.len(),
            edges = by_key.len(),
            "domain graph loaded"
        );

        Ok(Self {
            graph,
            nodes,
            by_key,
            registry,
            loaded_at,
        })
    }

    /// Edges where `term` is subject or object, ordered by edge id.
    pub fn lookup_edges(&self, term: &TermId) -> Vec<&DomainEdge> {
        let Some(&idx) = self.nodes.get(term) else {
            return Vec::new();
        };
        let mut edges: Vec<&DomainEdge> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .chain(self.graph.edges_directed(idx, Direction::Incoming))
            .map(|e| e.weight())
            .collect();
        edges.sort_by(|a, b| a.id.cmp(&b.id));
        edges
    }

    /// Outgoing edges only, for path search.
    pub fn outgoing(&self, term: &TermId) -> Vec<&DomainEdge> {
        let Some(&idx) = self.nodes.get(term) else {
            return Vec::new();
        };
        let mut edges: Vec<&DomainEdge> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| e.weight())
            .collect();
        edges.sort_by(|a, b| a.id.cmp(&b.id));
        edges
    }

    /// Best direct edge between two terms, any predicate. Ties broken by
    /// confidence, then by id for determinism.
    pub fn direct_edge(&self, subject: &TermId, object: &TermId) -> Option<&DomainEdge> {
        let subject_idx = *self.nodes.get(subject)?;
        let object_idx = *self.nodes.get(object)?;
        self.graph
            .edges_connecting(subject_idx, object_idx)
            .map(|e| e.weight())
            .min_by(|a, b| {
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.id.cmp(&b.id))
            })
    }

    pub fn edge_by_key(&self, key: &EdgeKey) -> Option<&DomainEdge> {
        self.by_key.get(key).and_then(|&idx| self.graph.edge_weight(idx))
    }

    pub fn contains(&self, subject: &TermId, predicate: &str, object: &TermId) -> bool {
        let key = EdgeKey::new(subject.clone(), predicate, object.clone());
        self.by_key.contains_key(&key)
    }

    pub fn registry(&self) -> &Arc<TermRegistry> {
        &self.registry
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
