use std::sync::Arc;

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use causeway_core::config::PcsConfig;
use causeway_core::constants::{PCS_BLEND_NEW, PCS_BLEND_OLD};
use causeway_core::errors::GraphError;
use causeway_core::models::{PcsHistoryEntry, RouteDecision};
use causeway_core::types::{EdgeKey, PcsCategory, TermId};
use causeway_scoring::pcs;

use super::{AppendLog, PersonalCandidate, PersonalEdge, UpsertEvent};
use crate::domain::DomainStore;
use crate::routing;

/// Aggregate counts over the personal graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalStats {
    pub total: usize,
    pub strong: usize,
    pub weak: usize,
    pub noisy: usize,
    pub conflicts: usize,
}

/// The append-only personal evidence graph.
///
/// Concurrency: upserts to different keys proceed independently; upserts to
/// the same key serialize on the map entry. No lock is held across I/O.
/// The keyed map is private; external mutation goes through [`upsert`]
/// only.
///
/// [`upsert`]: PersonalStore::upsert
pub struct PersonalStore {
    domain: Arc<DomainStore>,
    pcs_config: PcsConfig,
    edges: DashMap<EdgeKey, PersonalEdge>,
    log: AppendLog,
}

impl PersonalStore {
    pub fn new(domain: Arc<DomainStore>, pcs_config: PcsConfig) -> Self {
        Self {
            domain,
            pcs_config,
            edges: DashMap::new(),
            log: AppendLog::default(),
        }
    }

    /// Apply one validated candidate. Either the full append takes effect or
    /// nothing does; rejection happens before any mutation.
    ///
    /// Existing key: increments the occurrence counter, advances
    /// `last_occurred_at`, appends a history entry and the evidence
    /// reference, blends the PCS score, and recomputes the domain-conflict
    /// tag. The stored sign is never overwritten. Missing key: creates the
    /// record with `occurrence_count = 1`. There is no delete.
    pub fn upsert(&self, candidate: PersonalCandidate) -> Result<PersonalEdge, GraphError> {
        let key = self.validate(&candidate)?;

        let breakdown = pcs::score(&candidate.subscores, &self.pcs_config);
        let weight = pcs::personal_weight(&breakdown);
        let domain_edge = self.domain.edge_by_key(&key);
        let now = Utc::now();
        let entry = PcsHistoryEntry {
            timestamp: now,
            score: breakdown.score,
            category: breakdown.category,
        };

        let snapshot = match self.edges.entry(key.clone()) {
            Entry::Occupied(mut occupied) => {
                let edge = occupied.get_mut();
                if edge.sign != candidate.sign {
                    tracing::warn!(
                        key = %key,
                        stored = %edge.sign,
                        incoming = %candidate.sign,
                        "sign disagreement on repeat upsert; stored sign kept"
                    );
                }

                edge.occurrence_count += 1;
                if now > edge.last_occurred_at {
                    edge.last_occurred_at = now;
                }
                edge.pcs_score = edge.pcs_score * PCS_BLEND_OLD + breakdown.score * PCS_BLEND_NEW;
                edge.personal_weight =
                    edge.personal_weight * PCS_BLEND_OLD + weight * PCS_BLEND_NEW;
                edge.category = pcs::categorize(edge.pcs_score, &self.pcs_config);
                edge.history.push(entry);
                if !edge.evidence.contains(&candidate.evidence_ref) {
                    edge.evidence.push(candidate.evidence_ref.clone());
                }

                // Conflict tag follows the stored sign, not the incoming one.
                let route = routing::route(edge.sign, domain_edge);
                self.note_hint_mismatch(&candidate, &route);
                edge.domain_conflict = match &route {
                    RouteDecision::Conflict { domain_edge_id } => Some(domain_edge_id.clone()),
                    _ => None,
                };

                let snapshot = edge.clone();
                self.log_event(&snapshot, &candidate, false);
                snapshot
            }
            Entry::Vacant(vacant) => {
                let route = routing::route(candidate.sign, domain_edge);
                self.note_hint_mismatch(&candidate, &route);
                let domain_conflict = match &route {
                    RouteDecision::Conflict { domain_edge_id } => Some(domain_edge_id.clone()),
                    _ => None,
                };

                let hex = Uuid::new_v4().simple().to_string();
                let edge = PersonalEdge {
                    id: format!("per_{}", &hex[..8]),
                    key: key.clone(),
                    sign: candidate.sign,
                    occurrence_count: 1,
                    first_seen_at: now,
                    last_occurred_at: now,
                    pcs_score: breakdown.score,
                    category: breakdown.category,
                    personal_weight: weight,
                    history: vec![entry],
                    domain_conflict,
                    evidence: vec![candidate.evidence_ref.clone()],
                };
                let snapshot = vacant.insert(edge).clone();
                self.log_event(&snapshot, &candidate, true);
                snapshot
            }
        };

        tracing::info!(
            key = %key,
            edge_id = %snapshot.id,
            occurrences = snapshot.occurrence_count,
            category = ?snapshot.category,
            conflict = snapshot.domain_conflict.is_some(),
            "personal upsert applied"
        );

        Ok(snapshot)
    }

    /// Edges where `term` is subject or object, ordered by edge id.
    pub fn lookup_edges(&self, term: &TermId) -> Vec<PersonalEdge> {
        let mut edges: Vec<PersonalEdge> = self
            .edges
            .iter()
            .filter(|e| &e.value().key.subject == term || &e.value().key.object == term)
            .map(|e| e.value().clone())
            .collect();
        edges.sort_by(|a, b| a.id.cmp(&b.id));
        edges
    }

    /// Outgoing edges only, for path search.
    pub fn outgoing(&self, term: &TermId) -> Vec<PersonalEdge> {
        let mut edges: Vec<PersonalEdge> = self
            .edges
            .iter()
            .filter(|e| &e.value().key.subject == term)
            .map(|e| e.value().clone())
            .collect();
        edges.sort_by(|a, b| a.id.cmp(&b.id));
        edges
    }

    pub fn get(&self, key: &EdgeKey) -> Option<PersonalEdge> {
        self.edges.get(key).map(|e| e.value().clone())
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The drift-signal surface: every applied upsert, in order.
    pub fn log(&self) -> &AppendLog {
        &self.log
    }

    pub fn stats(&self) -> PersonalStats {
        let mut stats = PersonalStats {
            total: 0,
            strong: 0,
            weak: 0,
            noisy: 0,
            conflicts: 0,
        };
        for entry in self.edges.iter() {
            let edge = entry.value();
            stats.total += 1;
            match edge.category {
                PcsCategory::Strong => stats.strong += 1,
                PcsCategory::Weak => stats.weak += 1,
                PcsCategory::Noisy => stats.noisy += 1,
            }
            if edge.domain_conflict.is_some() {
                stats.conflicts += 1;
            }
        }
        stats
    }

    fn validate(&self, candidate: &PersonalCandidate) -> Result<EdgeKey, GraphError> {
        if candidate.predicate.is_empty() {
            return Err(GraphError::MalformedKey {
                reason: "empty predicate".to_string(),
            });
        }
        if candidate.subject == candidate.object {
            return Err(GraphError::MalformedKey {
                reason: format!("self-referential key: {}", candidate.subject),
            });
        }
        let registry = self.domain.registry();
        for term in [&candidate.subject, &candidate.object] {
            if !registry.contains(term) {
                return Err(GraphError::UnknownTerm {
                    term: term.to_string(),
                });
            }
        }
        Ok(candidate.key())
    }

    fn note_hint_mismatch(&self, candidate: &PersonalCandidate, route: &RouteDecision) {
        if let Some(hint) = &candidate.hint {
            if hint != route {
                tracing::debug!(
                    key = %candidate.key(),
                    hinted = ?hint,
                    decided = ?route,
                    "intake hint disagreed with recomputed route"
                );
            }
        }
    }

    // Pushed while the entry guard is held so log order matches apply order.
    fn log_event(&self, edge: &PersonalEdge, candidate: &PersonalCandidate, created: bool) {
        self.log.push(UpsertEvent {
            seq: 0, // assigned by the log
            timestamp: edge.last_occurred_at,
            edge_id: edge.id.clone(),
            key: edge.key.clone(),
            sign: edge.sign,
            pcs_score: edge.pcs_score,
            category: edge.category,
            evidence_ref: candidate.evidence_ref.clone(),
            occurrence_count: edge.occurrence_count,
            created,
            conflict: edge.domain_conflict.is_some(),
        });
    }
}
