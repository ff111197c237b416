//! Structured conclusion assembly.
//!
//! The builder flattens an aggregation outcome into the record handed to
//! callers: direction, confidence, the contributing paths, deduplicated
//! evidence citations, and every sign conflict observed along the way.

use std::collections::HashSet;

use chrono::Utc;

use causeway_core::models::{
    ConflictAnnotation, EvidenceCitation, ReasoningConclusion, ReasoningOutcome,
};
use causeway_core::types::TermId;

pub struct ConclusionBuilder;

impl ConclusionBuilder {
    pub fn build(
        query_id: String,
        source: &TermId,
        target: &TermId,
        outcome: ReasoningOutcome,
    ) -> ReasoningConclusion {
        let evidence = Self::collect_citations(&outcome);
        let conflicts = Self::collect_conflicts(&outcome);
        let strongest_path = outcome
            .strongest_path
            .and_then(|i| outcome.paths.get(i).cloned());

        ReasoningConclusion {
            query_id,
            source: source.clone(),
            target: target.clone(),
            direction: outcome.direction,
            confidence: outcome.confidence,
            paths: outcome.paths,
            strongest_path,
            positive_evidence: outcome.positive_evidence,
            negative_evidence: outcome.negative_evidence,
            dissenting_paths: outcome.dissenting_paths,
            dissent_mass: outcome.dissent_mass,
            evidence,
            conflicts,
            generated_at: Utc::now(),
        }
    }

    /// One citation per (reference, key) pair across every path. Evidence
    /// excluded by a sign conflict is still cited, flagged as such.
    fn collect_citations(outcome: &ReasoningOutcome) -> Vec<EvidenceCitation> {
        let mut seen = HashSet::new();
        let mut citations = Vec::new();
        for path in &outcome.paths {
            for edge in &path.edges {
                for reference in &edge.evidence {
                    if seen.insert((reference.clone(), edge.key.clone())) {
                        citations.push(EvidenceCitation {
                            reference: reference.clone(),
                            key: edge.key.clone(),
                            excluded_by_conflict: false,
                        });
                    }
                }
                for reference in &edge.excluded_evidence {
                    if seen.insert((reference.clone(), edge.key.clone())) {
                        citations.push(EvidenceCitation {
                            reference: reference.clone(),
                            key: edge.key.clone(),
                            excluded_by_conflict: true,
                        });
                    }
                }
            }
        }
        citations
    }

    fn collect_conflicts(outcome: &ReasoningOutcome) -> Vec<ConflictAnnotation> {
        let mut seen = HashSet::new();
        let mut conflicts = Vec::new();
        for path in outcome.paths.iter().filter(|p| p.has_conflict()) {
            for edge in &path.edges {
                if !edge.sign_conflict || !seen.insert(edge.key.clone()) {
                    continue;
                }
                let Some(personal_sign) = edge.personal_sign else {
                    continue;
                };
                conflicts.push(ConflictAnnotation {
                    key: edge.key.clone(),
                    domain_sign: edge.sign,
                    personal_sign,
                    personal_evidence: edge.excluded_evidence.clone(),
                });
            }
        }
        conflicts
    }
}
