//! Edge weight fusion (EES).
//!
//! ```text
//! W_D = domain_conf * (1 - decay) * semantic   (* evidence_bonus * gold_bonus)
//! W_P = PCS * personal_weight                  (* damping when a domain edge exists)
//! W   = W_D + W_P, clamped to [0.01, 1.0]
//! ```
//!
//! Sign-conflict arbitration: when the same key carries opposite signs in
//! the two stores, the personal contribution is excluded from the number
//! entirely and the fused weight equals `W_D`. The personal evidence rides
//! along as an annotation only.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use causeway_core::config::FusionConfig;
use causeway_core::constants::{EVIDENCE_BONUS_CAP, MIN_FUSED_WEIGHT};
use causeway_core::models::{FusedEdge, FusedPath, Provenance};
use causeway_core::types::Sign;
use causeway_graph::{DomainStore, PersonalStore};
use causeway_scoring::decay;

use crate::retrieval::{RawEdge, RawPath};

/// Fuses each retrieved edge with the other store's view of the same key.
pub struct EdgeWeightFuser<'a> {
    domain: &'a DomainStore,
    personal: &'a PersonalStore,
    config: &'a FusionConfig,
}

impl<'a> EdgeWeightFuser<'a> {
    pub fn new(
        domain: &'a DomainStore,
        personal: &'a PersonalStore,
        config: &'a FusionConfig,
    ) -> Self {
        Self {
            domain,
            personal,
            config,
        }
    }

    pub fn fuse_paths(&self, paths: &[RawPath], now: DateTime<Utc>) -> Vec<FusedPath> {
        paths.iter().map(|p| self.fuse_path(p, now)).collect()
    }

    /// Fuse every edge of a path and fold the path sign and strength.
    pub fn fuse_path(&self, path: &RawPath, now: DateTime<Utc>) -> FusedPath {
        let edges: Vec<FusedEdge> = path.edges.iter().map(|e| self.fuse_edge(e, now)).collect();

        let sign = Sign::product(edges.iter().map(|e| e.sign));
        // Weights are already clamped to (0, 1]; the product stays in range.
        let strength = edges.iter().map(|e| e.fused_weight).product::<f64>();
        let domain_edge_count = edges
            .iter()
            .filter(|e| matches!(e.provenance, Provenance::Domain | Provenance::Both))
            .count();

        let hex = Uuid::new_v4().simple().to_string();
        FusedPath {
            id: format!("path_{}", &hex[..8]),
            nodes: path.nodes.clone(),
            edges,
            sign,
            strength,
            domain_edge_count,
        }
    }

    fn fuse_edge(&self, raw: &RawEdge, now: DateTime<Utc>) -> FusedEdge {
        let key = raw.key().clone();

        // Both stores' views of the logical edge, regardless of which one
        // the retriever drew it from.
        let domain_edge = match raw {
            RawEdge::Domain(e) => Some(e),
            RawEdge::Personal(_) => self.domain.edge_by_key(&key),
        };
        let personal_edge = match raw {
            RawEdge::Personal(e) => Some(e.clone()),
            RawEdge::Domain(_) => self.personal.get(&key),
        };

        let (domain_weight, domain_conf, decay_factor, semantic_score) = match domain_edge {
            Some(e) => {
                let decay = decay::factor(&self.config.decay, now - e.last_confirmed_at);
                let base = e.confidence.value() * (1.0 - decay) * e.semantic_score;
                let evidence_bonus = 1.0
                    + (self.config.evidence_bonus_rate * f64::from(e.evidence_count))
                        .min(EVIDENCE_BONUS_CAP);
                let gold_bonus = if e.gold { self.config.gold_bonus } else { 1.0 };
                (
                    base * evidence_bonus * gold_bonus,
                    e.confidence.value(),
                    decay,
                    e.semantic_score,
                )
            }
            None => (0.0, 0.0, 0.0, 1.0),
        };

        let mut personal_weight = 0.0;
        let mut pcs_score = 0.0;
        let mut sign = raw.sign();
        let mut sign_conflict = false;
        let mut evidence = Vec::new();
        let mut excluded_evidence = Vec::new();
        let personal_sign = personal_edge.as_ref().map(|p| p.sign);

        match (&domain_edge, &personal_edge) {
            (Some(d), Some(p)) => {
                // Domain sign rules the fused edge either way.
                sign = d.sign;
                pcs_score = p.pcs_score;
                if d.sign == p.sign {
                    personal_weight =
                        p.pcs_score * p.personal_weight * self.config.personal_damping;
                    evidence.extend(p.evidence.iter().cloned());
                } else {
                    sign_conflict = true;
                    excluded_evidence.extend(p.evidence.iter().cloned());
                }
            }
            (None, Some(p)) => {
                sign = p.sign;
                pcs_score = p.pcs_score;
                personal_weight = p.pcs_score * p.personal_weight;
                evidence.extend(p.evidence.iter().cloned());
            }
            (Some(d), None) => {
                sign = d.sign;
            }
            (None, None) => {}
        }

        let provenance = match (domain_edge.is_some(), personal_edge.is_some()) {
            (true, true) if !sign_conflict => Provenance::Both,
            (true, _) => Provenance::Domain,
            _ => Provenance::Personal,
        };

        let fused_weight = (domain_weight + personal_weight).clamp(MIN_FUSED_WEIGHT, 1.0);

        if sign_conflict {
            tracing::debug!(
                key = %key,
                domain_weight,
                "sign conflict: personal contribution excluded from fusion"
            );
        }

        FusedEdge {
            key,
            sign,
            provenance,
            domain_weight,
            personal_weight,
            fused_weight,
            domain_conf,
            decay_factor,
            semantic_score,
            pcs_score,
            personal_sign,
            sign_conflict,
            evidence,
            excluded_evidence,
        }
    }
}
