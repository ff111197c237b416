//! Query orchestration.
//!
//! The engine owns shared handles to both stores plus a validated
//! configuration, and wires retrieval, fusion, aggregation, and conclusion
//! assembly into one read-only pipeline. Queries never touch store state,
//! so any number may run concurrently with ongoing personal upserts.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use causeway_core::config::{CausewayConfig, RetrievalConfig};
use causeway_core::errors::{CausewayResult, ConfigError, GraphError};
use causeway_core::models::ReasoningConclusion;
use causeway_core::types::TermId;
use causeway_graph::{DomainStore, PersonalStore};

use crate::aggregate::PathAggregator;
use crate::conclusion::ConclusionBuilder;
use crate::fusion::EdgeWeightFuser;
use crate::retrieval::GraphRetriever;

pub struct ReasoningEngine {
    domain: Arc<DomainStore>,
    personal: Arc<PersonalStore>,
    config: CausewayConfig,
}

impl ReasoningEngine {
    /// Construct with a validated configuration. A bad config is fatal here,
    /// never deferred to query time.
    pub fn new(
        domain: Arc<DomainStore>,
        personal: Arc<PersonalStore>,
        config: CausewayConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            domain,
            personal,
            config,
        })
    }

    pub fn domain(&self) -> &DomainStore {
        &self.domain
    }

    pub fn personal(&self) -> &PersonalStore {
        &self.personal
    }

    /// Answer a causal query with the configured hop bound.
    pub fn query(&self, source: &TermId, target: &TermId) -> CausewayResult<ReasoningConclusion> {
        self.query_with_hops(source, target, None)
    }

    /// Answer a causal query. A `max_hops` override is checked against the
    /// same ceiling as the configured bound and rejected beyond it.
    pub fn query_with_hops(
        &self,
        source: &TermId,
        target: &TermId,
        max_hops: Option<usize>,
    ) -> CausewayResult<ReasoningConclusion> {
        let registry = self.domain.registry();
        for term in [source, target] {
            if !registry.contains(term) {
                return Err(GraphError::UnknownTerm {
                    term: term.to_string(),
                }
                .into());
            }
        }

        let hops = match max_hops {
            Some(h) => {
                RetrievalConfig::check_hops(h)?;
                h
            }
            None => self.config.retrieval.max_hops,
        };

        let hex = Uuid::new_v4().simple().to_string();
        let query_id = format!("q_{}", &hex[..8]);

        let retriever = GraphRetriever::new(&self.domain, &self.personal, &self.config.retrieval);
        let raw = retriever.retrieve(source, target, hops);

        let fuser = EdgeWeightFuser::new(&self.domain, &self.personal, &self.config.fusion);
        let fused = fuser.fuse_paths(&raw, Utc::now());

        let outcome = PathAggregator::aggregate(fused);
        let conclusion = ConclusionBuilder::build(query_id, source, target, outcome);

        tracing::info!(
            query_id = %conclusion.query_id,
            source = %source,
            target = %target,
            direction = ?conclusion.direction,
            confidence = conclusion.confidence,
            paths = conclusion.paths.len(),
            conflicts = conclusion.conflicts.len(),
            "query complete"
        );

        Ok(conclusion)
    }
}
