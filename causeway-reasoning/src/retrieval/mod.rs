//! Domain-first path retrieval.
//!
//! A direct domain edge between the endpoints always ranks first; this is
//! the precedence contract, not a heuristic. Longer paths over the union of
//! both stores are gathered by bounded breadth-first search as
//! corroboration. A disconnected pair yields an empty result, not an error.

mod bfs;

use std::cmp::Reverse;
use std::collections::HashSet;

use causeway_core::config::RetrievalConfig;
use causeway_core::types::{EdgeKey, Sign, TermId};
use causeway_graph::{DomainEdge, DomainStore, PersonalEdge, PersonalStore};

/// An edge drawn during retrieval, tagged with the store it came from.
#[derive(Debug, Clone)]
pub enum RawEdge {
    Domain(DomainEdge),
    Personal(PersonalEdge),
}

impl RawEdge {
    pub fn key(&self) -> &EdgeKey {
        match self {
            RawEdge::Domain(e) => &e.key,
            RawEdge::Personal(e) => &e.key,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            RawEdge::Domain(e) => &e.id,
            RawEdge::Personal(e) => &e.id,
        }
    }

    pub fn sign(&self) -> Sign {
        match self {
            RawEdge::Domain(e) => e.sign,
            RawEdge::Personal(e) => e.sign,
        }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, RawEdge::Domain(_))
    }
}

/// A candidate path before fusion: a node chain and its edge sequence.
#[derive(Debug, Clone)]
pub struct RawPath {
    pub nodes: Vec<TermId>,
    pub edges: Vec<RawEdge>,
}

impl RawPath {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn domain_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_domain()).count()
    }

    // Logical identity of the path. Two raw paths that differ only in which
    // store an edge came from fuse to the same result, so they count once.
    fn key_sequence(&self) -> Vec<String> {
        self.edges.iter().map(|e| e.key().to_string()).collect()
    }
}

/// Reads both stores, never writes either.
pub struct GraphRetriever<'a> {
    domain: &'a DomainStore,
    personal: &'a PersonalStore,
    config: &'a RetrievalConfig,
}

impl<'a> GraphRetriever<'a> {
    pub fn new(
        domain: &'a DomainStore,
        personal: &'a PersonalStore,
        config: &'a RetrievalConfig,
    ) -> Self {
        Self {
            domain,
            personal,
            config,
        }
    }

    /// Candidate paths from `source` to `target`, at most `max_hops` edges
    /// each. Ordering: direct domain edge first, then shorter paths,
    /// equal-length ties broken by domain edge count.
    pub fn retrieve(&self, source: &TermId, target: &TermId, max_hops: usize) -> Vec<RawPath> {
        if source == target {
            return Vec::new();
        }

        let mut paths = Vec::new();

        // Step 1: direct domain edge, ranked first by contract.
        if let Some(edge) = self.domain.direct_edge(source, target) {
            paths.push(RawPath {
                nodes: vec![source.clone(), target.clone()],
                edges: vec![RawEdge::Domain(edge.clone())],
            });
        }

        // Step 2: bounded BFS over the union of both stores.
        paths.extend(bfs::search(
            self.domain,
            self.personal,
            source,
            target,
            max_hops,
            self.config.max_paths,
        ));

        // Step 3: drop duplicate paths.
        let mut seen: HashSet<Vec<String>> = HashSet::new();
        paths.retain(|p| seen.insert(p.key_sequence()));

        // Step 4: rank. The direct domain edge sorts first naturally
        // (length 1, maximal domain count).
        paths.sort_by_key(|p| (p.len(), Reverse(p.domain_edge_count())));
        paths.truncate(self.config.max_paths);

        tracing::debug!(
            source = %source,
            target = %target,
            max_hops,
            paths = paths.len(),
            "retrieval complete"
        );

        paths
    }
}
