//! Bounded breadth-first search over the union adjacency of both stores.
//!
//! Termination holds on any graph, cyclic or not: a path never revisits a
//! node and never exceeds `max_hops` edges.

use std::collections::VecDeque;

use causeway_core::types::TermId;
use causeway_graph::{DomainStore, PersonalStore};

use super::{RawEdge, RawPath};

pub(crate) fn search(
    domain: &DomainStore,
    personal: &PersonalStore,
    source: &TermId,
    target: &TermId,
    max_hops: usize,
    max_paths: usize,
) -> Vec<RawPath> {
    let mut results = Vec::new();
    let mut queue: VecDeque<(TermId, Vec<TermId>, Vec<RawEdge>)> = VecDeque::new();
    queue.push_back((source.clone(), vec![source.clone()], Vec::new()));

    while let Some((current, nodes, edges)) = queue.pop_front() {
        if results.len() >= max_paths {
            break;
        }
        if edges.len() >= max_hops {
            continue;
        }

        for edge in union_outgoing(domain, personal, &current) {
            let next = edge.key().object.clone();
            // Cycle guard: never revisit a node within one path.
            if nodes.contains(&next) {
                continue;
            }

            let mut new_nodes = nodes.clone();
            new_nodes.push(next.clone());
            let mut new_edges = edges.clone();
            new_edges.push(edge);

            if &next == target {
                results.push(RawPath {
                    nodes: new_nodes,
                    edges: new_edges,
                });
                if results.len() >= max_paths {
                    break;
                }
            } else {
                queue.push_back((next, new_nodes, new_edges));
            }
        }
    }

    results
}

/// Domain edges first, then personal; the expansion order feeds the
/// domain-count tie-break downstream.
fn union_outgoing(domain: &DomainStore, personal: &PersonalStore, term: &TermId) -> Vec<RawEdge> {
    let mut edges: Vec<RawEdge> = domain
        .outgoing(term)
        .into_iter()
        .cloned()
        .map(RawEdge::Domain)
        .collect();
    edges.extend(personal.outgoing(term).into_iter().map(RawEdge::Personal));
    edges
}
