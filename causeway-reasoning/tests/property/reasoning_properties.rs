//! Property tests for query execution over arbitrary graphs.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use causeway_core::config::CausewayConfig;
use causeway_core::models::PcsSubscores;
use causeway_core::types::{Sign, Term, TermId};
use causeway_graph::{
    DomainStore, PersonalCandidate, PersonalStore, RelationSpec, TermRegistry,
};
use causeway_reasoning::ReasoningEngine;

const N_TERMS: usize = 8;

fn sign_strategy() -> impl Strategy<Value = Sign> {
    prop_oneof![Just(Sign::Positive), Just(Sign::Negative), Just(Sign::Neutral)]
}

fn relation_strategy() -> impl Strategy<Value = (usize, usize, Sign, f64)> {
    (0..N_TERMS, 0..N_TERMS, sign_strategy(), 0.05..=1.0f64)
}

fn upsert_strategy() -> impl Strategy<Value = (usize, usize, Sign, f64)> {
    (0..N_TERMS, 0..N_TERMS, sign_strategy(), 0.0..=1.0f64)
}

fn build_engine(
    relations: &[(usize, usize, Sign, f64)],
    upserts: &[(usize, usize, Sign, f64)],
) -> ReasoningEngine {
    let terms = (0..N_TERMS).map(|i| Term::new(format!("t{i}"), format!("T{i}"))).collect();
    let registry = Arc::new(TermRegistry::from_terms(terms).unwrap());

    let mut seen = HashSet::new();
    let specs: Vec<RelationSpec> = relations
        .iter()
        .filter(|(s, o, ..)| s != o)
        .filter(|(s, o, ..)| seen.insert((*s, *o)))
        .map(|(s, o, sign, conf)| {
            RelationSpec::new(format!("t{s}"), "causes", format!("t{o}"), *sign, *conf)
        })
        .collect();

    let config = CausewayConfig::default();
    let domain = Arc::new(DomainStore::load(registry, specs).unwrap());
    let personal = Arc::new(PersonalStore::new(domain.clone(), config.pcs.clone()));
    for (s, o, sign, p) in upserts {
        if s == o {
            continue;
        }
        personal
            .upsert(PersonalCandidate::new(
                format!("t{s}"),
                "observed",
                format!("t{o}"),
                *sign,
                format!("doc_{s}_{o}"),
                PcsSubscores::new(*p, *p, *p, *p),
            ))
            .unwrap();
    }

    ReasoningEngine::new(domain, personal, config).unwrap()
}

proptest! {
    // =========================================================================
    // Queries terminate within bounds on arbitrary (cyclic) graphs
    // =========================================================================
    #[test]
    fn queries_respect_hop_and_path_bounds(
        relations in prop::collection::vec(relation_strategy(), 0..40),
        upserts in prop::collection::vec(upsert_strategy(), 0..20),
        source in 0..N_TERMS,
        target in 0..N_TERMS,
    ) {
        let engine = build_engine(&relations, &upserts);
        let config = CausewayConfig::default();

        let conclusion = engine
            .query(&TermId::new(format!("t{source}")), &TermId::new(format!("t{target}")))
            .unwrap();

        prop_assert!(conclusion.paths.len() <= config.retrieval.max_paths);
        for path in &conclusion.paths {
            prop_assert!(path.len() <= config.retrieval.max_hops);
            prop_assert!(!path.is_empty());
            // No node repeats within a path.
            let mut nodes = path.nodes.clone();
            nodes.sort();
            nodes.dedup();
            prop_assert_eq!(nodes.len(), path.nodes.len());
        }
    }

    // =========================================================================
    // Fused weights, path strengths, and confidence stay in range
    // =========================================================================
    #[test]
    fn fused_values_stay_in_documented_ranges(
        relations in prop::collection::vec(relation_strategy(), 0..40),
        upserts in prop::collection::vec(upsert_strategy(), 0..20),
        source in 0..N_TERMS,
        target in 0..N_TERMS,
    ) {
        let engine = build_engine(&relations, &upserts);
        let conclusion = engine
            .query(&TermId::new(format!("t{source}")), &TermId::new(format!("t{target}")))
            .unwrap();

        prop_assert!((0.0..=1.0).contains(&conclusion.confidence));
        for path in &conclusion.paths {
            prop_assert!(path.strength > 0.0 && path.strength <= 1.0);
            for edge in &path.edges {
                prop_assert!((0.01..=1.0).contains(&edge.fused_weight));
                if edge.sign_conflict {
                    prop_assert!(edge.personal_weight == 0.0);
                    prop_assert!((edge.fused_weight - edge.domain_weight.clamp(0.01, 1.0)).abs() < 1e-12);
                }
            }
        }
    }

    // =========================================================================
    // Query execution never mutates either store
    // =========================================================================
    #[test]
    fn queries_leave_both_stores_untouched(
        relations in prop::collection::vec(relation_strategy(), 1..30),
        upserts in prop::collection::vec(upsert_strategy(), 1..15),
        source in 0..N_TERMS,
        target in 0..N_TERMS,
    ) {
        let engine = build_engine(&relations, &upserts);

        let domain_len = engine.domain().len();
        let personal_len = engine.personal().len();
        let log_len = engine.personal().log().len();

        for _ in 0..3 {
            engine
                .query(&TermId::new(format!("t{source}")), &TermId::new(format!("t{target}")))
                .unwrap();
        }

        prop_assert_eq!(engine.domain().len(), domain_len);
        prop_assert_eq!(engine.personal().len(), personal_len);
        prop_assert_eq!(engine.personal().log().len(), log_len);
    }
}
