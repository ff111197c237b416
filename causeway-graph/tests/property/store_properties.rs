//! Property tests for the personal store's append-only contract.

use std::sync::Arc;

use proptest::prelude::*;

use causeway_core::config::PcsConfig;
use causeway_core::models::PcsSubscores;
use causeway_core::types::{Sign, Term};
use causeway_graph::{DomainStore, PersonalCandidate, PersonalStore, TermRegistry};

fn empty_domain() -> Arc<DomainStore> {
    let terms = (0..6).map(|i| Term::new(format!("t{i}"), format!("T{i}"))).collect();
    let registry = Arc::new(TermRegistry::from_terms(terms).unwrap());
    Arc::new(DomainStore::load(registry, Vec::new()).unwrap())
}

fn candidate_strategy() -> impl Strategy<Value = PersonalCandidate> {
    (
        0..6usize,
        0..6usize,
        prop_oneof![Just(Sign::Positive), Just(Sign::Negative), Just(Sign::Neutral)],
        0.0..=1.0f64,
        0.0..=1.0f64,
        0.0..=1.0f64,
        0.0..=1.0f64,
        0..10u32,
    )
        .prop_filter("self loops are rejected upfront", |(s, o, ..)| s != o)
        .prop_map(|(s, o, sign, p1, p2, p3, p4, doc)| {
            PersonalCandidate::new(
                format!("t{s}"),
                "causes",
                format!("t{o}"),
                sign,
                format!("doc{doc}"),
                PcsSubscores::new(p1, p2, p3, p4),
            )
        })
}

proptest! {
    // =========================================================================
    // Occurrence counters never decrease and edges are never removed
    // =========================================================================
    #[test]
    fn upserts_only_grow_the_store(
        candidates in prop::collection::vec(candidate_strategy(), 1..40)
    ) {
        let personal = PersonalStore::new(empty_domain(), PcsConfig::default());

        let mut prev_len = 0;
        for candidate in candidates {
            let key = candidate.key();
            let before = personal.get(&key);
            let after = personal.upsert(candidate).unwrap();

            if let Some(before) = before {
                prop_assert_eq!(after.occurrence_count, before.occurrence_count + 1);
                prop_assert!(after.last_occurred_at >= before.last_occurred_at);
                prop_assert_eq!(after.history.len(), before.history.len() + 1);
                // Prior history entries are untouched.
                for (old, new) in before.history.iter().zip(after.history.iter()) {
                    prop_assert_eq!(old.timestamp, new.timestamp);
                    prop_assert!((old.score - new.score).abs() < f64::EPSILON);
                }
                prop_assert_eq!(after.sign, before.sign);
            } else {
                prop_assert_eq!(after.occurrence_count, 1);
            }

            prop_assert!(personal.len() >= prev_len);
            prev_len = personal.len();
        }
    }

    // =========================================================================
    // Blended scores and weights stay inside [0, 1]
    // =========================================================================
    #[test]
    fn scores_stay_in_unit_range(
        candidates in prop::collection::vec(candidate_strategy(), 1..40)
    ) {
        let personal = PersonalStore::new(empty_domain(), PcsConfig::default());
        for candidate in candidates {
            let edge = personal.upsert(candidate).unwrap();
            prop_assert!((0.0..=1.0).contains(&edge.pcs_score));
            prop_assert!((0.0..=1.0).contains(&edge.personal_weight));
        }
    }

    // =========================================================================
    // The log matches the store: one event per applied upsert, in order
    // =========================================================================
    #[test]
    fn log_length_equals_applied_upserts(
        candidates in prop::collection::vec(candidate_strategy(), 1..40)
    ) {
        let personal = PersonalStore::new(empty_domain(), PcsConfig::default());
        let total = candidates.len();
        for candidate in candidates {
            personal.upsert(candidate).unwrap();
        }

        let events = personal.log().snapshot();
        prop_assert_eq!(events.len(), total);
        for (i, event) in events.iter().enumerate() {
            prop_assert_eq!(event.seq, i as u64);
        }
    }
}
