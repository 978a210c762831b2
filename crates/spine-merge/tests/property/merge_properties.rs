//! Property tests for spine-merge: commutativity and idempotence over
//! arbitrary overlapping ledgers.

use proptest::prelude::*;

use spine_core::models::TruthStatus;
use spine_ledger::Ledger;
use spine_merge::MergeEngine;
use test_fixtures::draft;

fn status_strategy() -> impl Strategy<Value = TruthStatus> {
    (0usize..5).prop_map(|i| TruthStatus::ALL[i])
}

/// A ledger holding a subset of events 0..20, each with some status.
fn ledger_strategy(vantage: &'static str) -> impl Strategy<Value = Ledger> {
    prop::collection::btree_map(0usize..20, status_strategy(), 0..20).prop_map(move |events| {
        let mut ledger = Ledger::new();
        for (event, status) in events {
            ledger.append_draft(draft(event, status, vantage)).unwrap();
        }
        ledger
    })
}

proptest! {
    #[test]
    fn merge_commutes(a in ledger_strategy("a"), b in ledger_strategy("b")) {
        let engine = MergeEngine::default();
        let ab = engine.merge(&a, &b).unwrap();
        let ba = engine.merge(&b, &a).unwrap();
        prop_assert_eq!(ab.ledger.root(), ba.ledger.root());
        prop_assert_eq!(ab.conflicts, ba.conflicts);
        prop_assert_eq!(ab.fidelity, ba.fidelity);
    }

    #[test]
    fn self_merge_is_idempotent(a in ledger_strategy("a")) {
        let out = MergeEngine::default().merge(&a, &a).unwrap();
        prop_assert_eq!(out.fidelity, 1.0);
        prop_assert_eq!(out.conflict_count(), 0);
        prop_assert_eq!(out.ledger.len(), a.len());
    }

    #[test]
    fn merged_ledger_always_verifies(a in ledger_strategy("a"), b in ledger_strategy("b")) {
        let out = MergeEngine::default().merge(&a, &b).unwrap();
        prop_assert!(out.ledger.verify().ok);
        prop_assert!((0.0..=1.0).contains(&out.fidelity));
        prop_assert_eq!(out.ledger.len(), out.distinct_events + out.conflict_count());
    }
}
