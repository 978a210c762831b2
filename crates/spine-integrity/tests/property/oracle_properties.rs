//! Property tests for spine-integrity: appending never lowers coverage or
//! information, and allocation always hits the requested count.

use proptest::prelude::*;

use spine_core::models::{Payload, TruthStatus};
use spine_integrity::recovery::allocate;
use spine_integrity::{IntegrityOracle, TargetDistribution};
use spine_ledger::Ledger;

fn status_strategy() -> impl Strategy<Value = TruthStatus> {
    (0usize..5).prop_map(|i| TruthStatus::ALL[i])
}

proptest! {
    #[test]
    fn append_never_lowers_coverage_or_information(
        statuses in prop::collection::vec(status_strategy(), 1..80)
    ) {
        let oracle = IntegrityOracle::default();
        let mut ledger = Ledger::new();
        let mut prev = oracle.evaluate(&ledger);
        for (i, s) in statuses.into_iter().enumerate() {
            ledger
                .append(Payload::extension([("i", serde_json::json!(i))]), s, None, "v")
                .unwrap();
            let next = oracle.evaluate(&ledger);
            prop_assert!(next.coverage >= prev.coverage);
            prop_assert!(next.information >= prev.information);
            prop_assert!((0.0..=1.0).contains(&next.maturity));
            prev = next;
        }
    }

    #[test]
    fn allocation_sums_to_requested(
        weights in prop::array::uniform5(prop::array::uniform5(0.0f64..5.0)),
        n in 0usize..500
    ) {
        prop_assume!(weights.iter().flatten().sum::<f64>() > 0.0);
        let target = TargetDistribution::new(weights).unwrap();
        let total: usize = allocate(&target, n).iter().map(|a| a.count).sum();
        prop_assert_eq!(total, n);
    }
}
