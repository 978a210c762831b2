//! Property tests for spine-ledger: sequential appends always verify,
//! transition counts always match the record sequence.

use proptest::prelude::*;

use spine_core::hashing::Digest;
use spine_core::models::{MeasurementPayload, Payload, Record, TruthStatus};
use spine_ledger::Ledger;

fn status_strategy() -> impl Strategy<Value = TruthStatus> {
    (0usize..5).prop_map(|i| TruthStatus::ALL[i])
}

fn build(entries: &[(TruthStatus, String, bool)]) -> Ledger {
    let mut ledger = Ledger::new();
    for (i, (status, text, with_falsifier)) in entries.iter().enumerate() {
        let payload = Payload::extension([
            ("seq", serde_json::json!(i)),
            ("text", serde_json::json!(text)),
        ]);
        let falsifier = with_falsifier.then(|| format!("contradicted by probe {i}"));
        ledger.append(payload, *status, falsifier, format!("v{}", i % 3)).unwrap();
    }
    ledger
}

proptest! {
    #[test]
    fn sequential_appends_always_verify(
        entries in prop::collection::vec((status_strategy(), ".{0,24}", any::<bool>()), 0..60)
    ) {
        let ledger = build(&entries);
        let result = ledger.verify();
        prop_assert!(result.ok);
        prop_assert_eq!(result.first_break_index, None);
        prop_assert_eq!(result.checked, entries.len());
    }

    #[test]
    fn transition_total_is_len_minus_one(
        entries in prop::collection::vec((status_strategy(), "[a-z]{0,8}", any::<bool>()), 1..60)
    ) {
        let ledger = build(&entries);
        prop_assert_eq!(ledger.transitions().total() as usize, entries.len() - 1);
    }

    #[test]
    fn tampering_any_record_is_detected_at_its_index(
        entries in prop::collection::vec((status_strategy(), "[a-z]{1,8}", any::<bool>()), 2..30),
        pick in any::<prop::sample::Index>()
    ) {
        let ledger = build(&entries);
        let index = pick.index(entries.len());
        let mut records = ledger.records().to_vec();
        records[index].falsifier = Some("forged".into());
        let audited = Ledger::open_unverified(ledger.genesis(), records);
        prop_assert_eq!(audited.verify().first_break_index, Some(index));
    }

    #[test]
    fn serialized_records_reverify_for_any_finite_float(bits in any::<u64>()) {
        let value = f64::from_bits(bits);
        prop_assume!(value.is_finite());
        let mut ledger = Ledger::new();
        ledger
            .append(
                Payload::Measurement(MeasurementPayload {
                    formula: "score".into(),
                    value,
                    unit: None,
                    inputs: Default::default(),
                }),
                TruthStatus::Pending,
                None,
                "v",
            )
            .unwrap();

        let line = serde_json::to_string(&ledger.records()[0]).unwrap();
        let record: Record = serde_json::from_str(&line).unwrap();
        let reloaded = Ledger::from_records(Digest::GENESIS, vec![record]).unwrap();
        prop_assert_eq!(reloaded.root(), ledger.root());
    }
}
