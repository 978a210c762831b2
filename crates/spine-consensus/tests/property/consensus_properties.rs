//! Property tests for spine-consensus: single-vantage rounds never reach
//! Canonical, and reputation always stays within its bounds.

use proptest::prelude::*;

use spine_core::config::FalsifierPolicy;
use spine_core::hashing::Digest;
use spine_core::models::{Attestation, Layer, Verdict};
use spine_consensus::{ConsensusEngine, ConsensusRound, RoundContext};

const TOPIC: &str = "http/example.org";

fn attestation(agent: usize, vantage: usize, evidence: u8) -> Attestation {
    Attestation::new(
        format!("agent-{agent}"),
        TOPIC,
        Layer::Observable,
        Digest::of(&[evidence]),
        format!("vantage-{vantage}"),
        0.9,
    )
    .unwrap()
}

proptest! {
    #[test]
    fn one_vantage_never_canonical(count in 1usize..12, quorum in 2usize..6, evidence in 0u8..3) {
        let mut round = ConsensusRound::new(TOPIC).unwrap();
        for i in 0..count {
            round.add(attestation(i, 0, evidence)).unwrap();
        }
        let ctx = RoundContext::new(0, quorum).unwrap();
        let verdict = round.evaluate(&ctx, FalsifierPolicy::Advisory).verdict;
        prop_assert_ne!(verdict, Verdict::Canonical);
        prop_assert_ne!(verdict, Verdict::Verified);
    }

    #[test]
    fn reputation_stays_bounded(
        rounds in prop::collection::vec(
            prop::collection::vec((0usize..4, 0usize..3, 0u8..2), 0..8),
            1..40
        )
    ) {
        let mut engine = ConsensusEngine::default();
        for (r, entries) in rounds.into_iter().enumerate() {
            let attestations: Vec<_> = entries
                .into_iter()
                .map(|(agent, vantage, evidence)| attestation(agent, vantage, evidence))
                .collect();
            let ctx = RoundContext::new(r as u64, 2).unwrap();
            engine.run(TOPIC, attestations, &ctx).unwrap();
        }
        for (_, score) in engine.reputation().iter() {
            prop_assert!((0.1..=10.0).contains(&score));
        }
    }
}
