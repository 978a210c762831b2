//! Scenario tests for the Bayesian predictor.

use spine_core::models::TruthStatus::{self, *};
use spine_prediction::BayesianPredictor;
use test_fixtures::{ledger_from_statuses, uniform_ledger};

#[test]
fn single_canonical_observation_predicts_pending_above_half() {
    let ledger = ledger_from_statuses(&[Pending, Verified, Canonical, Pending], "a");
    let matrix = ledger.transitions();
    assert_eq!(matrix.total(), 3);

    let prediction = BayesianPredictor::default().predict_next(&matrix, Canonical);
    assert_eq!(prediction.destination, Pending);
    assert!(prediction.probability > 0.5);
    assert!((prediction.probability - 0.6).abs() < 1e-12);
}

#[test]
fn predict_from_tip_uses_last_status() {
    let ledger = ledger_from_statuses(&[Pending, Verified, Canonical, Pending], "a");
    let prediction = BayesianPredictor::default().predict_from_tip(&ledger).unwrap();
    assert_eq!(prediction.source, Pending);
    assert_eq!(prediction.destination, Verified);
}

#[test]
fn empty_ledger_has_no_tip_prediction() {
    let ledger = ledger_from_statuses(&[], "a");
    assert!(BayesianPredictor::default().predict_from_tip(&ledger).is_none());
}

#[test]
fn uniform_ledger_keeps_hyper_self_below_other_destinations() {
    let matrix = uniform_ledger().transitions();
    let predictor = BayesianPredictor::default();
    let all = predictor.predict_all(&matrix);
    assert_eq!(all.len(), TruthStatus::ALL.len());
    let hyper = &all[Hyper.index()];
    assert!(hyper.probability(Hyper) < hyper.probability(Canonical));
    for dist in &all {
        assert!(dist.is_normalized());
        assert_eq!(dist.observations, 5);
    }
}
